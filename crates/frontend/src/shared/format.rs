//! Display formatting for slider values.

/// Format a slider value for its paired label: fractional-step controls show
/// 3 decimals, integer-step controls show none.
pub fn format_param(value: f64, fractional: bool) -> String {
    if fractional {
        format!("{:.3}", value)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_controls_show_three_decimals() {
        assert_eq!(format_param(0.003, true), "0.003");
        assert_eq!(format_param(1.0, true), "1.000");
        assert_eq!(format_param(0.8, true), "0.800");
    }

    #[test]
    fn integer_controls_show_none() {
        assert_eq!(format_param(300.0, false), "300");
        assert_eq!(format_param(1000.0, false), "1000");
    }
}
