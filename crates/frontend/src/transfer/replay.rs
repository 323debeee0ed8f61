//! Pure math behind the checkpoint replay.
//!
//! The service returns all checkpoints at once; the view replays them on a
//! fixed one-second timer. Keeping the arithmetic here means a future
//! push-based progress channel only has to swap the timer loop.

/// Interval between replayed checkpoints.
pub const REPLAY_INTERVAL_MS: u32 = 1000;

/// Progress bar width for a checkpoint, in percent. Reaches 100 only when
/// `step == total_steps`; a zero total pins the bar at 0.
pub fn percent(step: u32, total_steps: u32) -> f64 {
    if total_steps == 0 {
        return 0.0;
    }
    let pct = (step as f64 / total_steps as f64) * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Textual "current/total" indicator next to the bar.
pub fn step_label(step: u32, total_steps: u32) -> String {
    format!("Step: {step}/{total_steps}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_reaches_full_width_only_on_final_step() {
        let total = 300;
        let steps = [30, 60, 90, 120, 150, 180, 210, 240, 270, 300];
        for step in steps {
            let pct = percent(step, total);
            if step == total {
                assert_eq!(pct, 100.0);
            } else {
                assert!(pct < 100.0, "step {step} must stay below 100%");
            }
        }
    }

    #[test]
    fn overshooting_checkpoints_are_clamped() {
        assert_eq!(percent(500, 300), 100.0);
    }

    #[test]
    fn zero_total_pins_bar_at_zero() {
        assert_eq!(percent(10, 0), 0.0);
    }

    #[test]
    fn label_format() {
        assert_eq!(step_label(30, 300), "Step: 30/300");
    }
}
