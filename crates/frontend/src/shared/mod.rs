pub mod api_utils;
pub mod dom;
pub mod format;
pub mod theme;
pub mod toast;
