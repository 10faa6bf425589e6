pub mod picker;
pub mod toggle;

pub use picker::ThemePicker;
pub use toggle::ThemeToggle;
