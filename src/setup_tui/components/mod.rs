//! Reusable UI components for the setup screen

pub mod done_button;
pub mod form_field;
pub mod status_display;

pub use done_button::DoneButton;
pub use form_field::FormField;
pub use status_display::StatusDisplay;
