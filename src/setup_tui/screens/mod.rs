//! Screen modules for the setup TUI

pub mod help;
pub mod setup;

pub use help::HelpScreen;
pub use setup::SetupScreen;
