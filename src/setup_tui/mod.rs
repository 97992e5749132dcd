//! Terminal User Interface for the credential setup form

pub mod app;
pub mod components;
pub mod screens;
pub mod traits;
pub mod ui;

pub use app::App;
pub use screens::SetupScreen;
