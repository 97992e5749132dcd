//! notes-setup: a terminal form that collects the S3 and encryption
//! credentials a synced notes app needs, and hands them to the caller once
//! all four are filled in.

pub mod config;
pub mod error;
pub mod form;
pub mod handoff;
pub mod logging;
pub mod script;
pub mod setup_tui;

pub use error::{Result, SetupError};
pub use form::{Credentials, SetupController, SetupOutcome};
