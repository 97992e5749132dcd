//! Toolkit-independent model of the credential setup form

pub mod controller;
pub mod field;
pub mod state;

pub use controller::{Credentials, FormEvent, SetupController, SetupOutcome, SubscriptionId};
pub use field::SetupField;
pub use state::{recompute_enabled, SetupState};
