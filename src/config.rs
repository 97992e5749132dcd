//! Centralized configuration for notes-setup

use std::path::PathBuf;

use crate::error::{Result, SetupError};
use crate::form::SetupState;

/// Application configuration
#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Where tracing output goes while the screen owns the terminal
    pub log_file: PathBuf,
    /// Render secret fields as bullets
    pub mask_secrets: bool,
    /// Comma separated key script for headless runs
    pub script_keys: Option<String>,
    /// Values shown in the form when it opens
    pub prefill: Prefill,
}

/// Initial field values supplied by the host
#[derive(Clone, Default)]
pub struct Prefill {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub account_id: Option<String>,
    pub crypt_key: Option<String>,
}

impl std::fmt::Debug for Prefill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prefill")
            .field("access_key", &self.access_key.is_some())
            .field("secret_key", &self.secret_key.is_some())
            .field("account_id", &self.account_id.is_some())
            .field("crypt_key", &self.crypt_key.is_some())
            .finish()
    }
}

impl Prefill {
    /// Build the initial form record; the Done flag is derived from the values
    pub fn to_state(&self) -> SetupState {
        SetupState::prefilled(
            self.access_key.as_deref().unwrap_or_default(),
            self.secret_key.as_deref().unwrap_or_default(),
            self.account_id.as_deref().unwrap_or_default(),
            self.crypt_key.as_deref().unwrap_or_default(),
        )
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("notes_setup.log"),
            mask_secrets: true,
            script_keys: None,
            prefill: Prefill::default(),
        }
    }
}

impl SetupConfig {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_file = std::env::var("NOTES_SETUP_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        let mask_secrets =
            parse_env_var("NOTES_SETUP_MASK_SECRETS")?.unwrap_or(defaults.mask_secrets);

        let script_keys = std::env::var("NOTES_SETUP_SCRIPT_KEYS").ok();

        let prefill = Prefill {
            access_key: std::env::var("NOTES_ACCESS_KEY").ok(),
            secret_key: std::env::var("NOTES_SECRET_KEY").ok(),
            account_id: std::env::var("NOTES_ACCOUNT_ID").ok(),
            crypt_key: std::env::var("NOTES_CRYPT_KEY").ok(),
        };

        Ok(SetupConfig {
            log_file,
            mask_secrets,
            script_keys,
            prefill,
        })
    }
}

/// Parse an environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var_name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| SetupError::InvalidEnvVar {
                name: var_name.to_string(),
                value: val.clone(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
