//! Transient view state of the setup form

use super::field::SetupField;

/// The four captured values plus the derived "Done" flag.
///
/// `done_enabled` is only ever written by [`SetupState::set`] and the
/// constructors, so it always equals [`recompute_enabled`] of the record.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SetupState {
    access_key: String,
    secret_key: String,
    account_id: String,
    crypt_key: String,
    done_enabled: bool,
}

impl SetupState {
    /// Empty record, as created when the screen opens
    pub fn new() -> Self {
        Self::default()
    }

    /// Record prefilled by the host; the flag is derived from the values
    pub fn prefilled(access_key: &str, secret_key: &str, account_id: &str, crypt_key: &str) -> Self {
        let mut state = Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            account_id: account_id.to_string(),
            crypt_key: crypt_key.to_string(),
            done_enabled: false,
        };
        state.done_enabled = recompute_enabled(&state);
        state
    }

    pub fn value(&self, field: SetupField) -> &str {
        match field {
            SetupField::AccessKey => &self.access_key,
            SetupField::SecretKey => &self.secret_key,
            SetupField::AccountId => &self.account_id,
            SetupField::CryptKey => &self.crypt_key,
        }
    }

    /// Replace one field and recompute the flag. Returns the new flag.
    pub fn set(&mut self, field: SetupField, value: String) -> bool {
        let slot = match field {
            SetupField::AccessKey => &mut self.access_key,
            SetupField::SecretKey => &mut self.secret_key,
            SetupField::AccountId => &mut self.account_id,
            SetupField::CryptKey => &mut self.crypt_key,
        };
        *slot = value;
        self.done_enabled = recompute_enabled(self);
        self.done_enabled
    }

    pub fn done_enabled(&self) -> bool {
        self.done_enabled
    }

    /// Number of non-empty fields
    pub fn filled_count(&self) -> usize {
        SetupField::ALL
            .iter()
            .filter(|field| !self.value(**field).is_empty())
            .count()
    }
}

impl std::fmt::Debug for SetupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupState")
            .field("access_key", &self.access_key)
            .field("secret_key", &redact(&self.secret_key))
            .field("account_id", &self.account_id)
            .field("crypt_key", &redact(&self.crypt_key))
            .field("done_enabled", &self.done_enabled)
            .finish()
    }
}

/// True iff every field holds a non-empty string
pub fn recompute_enabled(state: &SetupState) -> bool {
    SetupField::ALL
        .iter()
        .all(|field| !state.value(*field).is_empty())
}

pub(crate) fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}
