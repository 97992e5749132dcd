//! The four credential fields collected by the setup form

use serde::{Deserialize, Serialize};

/// Identifies one input of the setup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupField {
    AccessKey,
    SecretKey,
    AccountId,
    CryptKey,
}

impl SetupField {
    /// All fields in the order they are shown and focused
    pub const ALL: [SetupField; 4] = [
        SetupField::AccessKey,
        SetupField::SecretKey,
        SetupField::AccountId,
        SetupField::CryptKey,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SetupField::AccessKey => "Access Key",
            SetupField::SecretKey => "Secret Key",
            SetupField::AccountId => "Account ID",
            SetupField::CryptKey => "Encryption Key",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SetupField::AccessKey => "S3 access key",
            SetupField::SecretKey => "S3 secret key",
            SetupField::AccountId => "Account identifier",
            SetupField::CryptKey => "Key used to encrypt your notes",
        }
    }

    /// Secret fields are masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, SetupField::SecretKey | SetupField::CryptKey)
    }

    /// Position of the field in [`SetupField::ALL`]
    pub fn index(&self) -> usize {
        match self {
            SetupField::AccessKey => 0,
            SetupField::SecretKey => 1,
            SetupField::AccountId => 2,
            SetupField::CryptKey => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<SetupField> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for SetupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
