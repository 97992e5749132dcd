//! Rendering of confirmed credentials for the presenting host

use clap::ValueEnum;

use crate::error::Result;
use crate::form::Credentials;

/// Output layout for the captured values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A single JSON object
    #[default]
    Json,
    /// An `[s3]` section in the notes app's config.ini layout
    Ini,
}

impl OutputFormat {
    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Ini => "ini",
        }
    }
}

/// Render the credentials in the requested format
pub fn render(credentials: &Credentials, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(credentials)?),
        OutputFormat::Ini => Ok(render_ini(credentials)),
    }
}

fn render_ini(credentials: &Credentials) -> String {
    let mut out = String::from("[s3]\n");
    for (key, value) in [
        ("accesskey", &credentials.access_key),
        ("secretkey", &credentials.secret_key),
        ("user_id", &credentials.account_id),
        ("crypt_key", &credentials.crypt_key),
    ] {
        out.push_str(key);
        out.push_str(" = ");
        // INI values are single line
        out.push_str(&value.replace(['\r', '\n'], ""));
        out.push('\n');
    }
    out
}
