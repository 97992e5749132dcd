use std::path::PathBuf;

use clap::Parser;
use notes_setup::{config::SetupConfig, handoff::OutputFormat};

#[derive(Parser)]
#[command(name = "notes-setup")]
#[command(about = "Collect the S3 and encryption credentials for notes sync")]
#[command(version)]
pub struct Cli {
    /// How to print the captured credentials
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Show secret fields in clear text
    #[arg(long)]
    pub no_mask: bool,

    /// Comma separated key script to run without a terminal
    /// (e.g. "text:AKIA,tab,text:secret,...")
    #[arg(long)]
    pub script: Option<String>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command line flags take precedence over the environment
    pub fn apply(&self, config: &mut SetupConfig) {
        if self.no_mask {
            config.mask_secrets = false;
        }
        if let Some(script) = &self.script {
            config.script_keys = Some(script.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
    }
}
