// Runtime configuration. The settings live in an explicit struct that is
// populated once from the environment and handed to the coordinator;
// nothing in the tool reads the environment after startup.

use anyhow::{Context, Result};

/// Mandrill template-update endpoint.
/// https://mandrillapp.com/api/docs/templates.JSON.html#method=update
pub const DEFAULT_ENDPOINT: &str = "https://mandrillapp.com/api/1.0/templates/update.json";

/// Everything one run needs. Built via `Config::from_env` and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key, sent inside every payload.
    pub api_key: String,
    /// Template update endpoint URL.
    pub endpoint: String,
    /// Directory containing the template .html files. Filenames must
    /// match the slugs of the templates they overwrite.
    pub template_dir: String,
    /// Path to the metadata CSV file.
    pub metadata_file: String,
    /// Skip the interactive confirmation prompt (for automation).
    pub assume_yes: bool,
}

impl Config {
    /// Read configuration from environment variables. Only the API key is
    /// required; everything else falls back to a default.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("MANDRILL_API_KEY").context("MANDRILL_API_KEY must be set")?;
        let endpoint =
            std::env::var("MANDRILL_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        let template_dir =
            std::env::var("TEMPLATE_DIR").unwrap_or_else(|_| "../uploadThese".into());
        let metadata_file =
            std::env::var("METADATA_FILE").unwrap_or_else(|_| "../metadata/metadata.csv".into());
        let assume_yes = matches!(
            std::env::var("PUSH_ASSUME_YES").as_deref(),
            Ok("1") | Ok("true")
        );
        Ok(Config {
            api_key,
            endpoint,
            template_dir,
            metadata_file,
            assume_yes,
        })
    }
}
