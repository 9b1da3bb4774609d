// Operator-facing console pieces: the welcome banner and the
// confirmation gate that stands between listing and the first
// overwriting API call.

use crate::config::Config;
use anyhow::Result;
use dialoguer::Confirm;

/// Print what is about to happen: which key is in use, where templates
/// and metadata come from, and every template that will be overwritten.
pub fn print_welcome(config: &Config, template_files: &[String]) {
    println!();
    println!(
        "This tool updates Mandrill templates for API key {}",
        config.api_key
    );
    println!();
    println!(
        "Usage: template .html files are read from \"{}\".",
        config.template_dir
    );
    println!("The filenames must match the slugs of the respective templates.");
    println!(
        "Template metadata is read from \"{}\".",
        config.metadata_file
    );
    println!();
    println!("The following templates will be updated:");
    println!("-----------------");
    for template_file in template_files {
        println!("{template_file}");
    }
    println!("-----------------");
    println!();
}

/// Confirmation gate before any remote mutation. Ok(true) proceeds,
/// Ok(false) is an operator decline, Err is an interrupted prompt; the
/// coordinator treats the last two identically (abort, zero calls).
pub trait Confirmer {
    fn confirm(&self) -> Result<bool>;
}

/// Interactive prompt; Enter proceeds, Ctrl+C aborts.
pub struct Interactive;

impl Confirmer for Interactive {
    fn confirm(&self) -> Result<bool> {
        let proceed = Confirm::new()
            .with_prompt("Press enter to continue (Ctrl+C to abort)")
            .default(true)
            .interact()?;
        Ok(proceed)
    }
}

/// Auto-confirmer for automation; never blocks.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self) -> Result<bool> {
        Ok(true)
    }
}
