// The push loop and the run coordinator that strings the stages
// together: list, load metadata, confirm, push, tally.

use crate::api::{PushOutcome, TemplateApi};
use crate::config::Config;
use crate::metadata::{self, MetadataTable};
use crate::payload::Payload;
use crate::templates;
use crate::ui::{self, Confirmer};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Push every template in listing order, one blocking call at a time.
/// Failed updates are reported and skipped over; the return value is the
/// number of calls that came back with status 200. An unreadable
/// template file aborts the loop — the directory no longer matches what
/// the operator confirmed.
pub fn push_templates(
    api: &dyn TemplateApi,
    config: &Config,
    template_files: &[String],
    meta_table: &MetadataTable,
) -> Result<usize> {
    let mut successes = 0usize;

    println!();
    println!("Pushing files:");
    println!("=================");

    for template_file in template_files {
        print!("Updating {template_file}...");

        let slug = templates::slug_for(template_file);
        let code = templates::read_template(&config.template_dir, template_file)?;

        let meta = meta_table.get(slug);
        if meta.is_none() {
            print!("Not adding any metadata.");
        }
        let payload = Payload::build(&config.api_key, slug, code, meta);
        std::io::stdout().flush().ok();

        // Spinner draws on stderr, so the partial progress line above
        // stays intact while the blocking call is in flight.
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message(format!("Pushing {slug}..."));
        spinner.enable_steady_tick(Duration::from_millis(120));
        let outcome = api.update_template(&payload);
        spinner.finish_and_clear();

        match outcome {
            PushOutcome::Success => {
                successes += 1;
                println!("success");
            }
            PushOutcome::HttpError { status, body } => {
                println!("Error: Status Code is {}", status.as_u16());
                println!("Response JSON is {body}");
            }
            PushOutcome::TransportError(err) => {
                println!("Error: {err}. Nothing updated.");
            }
        }
    }

    println!("=================");
    println!();
    Ok(successes)
}

/// Run the whole synchronization. Per-template failures do not affect
/// the exit status; only a bad template directory, a broken metadata
/// file or an aborted confirmation do.
pub fn run(config: &Config, api: &dyn TemplateApi, confirmer: &dyn Confirmer) -> Result<()> {
    let template_files = templates::list_templates(&config.template_dir)?;
    let meta_table = metadata::load_metadata(&config.metadata_file)?;

    ui::print_welcome(config, &template_files);
    if !confirmer.confirm().unwrap_or(false) {
        println!("Aborted.");
        std::process::exit(1);
    }

    let successes = push_templates(api, config, &template_files, &meta_table)?;

    let errors = template_files.len() - successes;
    println!("Successfully pushed {successes} templates. Errors: {errors}");
    Ok(())
}
