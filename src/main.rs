// Entrypoint for the CLI application.
// - Keeps `main` small: build the configuration, create an API client
//   and hand both to the run coordinator.
// - Returns `anyhow::Result` so fatal setup errors print and exit non-zero.

use mandrill_push_cli::{api::ApiClient, config::Config, push, ui};

fn main() -> anyhow::Result<()> {
    // Configuration comes from environment variables; only the API key
    // is required. See `config::Config::from_env`.
    let config = Config::from_env()?;
    let api = ApiClient::new(&config.endpoint)?;

    // The interactive prompt blocks before the first network call unless
    // PUSH_ASSUME_YES selected the auto-confirmer.
    if config.assume_yes {
        push::run(&config, &api, &ui::AssumeYes)
    } else {
        push::run(&config, &api, &ui::Interactive)
    }
}
