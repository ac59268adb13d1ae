use clap::Parser;
use select2_autocomplete::app::App;
use select2_autocomplete::cli::Args;
use select2_autocomplete::config::Config;
use select2_autocomplete::logging::setup_logging;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logging isn't up yet, so a bad config can only go to stderr.
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:?}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(port) = args.port {
        config.port = port;
    }
    setup_logging(&config, args.tracing);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT_SHORT"),
        environment = if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        },
        "starting select2-autocomplete"
    );

    App::new(config).run().await
}
