use crate::cli::TracingFormat;
use crate::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Configure and initialize logging for the application.
pub fn setup_logging(config: &Config, tracing_format: TracingFormat) {
    // `RUST_LOG` wins; otherwise only this crate logs below `warn`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let base_level = &config.log_level;
        EnvFilter::new(format!("warn,select2_autocomplete={base_level}"))
    });

    match tracing_format {
        TracingFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_target(true).compact())
                .init();
        }
        TracingFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .json()
                        .with_current_span(true)
                        .with_span_list(false),
                )
                .init();
        }
    }
}
