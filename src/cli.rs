use clap::{Parser, ValueEnum};

/// Select2 autocomplete endpoints over in-memory tags and lists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Log output format
    #[arg(long, value_enum, default_value_t = default_tracing_format())]
    pub tracing: TracingFormat,

    /// Port to listen on (overrides `PORT`)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TracingFormat {
    /// Compact, human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

/// Pretty while developing, JSON for release builds.
fn default_tracing_format() -> TracingFormat {
    if cfg!(debug_assertions) {
        TracingFormat::Pretty
    } else {
        TracingFormat::Json
    }
}
