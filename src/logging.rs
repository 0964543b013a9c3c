use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log level: `--debug` wins, then `--quiet`, then `RUST_LOG`, else info.
/// Everything goes to stderr; stdout is reserved for tables and listings.
pub fn init_logging(debug: bool, quiet: bool) {
    let filter = if debug {
        EnvFilter::new("kira_careerplan=debug")
    } else if quiet {
        EnvFilter::new("kira_careerplan=warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kira_careerplan=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
