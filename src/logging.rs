use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive: `--debug` wins, then `RUST_LOG`, then the
/// config file, then `--quiet`.
pub fn resolve_filter(
    debug: bool,
    quiet: bool,
    configured: Option<&str>,
    env: Option<&str>,
) -> String {
    if debug {
        return "debug".to_string();
    }
    if let Some(filter) = env.filter(|f| !f.trim().is_empty()) {
        return filter.to_string();
    }
    if let Some(filter) = configured {
        return filter.to_string();
    }
    if quiet {
        "error".to_string()
    } else {
        DEFAULT_FILTER.to_string()
    }
}

/// Installs the global subscriber. Log lines go to stderr so they never mix
/// with command output.
pub fn init(filter: &str) {
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::new(filter))
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging unavailable: {}", e);
    }
}
