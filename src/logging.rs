use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout is reserved for the table.
/// `RUST_LOG` overrides the verbosity flag when set.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,ghrepos={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
