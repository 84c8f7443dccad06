use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default filter.
/// Panics if a global subscriber is already set, so call it once from `main`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt().with_env_filter(filter_from(directives.as_deref())).init();
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
