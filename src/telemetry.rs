//! Logging setup.
//!
//! Logs go to stderr so that stdout carries nothing but demo output.
//! `RUST_LOG` takes precedence over the level passed to [`init`].

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(LevelFilter::WARN);
        init(LevelFilter::DEBUG);
        assert!(tracing::dispatcher::has_been_set());
        tracing::info!("still logging after second init");
    }
}
