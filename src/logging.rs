//! Logger setup.

use crate::config::Config;

/// Install an `env_logger` logger filtered at the configured level.
///
/// `RUST_LOG` still overrides the configured level. Calling this again once
/// a logger is installed does nothing.
pub fn init(config: &Config) {
    let result = env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
