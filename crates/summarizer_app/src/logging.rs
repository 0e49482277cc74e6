//! Logging initialization for the server binary.
//!
//! Logs go to the terminal, and also to `log_file` when one is configured.

use engine_logging::{parse_level, LogDestination};

use crate::AppConfig;

pub(crate) fn initialize(config: &AppConfig) {
    let destination = match &config.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    engine_logging::initialize(destination, parse_level(&config.log_level));
}
