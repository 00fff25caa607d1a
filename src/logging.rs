use std::str::FromStr;

use tracing::{warn, Level};

use crate::models::app_config::LoggingConfig;

/// Installs the global subscriber. Logs go to stderr so stdout carries only the
/// query report.
pub fn config_logging(logging_config: &LoggingConfig) {
    let (level, fallback) = parse_level(&logging_config.level);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);
    if logging_config.json {
        builder.json().init();
    } else {
        builder.init();
    }
    if fallback {
        warn!("Unknown log level [{0}], using info", logging_config.level);
    }
}

/// Returns the parsed level and whether the default had to be used.
fn parse_level(level: &str) -> (Level, bool) {
    match Level::from_str(level) {
        Ok(level) => (level, false),
        Err(_) => (Level::INFO, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_level("debug"), (Level::DEBUG, false));
        assert_eq!(parse_level("WARN"), (Level::WARN, false));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("chatty"), (Level::INFO, true));
    }
}
