use tracing::debug;

use super::report::DEFAULT_PREVIEW_LIMIT;

/// Runtime options for an inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Log container and chunk warnings (`info` level).
    pub verbose: bool,

    /// Log every chunk header and padding skip (`debug` level).
    pub debug: bool,

    /// Count of payload bytes shown for generic chunks, `None` for all.
    pub preview_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
            preview_limit: Some(DEFAULT_PREVIEW_LIMIT),
        }
    }
}

impl Config {
    /// The `tracing` filter directive for this configuration, if logging
    /// is enabled at all.
    pub fn log_level(&self) -> Option<&'static str> {
        match (self.debug, self.verbose) {
            (true, _) => Some("debug"),
            (false, true) => Some("info"),
            _ => None,
        }
    }
}

/// Install a `tracing` subscriber writing to stderr, if `config` asks for
/// logging.
///
/// If a global subscriber is already installed it is left in place and
/// receives a `debug` event saying so.
pub fn init(config: &Config) {
    if let Some(level) = config.log_level() {
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_writer(std::io::stderr)
            .try_init()
        {
            debug!("keeping existing subscriber: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.preview_limit, Some(256));
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_log_level() {
        let config = Config {
            verbose: true,
            ..Config::default()
        };
        assert_eq!(config.log_level(), Some("info"));
        let config = Config {
            verbose: true,
            debug: true,
            ..Config::default()
        };
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_init_keeps_existing_subscriber() {
        let config = Config {
            debug: true,
            ..Config::default()
        };
        init(&config);
        // a second global subscriber is refused without a panic
        init(&config);
    }
}
