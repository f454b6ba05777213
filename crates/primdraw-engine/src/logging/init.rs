use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "primdraw_engine=debug"). When absent, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a seconds-precision timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &self.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(self.default_level);
        }

        builder.write_style(self.write_style);
        if self.timestamps {
            builder.format_timestamp_secs();
        } else {
            builder.format_timestamp(None);
        }
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// Idempotent; later calls are ignored. If another logger was installed
/// first, that one stays in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if config.builder().try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let cfg = LoggingConfig::default().with_default_level(LevelFilter::Off);
        init_logging(cfg.clone());
        init_logging(cfg);
    }

    #[test]
    fn explicit_filter_overrides_default_level() {
        let cfg = LoggingConfig::default()
            .with_default_level(LevelFilter::Off)
            .with_filter("primdraw_engine=trace");
        assert_eq!(cfg.env_filter.as_deref(), Some("primdraw_engine=trace"));
        let logger = cfg.builder().build();
        assert_eq!(logger.filter(), LevelFilter::Trace);
    }
}
