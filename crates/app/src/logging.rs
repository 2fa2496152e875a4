//! Logger setup for the ZIMER desktop binary.

use std::sync::Once;

/// Crates whose records are shown at info level when no filter is given.
const APP_MODULES: [&str; 3] = ["app", "services", "ui"];

/// `env_filter` takes the `env_logger` syntax, as passed to `--log` or set in
/// `RUST_LOG` (e.g. "services=trace" to see every tick).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
///
/// `--log` wins over `RUST_LOG`. With neither, exam events are logged at info
/// and the desktop shell's own crates at warn.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());
        match filter.as_deref() {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Warn);
                for module in APP_MODULES {
                    builder.filter_module(module, log::LevelFilter::Info);
                }
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}
