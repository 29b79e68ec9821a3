//! Diagnostics setup
//!
//! Every diagnostic goes through `tracing` and is written to stderr, so
//! stdout carries nothing but results.
//!
//! The filter comes from `STACKSORT_LOG` when set (standard `EnvFilter`
//! directives), otherwise from the verbosity flags.

use std::io::IsTerminal;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "STACKSORT_LOG";

static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level for this crate when no directives are given
    pub level: Level,

    /// Include the module target in each line
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    /// Map `-v` count and `-q` to a level.
    ///
    /// 0 → warn, 1 → info, 2 → debug, 3+ → trace; quiet wins.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };

        Self {
            level,
            include_target: verbose >= 2 && !quiet,
        }
    }

    fn filter(&self, directives: Option<&str>) -> EnvFilter {
        let fallback = || EnvFilter::new(format!("stacksort={}", self.level));
        match directives {
            Some(raw) if !raw.trim().is_empty() => EnvFilter::try_new(raw).unwrap_or_else(|e| {
                eprintln!("Invalid {} value '{}': {}", LOG_ENV, raw, e);
                fallback()
            }),
            _ => fallback(),
        }
    }
}

/// Install the global subscriber; later calls are ignored.
pub fn init(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let filter = config.filter(directives.as_deref());

        // A subscriber installed elsewhere (tests, embedding) is kept.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.include_target)
                    .with_ansi(std::io::stderr().is_terminal())
                    .without_time(),
            )
            .try_init();
    });
}
