// src/config/models.rs
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:80/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings for a single check invocation.
///
/// Each value resolves from its command-line flag, then its `SENSU_CHECK_*`
/// environment variable, then the built-in default.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend-healthcheck")]
#[command(about = "Check application backend health status", version)]
pub struct CheckConfig {
    /// Enable debug mode
    #[arg(
        short,
        long,
        env = "SENSU_CHECK_DEBUG",
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,

    /// Skip TLS certificate verification (not recommended!)
    #[arg(
        short,
        long,
        env = "SENSU_CHECK_INSECURE_SKIP_VERIFY",
        value_parser = BoolishValueParser::new()
    )]
    pub insecure_skip_verify: bool,

    /// Request timeout in seconds
    #[arg(
        short = 'T',
        long = "timeout",
        env = "SENSU_CHECK_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// URL to test
    #[arg(short, long, env = "SENSU_CHECK_URL", default_value = DEFAULT_URL)]
    pub url: String,
}

impl CheckConfig {
    /// Configuration for `url` with every other setting at its default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            debug: false,
            insecure_skip_verify: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            url: url.into(),
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_insecure_skip_verify(mut self, insecure_skip_verify: bool) -> Self {
        self.insecure_skip_verify = insecure_skip_verify;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
