// src/plugin/healthcheck.rs
use super::CheckPlugin;
use crate::config::CheckConfig;
use crate::health::{self, Fetcher, HttpFetcher, Verdict};
use async_trait::async_trait;
use tracing::{error, info};

pub const PLUGIN_NAME: &str = "backend-healthcheck";

/// Fetches a health endpoint and evaluates its backend report.
pub struct HealthCheck<F = HttpFetcher> {
    config: CheckConfig,
    fetcher: F,
}

impl HealthCheck<HttpFetcher> {
    pub fn new(config: CheckConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new())
    }
}

impl<F: Fetcher> HealthCheck<F> {
    pub fn with_fetcher(config: CheckConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[async_trait]
impl<F: Fetcher> CheckPlugin for HealthCheck<F> {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn validate_config(&self) -> Verdict {
        match self.config.validate() {
            Ok(()) => Verdict::ok("configuration is valid"),
            Err(e) => Verdict::warning(e.to_string()),
        }
    }

    async fn run_check(&self) -> Verdict {
        let body = match self.fetcher.fetch(&self.config).await {
            Ok(body) => body,
            Err(e) => {
                error!(url = %self.config.url, error = %e, "health document fetch failed");
                return Verdict::critical(e.to_string());
            }
        };

        let verdict = health::evaluate(&body, self.config.debug);
        info!(url = %self.config.url, state = %verdict.state, "check complete");
        verdict
    }
}
