// src/plugin/mod.rs
//! Two-phase check contract between the health probe and the process entry.
//!
//! A monitoring agent runs the binary, reads the first line of stdout and
//! maps the exit code to a check state. [`execute`] runs configuration
//! validation and then, only if that passes, the check itself; [`report`]
//! turns the resulting [`Verdict`] into that output.
mod healthcheck;

pub use healthcheck::{HealthCheck, PLUGIN_NAME};

use crate::health::Verdict;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
pub trait CheckPlugin: Send + Sync {
    fn name(&self) -> &str;

    /// Pre-flight phase. Must not touch the network.
    fn validate_config(&self) -> Verdict;

    async fn run_check(&self) -> Verdict;
}

/// Run both phases, stopping after validation when it is not OK.
pub async fn execute<P: CheckPlugin + ?Sized>(plugin: &P) -> Verdict {
    let verdict = plugin.validate_config();
    if !verdict.is_ok() {
        info!(check = plugin.name(), state = %verdict.state, "configuration rejected");
        return verdict;
    }

    plugin.run_check().await
}

/// Format the line printed for the monitoring agent.
pub fn render(name: &str, verdict: &Verdict) -> String {
    format!("{} {}: {}", name, verdict.state, verdict)
}

/// Print the verdict to stdout and return the process exit code.
pub fn report(name: &str, verdict: &Verdict) -> i32 {
    println!("{}", render(name, verdict));
    verdict.state.exit_code()
}
