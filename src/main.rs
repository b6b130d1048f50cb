// src/main.rs
use anyhow::Result;
use backend_healthcheck::{
    config::CheckConfig,
    plugin::{self, CheckPlugin, HealthCheck},
};
use clap::Parser;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = CheckConfig::parse();

    init_tracing(config.debug)?;
    debug!(?config, "loaded configuration");

    let check = HealthCheck::new(config);
    let verdict = plugin::execute(&check).await;
    let code = plugin::report(check.name(), &verdict);

    std::process::exit(code);
}

// Logs go to stderr; stdout is reserved for the check result.
fn init_tracing(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("backend_healthcheck={}", level).parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
