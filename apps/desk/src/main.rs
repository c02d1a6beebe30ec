mod config;
mod main_lib;

use config::Config;
use deskgrid_core::theme;
use main_lib::{build_resolver, init_tracing, render, Invocation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);
    let invocation = Invocation::parse(std::env::args().skip(1))?;

    let resolver = build_resolver(&config)?;
    let mut changes = resolver.subscribe();
    let watcher = tokio::spawn(async move {
        while let Some(mode) = changes.recv().await {
            tracing::info!("Theme changed to {}", mode);
        }
    });

    let output = render(&invocation, &config, &resolver);

    drop(resolver);
    theme::global::teardown();
    watcher.await?;

    println!("{}", output?);
    Ok(())
}
