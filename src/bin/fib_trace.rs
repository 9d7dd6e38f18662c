use anyhow::Context;
use deco::config::DemoConfig;
use deco::demo;
use deco::wrap::StdoutSink;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = DemoConfig::load().context("loading configuration")?;

    println!("Enter n, one per line. Ctrl+D to quit.");
    let report = demo::trace_session(&config, std::io::stdin().lock(), Rc::new(StdoutSink))
        .context("trace session failed")?;
    tracing::info!(?report, "session finished");
    Ok(())
}
