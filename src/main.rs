use anyhow::Context;
use deco::config::DemoConfig;
use deco::demo;
use deco::wrap::StdoutSink;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with trace output.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = DemoConfig::load().context("loading configuration")?;
    tracing::info!(memoize = config.memoize, indent = %config.trace_indent, "running demo");

    let report = demo::run(&config, Rc::new(StdoutSink)).context("demo failed")?;
    tracing::debug!(?report, "report");
    Ok(())
}
