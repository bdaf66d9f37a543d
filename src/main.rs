use anyhow::Context;
use std::path::PathBuf;

use sh_core::config::AppConfig;
use shapeshift::bootstrap::{self, tracing::init_tracing_subscriber, Wired};

/// Usage: `shapeshift [config.toml] [action title]`
fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if !path.is_empty() => bootstrap::load_config(PathBuf::from(path))?,
        _ => AppConfig::with_system_defaults(std::env::temp_dir()),
    };
    let action = args.next();

    init_tracing_subscriber(&config.log_dir)?;

    let Wired { app, main_loop } = bootstrap::wire_dependencies(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    // `app` owns the only invoker; the loop ends once the task drops it
    let worker = runtime.spawn(async move { bootstrap::run_once(&app, action.as_deref()).await });
    main_loop.run();

    runtime.block_on(worker).context("pipeline task panicked")?
}
