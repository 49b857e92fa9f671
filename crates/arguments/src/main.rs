//! Grove CLI
//!
//! Reads the command line and hands the validated run configuration to the
//! forest engine.

use anyhow::{Context, Result};
use grove_arguments::{process_arguments, render_help, render_version, Invocation};
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Installed subscriber; the filter can be raised once `--verbose` is known
struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

fn init_logging() -> Result<Logging> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .context("Failed to set tracing subscriber")?;

    Ok(Logging { handle, from_env })
}

fn main() -> Result<()> {
    // Setup logging before scanning so option events are not lost
    let logging = init_logging()?;

    let (config, unprocessed) = match process_arguments(std::env::args().skip(1))? {
        Invocation::Help => {
            print!("{}", render_help());
            return Ok(());
        }
        Invocation::Version => {
            print!("{}", render_version());
            return Ok(());
        }
        Invocation::Run {
            config,
            unprocessed,
        } => (config, unprocessed),
    };

    // RUST_LOG takes precedence over --verbose
    if config.verbose && !logging.from_env {
        logging
            .handle
            .reload(EnvFilter::new("debug"))
            .context("Failed to raise log level")?;
    }

    for token in &unprocessed {
        warn!("Other parameter, not processed: {}", token);
    }

    info!("Grove v{}", grove_arguments::VERSION);
    info!("  Input file: {}", config.input_file);
    if config.is_prediction() {
        info!("  Mode: prediction from {}", config.predict_file);
    } else {
        info!("  Mode: training on {}", config.dependent_var_name);
    }
    info!("  Tree type: {} ({})", config.tree_type, config.tree_type.code());
    info!("  Trees: {}", config.num_trees);
    info!("  Threads: {}", config.num_threads);
    if config.has_seed() {
        info!("  Seed: {}", config.seed);
    }
    if !config.quantiles.is_empty() {
        debug!("  Quantiles: {:?}", config.quantiles);
    }

    // Hand the configuration to the engine
    let json =
        serde_json::to_string_pretty(&config).context("Failed to serialize run configuration")?;
    println!("{json}");

    Ok(())
}
