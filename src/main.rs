// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

mod cli;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::{info, warn};
use workspace_tags::client::HttpTagClient;
use workspace_tags::config::{
    apply_env_overrides, load_provider_config, load_provider_config_from,
};
use workspace_tags::logging::{init_logging, parse_rotation, LogConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = cli::Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir,
        log_level: args.log_level,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!("Error: Failed to initialize logging: {e}");
        return Err(e);
    }

    // File first, then environment, then flags.
    let mut config = match &args.config {
        Some(path) => load_provider_config_from(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => load_provider_config()?,
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    if let Some(hostname) = args.hostname {
        config.hostname = hostname;
    }
    if let Some(token) = args.token {
        config.token = Some(token);
    }
    config.validate()?;

    let client = HttpTagClient::new(&config, config.require_token()?)?;
    info!("Using API at {}", client.base_url());

    // Dropping the command future on Ctrl-C aborts the request in flight;
    // no state is printed for an interrupted operation.
    tokio::select! {
        result = cli::run(args.command, &client) => result,
        Ok(()) = tokio::signal::ctrl_c() => {
            warn!("Interrupted; cancelling in-flight request");
            Err(eyre!("interrupted"))
        }
    }
}
