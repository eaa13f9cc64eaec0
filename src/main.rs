use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use move_arbiter::{RuleConfig, terminal::Terminal};

/// Two players on one terminal, moves checked against the piece rules
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file with rule toggles
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = match &args.config {
        Some(path) => RuleConfig::load(path)
            .with_context(|| format!("failed to load rule config from {}", path.display()))?,
        None => RuleConfig::default(),
    };
    info!("rules: {config:?}");

    Terminal::new(config)
        .run()
        .context("failed to talk to the terminal")
}
