//! `everything`: normalize platform payloads from the command line.
//!
//! Usage:
//!   everything normalize --kind t3 --input post.json --render-html --pretty
//!   everything autocomplete < listing.json
//!
//! Output goes to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use everything_cli::{Cli, Command, autocomplete, normalize};
use everything_preview::OpenGraphClient;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let output = match &cli.command {
        Command::Normalize(args) => {
            let input = read_input(args.input.as_deref()).await?;
            if args.enrich {
                let client = OpenGraphClient::new(args.preview_config())
                    .context("Failed to create link-preview client")?;
                normalize(&input, args, Some(&client)).await?
            } else {
                normalize(&input, args, None).await?
            }
        }
        Command::Autocomplete(args) => {
            let input = read_input(args.input.as_deref()).await?;
            autocomplete(&input, args)?
        }
    };

    println!("{output}");
    Ok(())
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading {:?}", path);
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
