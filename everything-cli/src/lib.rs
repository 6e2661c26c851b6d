//! Argument types and commands for the `everything` binary.
//!
//! Commands take the raw input text and return the text to print, so they
//! run the same under the binary and under tests.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use everything_model::{
    CommonMark, CommonMarkOptions, Envelope, Kind, LinkPreviewSource, List, Thing,
};
use everything_preview::OpenGraphConfig;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "everything")]
#[command(about = "Normalize social-content API payloads into tagged envelopes")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize one entity and print it as {kind, data}
    Normalize(NormalizeArgs),
    /// Print the autocomplete view of a community listing
    Autocomplete(AutocompleteArgs),
}

#[derive(Args, Debug, Default)]
pub struct NormalizeArgs {
    /// Wire tag of the input (Listing, more, t1, t2, t3, t5)
    #[arg(short, long)]
    pub kind: Option<Kind>,

    /// Read from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input is a full {kind, data} envelope rather than a bare data object
    #[arg(long)]
    pub envelope: bool,

    /// Render markdown fields into their _html siblings
    #[arg(long, conflicts_with = "render_markdown")]
    pub render_html: bool,

    /// Convert _html siblings back into markdown fields
    #[arg(long)]
    pub render_markdown: bool,

    /// Disable GFM tables when rendering
    #[arg(long)]
    pub no_tables: bool,

    /// Fetch link metadata for link posts
    #[arg(long)]
    pub enrich: bool,

    /// Link-preview request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Pretty-print the output
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Default)]
pub struct AutocompleteArgs {
    /// Read the Listing envelope from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    pub pretty: bool,
}

impl NormalizeArgs {
    pub fn markdown_options(&self) -> CommonMarkOptions {
        CommonMarkOptions {
            tables: !self.no_tables,
            ..CommonMarkOptions::default()
        }
    }

    pub fn preview_config(&self) -> OpenGraphConfig {
        OpenGraphConfig {
            timeout_secs: self.timeout,
            ..OpenGraphConfig::default()
        }
    }
}

/// Parses `input` into an envelope according to `args`.
pub fn parse_envelope(input: &str, args: &NormalizeArgs) -> Result<Envelope<Thing>> {
    let raw: Value = serde_json::from_str(input).context("Input is not valid JSON")?;
    if args.envelope {
        let envelope: Envelope<Thing> =
            serde_json::from_value(raw).context("Failed to normalize envelope")?;
        if let Some(kind) = args.kind {
            if kind != envelope.kind() {
                bail!("--kind {} does not match envelope kind {}", kind, envelope.kind());
            }
        }
        return Ok(envelope);
    }
    let Some(kind) = args.kind else {
        bail!("--kind is required unless --envelope is given");
    };
    Envelope::thing(kind, raw).with_context(|| format!("Failed to normalize {kind} payload"))
}

/// Runs `normalize`: parse, optional markdown sync, optional enrichment.
pub async fn normalize(
    input: &str,
    args: &NormalizeArgs,
    source: Option<&dyn LinkPreviewSource>,
) -> Result<String> {
    let mut envelope = parse_envelope(input, args)?;
    let kind = envelope.kind();
    debug!("Normalized {} payload", kind);

    let converter = CommonMark::new(args.markdown_options());
    if args.render_html {
        envelope.render_all_to_html_with(&converter);
    } else if args.render_markdown {
        envelope.render_all_from_html_with(&converter);
    }

    if let Some(source) = source {
        match envelope.data_mut() {
            Thing::Post(post) => {
                info!("Enriching link post: {}", post.url.as_deref().unwrap_or_default());
                post.enrich_from_link(source).await;
            }
            _ => debug!("Skipping enrichment for {}", kind),
        }
    }

    to_json(&envelope, args.pretty)
}

/// Runs `autocomplete` over a `Listing` envelope.
pub fn autocomplete(input: &str, args: &AutocompleteArgs) -> Result<String> {
    let listing: Envelope<List<Thing>> =
        serde_json::from_str(input).context("Input is not a Listing envelope")?;
    let view = listing.to_autocomplete_view();
    info!(
        "{} of {} children are communities",
        view.subreddits.len(),
        listing.len()
    );
    to_json(&view, args.pretty)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("Failed to serialize output")
}
