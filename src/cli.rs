//! Command-line interface
//!
//! Flag values can also come from `HQUERY_`-prefixed environment variables
//! or, below those, from an optional key=value config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{self, FileConfig};
use crate::error::Result;
use crate::query::{self, QueryRequest, Source};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Turn debugging information on (repeat for higher levels)
    #[arg(short, long, action = clap::ArgAction::Count, env = "HQUERY_DEBUG", global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a document and print the values selected from it
    Get(GetArgs),
}

#[derive(Debug, Default, Args)]
pub struct GetArgs {
    /// URL to get the document from
    #[arg(long, env = "HQUERY_URL")]
    pub url: Option<String>,

    /// Local file to read the document from
    #[arg(long, env = "HQUERY_FILE")]
    pub file: Option<String>,

    /// CSS selector to apply to the document
    #[arg(long, env = "HQUERY_QUERY")]
    pub query: Option<String>,

    /// Attribute to print instead of element text
    #[arg(long, env = "HQUERY_ATTR")]
    pub attr: Option<String>,

    /// Path to a key=value config file with fallback values
    #[arg(long, env = "HQUERY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Effective `get` inputs after merging flags, environment and config file.
#[derive(Debug, PartialEq, Eq)]
struct ResolvedGet {
    url: Option<String>,
    file: Option<String>,
    query: String,
    attr: Option<String>,
}

/// Flags and environment (already merged by clap) win over the config file.
fn resolve(args: &GetArgs, fallback: &FileConfig) -> ResolvedGet {
    ResolvedGet {
        url: args.url.clone().or_else(|| fallback.url.clone()),
        file: args.file.clone().or_else(|| fallback.file.clone()),
        query: args
            .query
            .clone()
            .or_else(|| fallback.query.clone())
            .unwrap_or_default(),
        attr: args.attr.clone().or_else(|| fallback.attr.clone()),
    }
}

pub async fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Get(args) => get(args).await,
    }
}

async fn get(args: &GetArgs) -> Result<()> {
    let fallback = match &args.config {
        Some(path) => config::load(path)?,
        None => FileConfig::default(),
    };
    let resolved = resolve(args, &fallback);

    let source = Source::from_options(resolved.file.as_deref(), resolved.url.as_deref())?;
    let request = QueryRequest::new(source, resolved.query)
        .with_attribute(resolved.attr.unwrap_or_default());

    // Ctrl-C cancels the token; the in-flight fetch is dropped with it
    let cancel = CancellationToken::new();
    let signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received interrupt, cancelling");
            signal.cancel();
        }
    });

    let output = query::execute_with_cancel(&request, cancel).await?;
    println!("{output}");
    Ok(())
}
