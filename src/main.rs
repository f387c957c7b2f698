//! mktorrent command line interface.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mktorrent::constants::{DEFAULT_PIECE_LENGTH_EXP, DEFAULT_THREADS};
use mktorrent::{create_torrent, MetainfoConfig};

/// Create a BitTorrent metainfo file from a file or directory
#[derive(Parser)]
#[command(name = "mktorrent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Announce URLs as <url>[,<url>]*; at least one is required,
    /// repeat to add backup tiers
    #[arg(short, long = "announce", value_name = "URLS", required = true)]
    announce: Vec<String>,

    /// Add a comment to the metainfo
    #[arg(short, long)]
    comment: Option<String>,

    /// Don't write the creation date
    #[arg(short = 'd', long)]
    no_date: bool,

    /// Set the piece length to 2^N bytes
    #[arg(short = 'l', long, value_name = "N", default_value_t = DEFAULT_PIECE_LENGTH_EXP)]
    piece_length: u32,

    /// Set the name of the torrent [default: basename of the target]
    #[arg(short, long)]
    name: Option<String>,

    /// Set the path and filename of the created file [default: <name>.torrent]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Set the private flag
    #[arg(short, long)]
    private: bool,

    /// Use N threads for calculating hashes
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Be verbose
    #[arg(short, long)]
    verbose: bool,

    /// Add a web seed URL; may be repeated
    #[arg(short, long = "web-seed", value_name = "URL")]
    web_seed: Vec<String>,

    /// Target directory or file
    target: PathBuf,
}

/// Default torrent name: the last component of the target.
fn default_name(target: &Path) -> anyhow::Result<String> {
    let name = match target.file_name() {
        Some(name) => name.to_os_string(),
        None => target
            .canonicalize()
            .with_context(|| format!("error resolving '{}'", target.display()))?
            .file_name()
            .ok_or_else(|| anyhow!("cannot derive a name from '{}', use --name", target.display()))?
            .to_os_string(),
    };
    name.into_string()
        .map_err(|name| anyhow!("name {:?} is not valid UTF-8, use --name", name))
}

fn build_config(cli: &Cli) -> anyhow::Result<MetainfoConfig> {
    let name = match &cli.name {
        Some(name) => name.clone(),
        None => default_name(&cli.target)?,
    };

    let mut builder = MetainfoConfig::builder(name)
        .no_creation_date(cli.no_date)
        .piece_length_exp(cli.piece_length)
        .private(cli.private)
        .threads(cli.threads)
        .verbose(cli.verbose);

    for tier in &cli.announce {
        builder = builder.announce(tier)?;
    }
    for url in &cli.web_seed {
        builder = builder.web_seed(url);
    }
    if let Some(comment) = &cli.comment {
        builder = builder.comment(comment);
    }
    if let Some(output) = &cli.output {
        builder = builder.output(output);
    }

    Ok(builder.build()?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    create_torrent(&config, &cli.target)?;

    Ok(())
}
