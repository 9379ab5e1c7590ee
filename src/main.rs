//! Main entry point for the iconpack CLI.
//!
//! Runs the pipeline once, end to end: fetch the configured archive
//! (through the cache), walk it for SVG entries, strip the wrapper
//! directory, write the library tree, and unless `--no-docs` was given,
//! write the docs tree plus the generated gallery page. Any error at any
//! stage propagates here and exits the process non-zero.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use iconpack::{Cli, Config, Fetcher, render, strip_root, walk, write_tree};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = Config::load(&cli.config)?;

    let cache_dir = match &cli.cache_dir {
        Some(dir) => dir.clone(),
        None => Fetcher::default_cache_dir()?,
    };
    let fetcher = Fetcher::new(cache_dir)?;

    let archive = fetcher.obtain(&config.url).await?;
    let icons = strip_root(walk(".", &archive)?);
    info!(icons = icons.len(), "extracted icon files");

    write_tree(&icons, &cli.lib_dir).await?;

    if !cli.no_docs {
        write_tree(&icons, &cli.docs_dir).await?;
        let page = render(&icons, &config.url, &config.version);
        tokio::fs::write(cli.docs_dir.join("index.html"), page).await?;
    }

    if !cli.is_quiet() {
        eprintln!("{} icons written to {}", icons.len(), cli.lib_dir.display());
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
