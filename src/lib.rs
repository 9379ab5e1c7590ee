//! # iconpack
//!
//! A build-time icon asset pipeline.
//!
//! This library downloads a zip archive of SVG icons from a configured URL,
//! recursively extracts nested zip archives found inside it, caches the
//! downloaded blob by the SHA-256 of its URL, writes the extracted tree into
//! output directories, and renders a static HTML gallery page listing every
//! icon.
//!
//! ## Pipeline
//!
//! Data flows strictly forward through five stages:
//!
//! 1. Fetch the archive bytes, through a URL-keyed file cache
//! 2. Recursively walk the archive, collecting every SVG entry
//! 3. Strip the archive's single wrapper directory from each path
//! 4. Write the tree into the library (and docs) output roots
//! 5. Render the gallery page into the docs root
//!
//! No stage reads back from a later one, and a failure at any stage aborts
//! the whole run. Cache writes committed before a failure persist and are
//! reused by the next invocation.
//!
//! ## Example
//!
//! ```no_run
//! use iconpack::{Fetcher, strip_root, walk};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = Fetcher::new(Fetcher::default_cache_dir()?)?;
//!     let archive = fetcher.obtain("https://example.com/icons.zip").await?;
//!
//!     let icons = strip_root(walk(".", &archive)?);
//!     for icon in &icons {
//!         println!("{}", icon.path);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod entry;
pub mod fetch;
pub mod gallery;
pub mod output;
pub mod paths;
pub mod zip;

pub use cli::Cli;
pub use config::Config;
pub use entry::{IconFile, strip_root};
pub use fetch::Fetcher;
pub use gallery::render;
pub use output::write_tree;
pub use zip::walk;
