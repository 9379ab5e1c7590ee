use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "iconpack")]
#[command(version)]
#[command(about = "Fetch a remote SVG icon archive and build the icon library", long_about = None)]
#[command(after_help = "Examples:\n  \
  iconpack                       build lib/ and docs/ from ./config.json\n  \
  iconpack -c icons.json --no-docs   build only the library tree\n  \
  iconpack --cache-dir /tmp/cache    use an alternate download cache")]
pub struct Cli {
    /// JSON config file providing the archive URL and version
    #[arg(short = 'c', long, value_name = "FILE", default_value = "config.json")]
    pub config: PathBuf,

    /// Directory for the extracted icon library
    #[arg(long, value_name = "DIR", default_value = "lib")]
    pub lib_dir: PathBuf,

    /// Directory for the gallery page and its icon copies
    #[arg(long, value_name = "DIR", default_value = "docs")]
    pub docs_dir: PathBuf,

    /// Override the download cache directory
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Skip the docs tree and gallery page
    #[arg(long)]
    pub no_docs: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    /// Default log filter when RUST_LOG is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self.quiet {
            0 => "info",
            1 => "warn",
            _ => "error",
        }
    }
}
