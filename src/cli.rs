use crate::render::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug, Clone)]
#[command(name = "extls")]
#[command(version = VERSION)]
#[command(about = "Lists directory entries whose names end in a given extension")]
#[command(
    long_about = "Lists the entries of one directory whose names end in a given extension.\n\nMatching is case-insensitive and not recursive. Files and subdirectories\nare both considered. Results keep the order the filesystem returns them in."
)]
pub struct Args {
    /// Directory to list (defaults to the current directory)
    #[arg(conflicts_with = "dir")]
    pub directory: Option<PathBuf>,

    /// Directory to list (same as the positional argument)
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Comma-separated extension suffixes to match (default: .png)
    #[arg(short = 'e', long = "ext")]
    pub ext: Option<String>,

    /// Output format: 'list' (default) or 'lines'
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Read settings from this TOML file
    #[arg(long = "config", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Do not read the user configuration file
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Directory given on the command line, from either form
    pub fn target_dir(&self) -> Option<&PathBuf> {
        self.dir.as_ref().or(self.directory.as_ref())
    }
}
