use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(version, about = "Interactive contact directory", long_about = None)]
pub struct Cli {
    /// Snapshot file to load at start and save on exit (default: address_book.json, JSON format)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Contacts per page when listing
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Directory holding config.json (defaults to $ROLODEX_HOME or the platform data dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
