//! CLI argument parsing for promptcat

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pc")]
#[command(
    author,
    version,
    about = "Compose a prompt from named text fragments",
    long_about = None,
    after_help = "Topics are written as category/fragment[+fragment...], e.g. sql/schema-design+indexing"
)]
pub struct Cli {
    /// Topic specifiers, in output order
    #[arg(value_name = "TOPIC", required_unless_present = "list")]
    pub topics: Vec<String>,

    /// List categories and their fragments instead of composing
    ///
    /// Positional arguments are then read as category names to limit the listing.
    #[arg(short, long)]
    pub list: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fragment store root (default: topics/ next to the executable)
    #[arg(short = 'd', long)]
    pub base_dir: Option<PathBuf>,

    /// Text inserted between fragments (default: the two characters \n)
    #[arg(short, long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long)]
    pub log_level: Option<String>,
}
