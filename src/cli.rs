use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "tutui",
    version,
    about = "A terminal viewer for a sidebar-navigated HTML tutorial.",
    long_about = None
)]
pub struct Cli {
    /// Print the curriculum outline
    #[clap(short, long)]
    pub list: bool,

    /// Print a lesson as plain text and exit
    #[clap(short, long, value_name = "KEY")]
    pub dump: Option<String>,

    /// Use a specific configuration file
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Enable debug output
    #[clap(long)]
    pub debug: bool,

    /// Lesson key to open at startup
    #[clap(name = "LESSON")]
    pub lesson: Option<String>,
}
