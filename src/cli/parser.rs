use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub const VERSION_INFO: &str = env!("BBL_BUILD_VERSION");

#[derive(Parser, Debug)]
#[command(name = "bbl")]
#[command(about = "Bootstraps BOSH directors and the load balancers in front of them", long_about = None, version = VERSION_INFO)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Directory holding bbl-state.json (defaults to the current directory)
    #[arg(short = 's', long = "state-dir", env = "BBL_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Increase message verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help, including the list of commands
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the bbl version
    Version,

    /// Prints help, including the list of commands
    Help,

    /// Any other command, dispatched with its raw arguments
    #[command(external_subcommand)]
    Run(Vec<String>),
}
