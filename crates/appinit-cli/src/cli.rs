use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "appinit",
    about = "Bootstrap a new app skeleton from embedded templates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new app skeleton (safe to re-run: existing files are kept)
    New {
        /// App name; also used as the directory name
        name: String,

        /// Parent directory for the app (default: current directory)
        #[arg(short, long)]
        output: Option<String>,
    },
}
