use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `qbank` binary.
#[derive(Debug, Parser)]
#[command(name = "qbank", version, about = "Question bank catalog service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the catalog and serve the HTTP API until Ctrl-C.
    Serve {
        /// Interface to bind (overrides `server.host`)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides `server.port`)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the subject index as JSON.
    Subjects,
}
