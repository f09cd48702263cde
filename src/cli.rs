//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "mailroom",
    version,
    about = "Run mail through a postal processing pipeline",
    long_about = "Run messages and packages through an ordered pipeline of \
                  surveillance, theft and inspection stages before delivery.\n\n\
                  The pipeline is read from ~/.config/mailroom/config.toml \
                  unless --config is given."
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a single item through the pipeline
    Send {
        #[command(subcommand)]
        item: SendCommands,
    },

    /// Send a batch of items from a JSON file through one pipeline
    #[command(long_about = "Read a JSON array of items and send each one through the same \
                      pipeline. Failures are reported per item and do not stop the batch.\n\n\
                      Example item: {\"kind\":\"package\",\"from\":\"A\",\"to\":\"B\",\
                      \"content\":{\"description\":\"tea\",\"declared_value\":5}}")]
    Run {
        /// JSON file with items, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the rotating XOR checksum of a file
    Checksum {
        /// File to read (stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Convert CRLF line endings to LF
    Normalize {
        /// File to read (stdin when omitted); output goes to stdout
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum SendCommands {
    /// Send a text message
    Message {
        #[command(flatten)]
        address: Address,
        /// Message text
        #[arg(long)]
        text: String,
    },

    /// Send a package
    Package {
        #[command(flatten)]
        address: Address,
        /// Content description (no content is attached when both description and value are omitted)
        #[arg(long)]
        description: Option<String>,
        /// Declared value of the content
        #[arg(long, allow_negative_numbers = true)]
        value: Option<i64>,
    },
}

#[derive(Args, Debug)]
pub struct Address {
    /// Sender
    #[arg(long)]
    pub from: String,
    /// Recipient
    #[arg(long)]
    pub to: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the default config file path
    Path,
}
