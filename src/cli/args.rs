use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "labflow", version, about = "Chat with the LabFlow laboratory-inventory assistant", propagate_version = true)]
pub struct Cli {
    /// One-shot prompt input
    pub prompt: Vec<String>,

    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// Read the prompt from a file
    #[arg(short = 'f', long = "file", global = true)]
    pub input_file: Option<String>,

    /// Write the reply to a file
    #[arg(short = 'o', long = "output", global = true)]
    pub output_file: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RuntimeArgs {
    /// Log in as this name
    #[arg(short = 'u', long = "user", global = true)]
    pub user: Option<String>,

    /// Override the webhook URL for this run
    #[arg(long = "webhook-url", global = true)]
    pub webhook_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", global = true)]
    pub timeout_secs: Option<u64>,

    /// Explicit config file path
    #[arg(long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat shell with sessions
    Interactive,
    /// Send a single prompt and print the reply
    Chat,

    /// Config management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List the inventory forms
    Forms,
    /// Show the dashboard link
    Dashboard,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default config file (~/.labflow/config.toml)
    Init {
        /// Overwrite if exists
        #[arg(long)]
        force: bool,
    },
    Set { key: String, value: String },
    List,
}
