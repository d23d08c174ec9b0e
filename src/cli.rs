use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lists signing key pairs and whether the local runtime trusts them.", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable debug logging output.")]
    pub debug: bool,

    #[arg(long, short = 'n', global = true, help = "Disable emoji output.")]
    pub no_emojis: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Lists your key pairs and the runtime's trusted keys in one report.",
        long_about = "Reads the developer key directory and the runtime's trusted key directory, then prints every key pair once, flagging whether the private key is present and whether the runtime trusts it. A missing or unreadable directory is reported and treated as empty."
    )]
    List(ListArgs),
    #[command(about = "Lists the public keys published by the agent's HTTP API as JSON.")]
    Remote(RemoteArgs),
    #[command(
        about = "Configure default key directories and API location.",
        long_about = "Run with arguments to set values directly, or run without arguments for an interactive setup session."
    )]
    Configure(ConfigureArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[arg(long, value_name = "DIR", help = "Developer key pair directory. Overrides configured default.")]
    pub developer_keys: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Runtime trusted key directory. Overrides configured default.")]
    pub trusted_keys: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RemoteArgs {
    #[arg(long, value_name = "URL", help = "Base URL of the agent API. Overrides configured default.")]
    pub api_url: Option<String>,

    #[arg(long, value_name = "MILLIS", default_value_t = 5000, help = "Request timeout in milliseconds.")]
    pub timeout_ms: u64,
}

#[derive(Parser, Debug)]
pub struct ConfigureArgs {
    #[arg(long, value_name = "DIR", help = "Set the default developer key pair directory.")]
    pub developer_keys: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Set the default runtime trusted key directory.")]
    pub trusted_keys: Option<PathBuf>,

    #[arg(long, value_name = "URL", help = "Set the default agent API base URL.")]
    pub api_url: Option<String>,

    #[arg(long, short, help = "Output result as structured JSON.")]
    pub json: bool,
}
