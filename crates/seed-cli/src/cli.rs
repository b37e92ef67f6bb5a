use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seed",
    about = "Seed application configuration from a Consul KV store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with [consul] and [resolver] tables
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Consul agent address (host:port or URL)
    #[arg(long, global = true, env = "CONSUL_HTTP_ADDR")]
    pub address: Option<String>,

    #[arg(long, global = true)]
    pub datacenter: Option<String>,

    #[arg(long, global = true, env = "CONSUL_HTTP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout; 0 means 60 seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Strip the folder prefix wherever it occurs in child keys
    #[arg(long, global = true)]
    pub literal_keys: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a key to its value, or flatten the folder under it
    Get(GetArgs),
    /// List the raw entries under a prefix
    Ls(LsArgs),
}

#[derive(Args)]
pub struct GetArgs {
    pub key: String,
}

#[derive(Args)]
pub struct LsArgs {
    pub prefix: String,
}
