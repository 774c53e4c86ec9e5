//! CLI argument parsing

use clap::Parser;

/// Print the file URLs of an e621 pool, one per line
#[derive(Parser, Debug, Clone)]
#[command(name = "pool-fetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pool id, or any string ending in the pool id (e.g. a pool URL)
    pub pool: String,

    /// Pool listing endpoint
    #[arg(long, default_value = crate::endpoint::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Your e621 username, included in the default user agent
    #[arg(long)]
    pub contact: Option<String>,

    /// User agent sent with every request (overrides --contact)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
