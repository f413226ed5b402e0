use clap::Parser;
use std::path::PathBuf;

/// Hookping – post a fixed "hello world" message to a webhook
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Webhook URL to post to (falls back to config, then to the %WEBHOOK% placeholder)
    #[arg(value_name = "WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit non-zero when the request fails or the endpoint answers with a non-2xx status
    #[arg(long)]
    pub strict: bool,
}
