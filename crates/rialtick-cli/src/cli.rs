use clap::{Parser, Subcommand};

/// Diagnostic front-end for the rialtick aggregation pipeline.
#[derive(Debug, Parser)]
#[command(name = "rialtick", version, about = "Iranian market prices and economic news")]
pub struct Cli {
    /// User id passed to the membership gate.
    #[arg(long, default_value_t = 0)]
    pub user_id: i64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current price snapshot (dollar, coin, gold ounce).
    Price,
    /// Fetch the latest economic headlines from the configured feeds.
    News,
    /// Route a free-text message the way the bot would and run that flow.
    Route {
        /// Message text, e.g. "قیمت دلار" or "اخبار اقتصادی".
        text: String,
    },
}
