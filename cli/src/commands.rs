pub mod session;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kasir")]
#[command(about = "A small point-of-sale cashier.", version)]
pub struct CommandLine {
    /// Do not print the banner on startup
    #[arg(long)]
    pub no_banner: bool,
    /// Reduce decoration (-q drops headers, -qq drops everything but tables and totals)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Confirm orders without asking
    #[arg(short, long)]
    pub yes: bool,
    /// Log more (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// One line typed at the cashier prompt.
#[derive(Parser, Debug)]
#[command(name = "kasir", no_binary_name = true)]
pub struct Line {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Action {
    /// Add an item to the order
    #[command(alias = "a")]
    Add {
        name: String,
        quantity: u64,
        price: u64,
    },
    /// Rename the first item called NAME
    #[command(alias = "mv")]
    Rename { name: String, new_name: String },
    /// Change the quantity of the first item called NAME
    Qty { name: String, quantity: u64 },
    /// Change the unit price of the first item called NAME
    Price { name: String, price: u64 },
    /// Remove the first item called NAME
    #[command(alias = "rm")]
    Delete { name: String },
    /// Remove every item and start over
    Reset,
    /// Show the current order
    #[command(alias = "v")]
    View,
    /// Confirm the order
    #[command(alias = "c")]
    Check,
    /// Show the amount to be paid
    #[command(alias = "t")]
    Total,
    /// Leave the cashier
    #[command(alias = "q", alias = "exit")]
    Quit,
}

impl Line {
    pub fn parse_words<'a, I>(words: I) -> Result<Action, clap::Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::try_parse_from(words).map(|line| line.action)
    }
}
