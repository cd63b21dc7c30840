use clap::{Parser, Subcommand};

use crate::records::LedgerTab;

#[derive(Parser)]
#[command(name = "saffron-admin")]
#[command(author, version, about = "Saffron Exch operator dashboard - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

/// Search and page selection shared by the listing commands.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Only show rows matching this text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Page to show (clamped to the available range)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in as an operator
    Login {
        /// Registered phone number
        #[arg(long)]
        phone: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Keep the session after exit
        #[arg(short, long)]
        remember: bool,
    },

    /// Forget the stored session
    Logout,

    /// Show status and configuration
    Status,

    /// List registered users
    Users {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List account transactions
    History {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Browse bet history
    Bets {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Browse the per-account money summary
    Ledger {
        #[command(flatten)]
        list: ListArgs,

        /// Restrict to one outcome: all, profit or loss
        #[arg(short, long, default_value = "all")]
        tab: LedgerTab,
    },

    /// Credit a player's balance
    AddMoney {
        /// 10-digit phone number of the player
        #[arg(long)]
        phone: String,

        /// Positive amount in rupees
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Debit a player's balance
    Withdraw {
        /// 10-digit phone number of the player
        #[arg(long)]
        phone: String,

        /// Positive amount in rupees
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Register a new player
    AddPlayer {
        #[arg(long)]
        full_name: String,

        /// 10-digit phone number
        #[arg(long)]
        phone: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        referral_code: Option<String>,
    },

    /// Launch the GUI
    Gui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ledger_command() {
        let cli = Cli::try_parse_from(["saffron-admin", "ledger", "--tab", "profit", "-s", "abc"]).unwrap();
        match cli.command {
            Some(Commands::Ledger { list, tab }) => {
                assert_eq!(tab, LedgerTab::Profit);
                assert_eq!(list.search, "abc");
                assert_eq!(list.page, 1);
            }
            _ => panic!("expected ledger command"),
        }
    }

    #[test]
    fn test_negative_amount_reaches_validation() {
        let cli = Cli::try_parse_from([
            "saffron-admin",
            "add-money",
            "--phone",
            "9876543210",
            "--amount",
            "-5",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::AddMoney { ref amount, .. }) if amount == "-5"
        ));
    }

    #[test]
    fn test_no_command_defaults_to_gui() {
        let cli = Cli::try_parse_from(["saffron-admin"]).unwrap();
        assert!(cli.command.is_none());
    }
}
