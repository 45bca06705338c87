use crate::models::settings::Lang;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal working-time tracker: daily start/stop, breaks, memos and monthly summaries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Run in test mode (no config file update on init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Record the current time as today's start
    Start {
        #[arg(long = "no-notify", help = "Do not post a webhook notification")]
        no_notify: bool,
    },

    /// Record the current time as today's stop
    Stop {
        #[arg(long = "no-notify", help = "Do not post a webhook notification")]
        no_notify: bool,
    },

    /// Set a memo (today's latest memo unless --date/--index is given)
    Memo {
        /// Memo text
        text: String,

        #[arg(long, help = "Day to edit (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, requires = "date", help = "History position to overwrite")]
        index: Option<usize>,

        #[arg(long = "no-notify", help = "Do not post a webhook notification")]
        no_notify: bool,
    },

    /// Edit start/stop/break/memo of a given day
    Edit {
        /// Day to edit (YYYY-MM-DD)
        date: String,

        #[arg(long, value_name = "HH:MM", help = "Start time")]
        start: Option<String>,

        #[arg(long, value_name = "HH:MM", help = "Stop time")]
        stop: Option<String>,

        #[arg(long = "break", value_name = "MIN", help = "Break length in minutes")]
        break_min: Option<u32>,

        #[arg(long, help = "Memo text")]
        memo: Option<String>,

        /// History position to overwrite (appends when out of range)
        #[arg(long, help = "History position to overwrite (default: latest)")]
        index: Option<usize>,

        #[arg(long = "no-notify", help = "Do not post a webhook notification")]
        no_notify: bool,
    },

    /// Show the latest values and full edit history of a day
    Show {
        /// Day to show (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// List a month day by day with its summary
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to list (default: current)")]
        month: Option<String>,
    },

    /// Print or write the month as CSV for mail
    Csv {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to format (default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "FILE", help = "Output file (default: stdout)")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print a mailto: link carrying the month's CSV
    Mail {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to send (default: current)")]
        month: Option<String>,
    },

    /// Export the whole state (records + settings) as JSON
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Merge a previously exported JSON state into the local one
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// View, edit or change settings
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,

        #[arg(long = "mail", value_name = "ADDRESS", help = "Address CSV mails are sent to")]
        mail: Option<String>,

        #[arg(long = "slack-url", value_name = "URL", help = "Incoming webhook URL")]
        slack_url: Option<String>,

        #[arg(long = "slack-context", value_name = "TEXT", help = "Text prepended to notifications")]
        slack_context: Option<String>,

        #[arg(long = "lang", value_enum)]
        lang: Option<Lang>,

        #[arg(
            long = "default-break",
            value_name = "MIN",
            conflicts_with = "clear_default_break",
            help = "Break length used when a day has none"
        )]
        default_break: Option<u32>,

        #[arg(long = "clear-default-break", help = "Remove the default break length")]
        clear_default_break: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
