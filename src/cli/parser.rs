//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Send email and Slack notifications
#[derive(Parser, Debug)]
#[command(name = "notifier")]
#[command(about = "Send email and Slack notifications")]
#[command(long_about = "
Notifier sends one-off notifications: plain-text email through Mailgun and
channel messages through a Slack incoming webhook. Credentials are read from
flags or the MAILGUN_API_KEY / SLACK_TOKEN environment variables; everything
else can be configured with NOTIFIER_* environment variables.

EXAMPLES:
    # Send an email with the default sender and subject
    notifier email --to someone@example.org --body \"Build finished\"

    # Email several recipients, failing silently on delivery errors
    notifier email --to a@example.org --to b@example.org \\
        --subject \"Nightly\" --body \"Done\" --silent

    # Post to the default Slack channel
    notifier slack --text \"HI EVERYONE!\"

    # Post somewhere specific with a custom bot identity
    notifier slack --channel \"#general\" --username \"Confetti Bot\" \\
        --icon \":tada:\" --text \"Release is out\"
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format override
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a plain-text email through Mailgun
    Email(EmailArgs),
    /// Post a message to a Slack channel through an incoming webhook
    Slack(SlackArgs),
}

/// Arguments for the email command
#[derive(Args, Debug, Clone)]
pub struct EmailArgs {
    /// Recipient address (repeat for several recipients)
    #[arg(long = "to", value_name = "ADDRESS", required = true, value_parser = super::validation::validate_address)]
    pub to: Vec<String>,

    /// Sender, e.g. "Someone <someone@example.org>"
    ///
    /// Default: NOTIFIER_EMAIL__DEFAULT_FROM
    #[arg(long, value_name = "ADDRESS")]
    pub from: Option<String>,

    /// Subject line
    ///
    /// Default: NOTIFIER_EMAIL__DEFAULT_SUBJECT
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Plain-text body
    #[arg(short, long, value_parser = super::validation::validate_non_empty)]
    pub body: String,

    /// Report delivery failures as warnings and exit successfully
    #[arg(long)]
    pub silent: bool,

    /// Mailgun API key
    #[arg(long, env = "MAILGUN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Mailgun sending domain
    ///
    /// Overrides NOTIFIER_EMAIL__DOMAIN.
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,
}

/// Arguments for the slack command
#[derive(Args, Debug, Clone)]
pub struct SlackArgs {
    /// Message text
    #[arg(short, long, value_parser = super::validation::validate_non_empty)]
    pub text: String,

    /// Destination channel, e.g. "#general"
    #[arg(short, long)]
    pub channel: Option<String>,

    /// Display name of the posting bot
    #[arg(short, long)]
    pub username: Option<String>,

    /// Emoji code used as the bot icon, e.g. ":tada:"
    #[arg(short, long)]
    pub icon: Option<String>,

    /// Workspace subdomain (<subdomain>.slack.com)
    #[arg(long, value_parser = super::validation::validate_subdomain)]
    pub subdomain: Option<String>,

    /// Report delivery failures as warnings and exit successfully
    #[arg(long)]
    pub silent: bool,

    /// Incoming-webhook token
    #[arg(long, env = "SLACK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Log format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    #[value(name = "full")]
    Full,
    #[value(name = "compact")]
    Compact,
    #[value(name = "json")]
    Json,
}

impl LogFormatArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormatArg::Full => "full",
            LogFormatArg::Compact => "compact",
            LogFormatArg::Json => "json",
        }
    }
}

impl Cli {
    /// Log level implied by the global verbosity flags, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
