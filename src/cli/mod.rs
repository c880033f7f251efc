use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "correio",
    about = "Correio Digital: message translation with provider fallback and notifications",
    version,
    author,
    long_about = None
)]
pub struct CorreioCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a message (or bare text when --from is omitted)
    Translate {
        /// Text to translate
        #[arg(short, long)]
        text: String,

        /// Target language code (e.g. EN, PT, ES)
        #[arg(long)]
        to: String,

        /// Source language code; when given, the text is sent as a message
        #[arg(long)]
        from: Option<String>,

        /// Sender id for the message
        #[arg(long, default_value = "user@correio.com")]
        sender: String,

        /// Recipient id for the message
        #[arg(long, default_value = "friend@correio.com")]
        recipient: String,
    },

    /// Walk through the translation adapters and their fallback chain
    AdapterDemo,

    /// Walk through message notifications with attached observers
    ObserverDemo,

    /// List supported language codes
    Languages,

    /// Show DeepL character usage
    Quota,
}
