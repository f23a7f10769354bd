//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for conversa
#[derive(Parser, Debug)]
#[command(name = "conversa")]
#[command(author, version, about = "Context-aware Gemini chat for the terminal")]
#[command(long_about = r#"
Conversa chats with a Gemini model, augmenting your messages with context:

- Recent conversation history is prefixed to every prompt
- A message that is a URL (http://, https://, www.) gets the page's text
  scraped and attached
- Attached documents (pdf, docx, txt) have their text extracted and attached

The GOOGLE_API_KEY environment variable carries the API credential; when it
is absent you are prompted once (masked input).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./conversa.toml     Project-level config
3. ~/.config/conversa/config.toml   Global config

Example:
  conversa "What is the capital of France?"
  conversa --attach report.pdf "Summarize this report"
  conversa --chat
  conversa --chat -m gemini-2.5-flash
"#)]
pub struct Cli {
    /// The message to send (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to chat with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Attach a document (pdf, docx, txt); can be repeated
    #[arg(short, long, value_name = "PATH")]
    pub attach: Vec<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL conversation transcript to PATH
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,
}
