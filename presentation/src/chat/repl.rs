//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleRenderer;
use conversa_application::{ChatSession, ChatTurnUseCase};
use conversa_domain::{DocumentKind, Model, UploadedFile};
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: ChatTurnUseCase,
    model: Model,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: ChatTurnUseCase, model: Model) -> Self {
        Self {
            use_case,
            model,
            show_progress: true,
            history_file: default_history_file(),
        }
    }

    /// Set whether to show the thinking spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the line-edit history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL against the given session
    pub async fn run(&self, session: &mut ChatSession) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(session, line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_message(session, line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             conversa - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        println!();
        println!("Commands:");
        println!("  /help           - Show this help");
        println!("  /attach <path>  - Stage a document (pdf, docx, txt) for the next message");
        println!("  /history        - Show the recorded conversation");
        println!("  /model          - Show the current model");
        println!("  /clear          - Clear conversation and staged attachments");
        println!("  /quit           - Exit chat");
        println!();
        println!("A message that is a URL (http://, https://, www.) gets its page text scraped.");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    fn handle_command(&self, session: &mut ChatSession, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
            }
            "/model" => {
                println!("Current model: {}", self.model);
            }
            "/history" => {
                println!("{}", ConsoleRenderer::render_transcript(session.history()));
            }
            "/clear" => {
                session.reset();
                println!("Conversation cleared.");
            }
            _ if cmd.starts_with("/attach") => {
                let path = cmd.strip_prefix("/attach").unwrap().trim();
                if path.is_empty() {
                    println!("Usage: /attach <path>");
                } else {
                    self.attach_file(session, Path::new(path));
                }
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    /// Stage a document for the next turn, rejecting unsupported kinds.
    fn attach_file(&self, session: &mut ChatSession, path: &Path) {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                println!("Not a file path: {}", path.display());
                return;
            }
        };

        if DocumentKind::from_filename(&name).is_none() {
            println!(
                "Unsupported file format; supported: {}",
                DocumentKind::supported_extensions().join(", ")
            );
            return;
        }

        match std::fs::read(path) {
            Ok(bytes) => {
                session.attach(UploadedFile::new(name.clone(), bytes));
                println!(
                    "Attached {} ({} staged for the next message)",
                    name,
                    session.pending_attachments().len()
                );
            }
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                println!("Could not read {}: {}", path.display(), e);
            }
        }
    }

    async fn process_message(&self, session: &mut ChatSession, message: &str) {
        println!();

        let spinner = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Thinking...");
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let outcome = self.use_case.execute(session, message).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        if outcome.scraped {
            println!("(scraped page text from the URL)");
        }
        if outcome.attachments_processed > 0 {
            println!(
                "(processed {} attached document{})",
                outcome.attachments_processed,
                if outcome.attachments_processed == 1 { "" } else { "s" }
            );
        }

        println!("{}", ConsoleRenderer::render_reply(&outcome.reply));
        println!();
    }
}

/// Default location for the line-edit history file.
fn default_history_file() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("conversa").join("history.txt"))
}
