//! CLI entrypoint for conversa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use conversa_application::{
    ChatParams, ChatSession, ChatTurnUseCase, ConversationLogger, GenerationParams, LlmGateway,
    NoConversationLogger,
};
use conversa_domain::{Model, UploadedFile};
use conversa_infrastructure::{
    ConfigLoader, FileTextExtractor, GeminiGateway, JsonlConversationLogger, PageScraper,
};
use conversa_presentation::{ChatRepl, Cli, ConsoleRenderer, resolve_api_key};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("could not load configuration: {}", e))?
    };

    // CLI model flag wins over the config file
    let model: Model = match cli.model.as_deref() {
        Some(name) => name.parse().unwrap(),
        None => config.model.parse_model().unwrap_or_default(),
    };

    info!("Starting conversa with model {}", model);

    // A missing credential halts the session before anything else happens
    let Some(api_key) = resolve_api_key() else {
        bail!("A Google API key is required. Set GOOGLE_API_KEY or enter one at the prompt.");
    };

    // === Dependency Injection ===
    let gateway = GeminiGateway::new(api_key, GenerationParams::default())?;
    let llm = gateway.create_session(&model).await?;

    let conversation_logger: Arc<dyn ConversationLogger> = match cli
        .log_conversation
        .clone()
        .or_else(|| config.log.conversation_file.as_deref().map(PathBuf::from))
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Writing conversation transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let params = ChatParams::default().with_max_history(config.chat.max_history);
    let use_case = ChatTurnUseCase::new(
        Arc::new(PageScraper::new()?),
        Arc::new(FileTextExtractor),
        params,
    )
    .with_conversation_logger(conversation_logger);

    let mut session = ChatSession::new(llm, params.max_history);

    // Stage documents passed on the command line
    for path in &cli.attach {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("not a file path: {}", path.display()))?;
        let bytes =
            std::fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
        session.attach(UploadedFile::new(name, bytes));
    }

    // Chat mode
    if cli.chat {
        let history_file = config.chat.history_file.as_deref().map(PathBuf::from);
        let mut repl = ChatRepl::new(use_case, model).with_progress(!cli.quiet);
        if history_file.is_some() {
            repl = repl.with_history_file(history_file);
        }

        repl.run(&mut session).await?;
        return Ok(());
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("A message is required. Use --chat for interactive mode."),
    };

    let outcome = use_case.execute(&mut session, &message).await;

    if cli.quiet {
        println!("{}", outcome.reply);
    } else {
        if outcome.scraped {
            println!("(scraped page text from the URL)");
        }
        if outcome.attachments_processed > 0 {
            println!("(processed {} attached document(s))", outcome.attachments_processed);
        }
        println!("{}", ConsoleRenderer::render_reply(&outcome.reply));
    }

    Ok(())
}
