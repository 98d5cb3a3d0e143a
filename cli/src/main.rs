//! CLI entrypoint for rag-copilot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rag_copilot_application::{
    CollectInputUseCase, DeliverySinks, DispatchResultUseCase, NoProgress, ProgressNotifier,
    RunRagQueryInput, RunRagQueryUseCase,
};
use rag_copilot_domain::{OutputFormat, resolve_template};
use rag_copilot_infrastructure::{
    ChatTarget, CommandChatLauncher, ConfigLoader, DEFAULT_CHAT_URL, FileConfig,
    FileTextSurface, SystemClipboard, TokioScriptRunner, WorkspaceLocator,
};
use rag_copilot_presentation::{
    Cli, ConsoleFormatter, ConsoleNotifier, ProgressReporter, SimpleProgress, TerminalInput,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize logging based on verbosity level, optionally mirrored to a file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Cannot create log directory {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        info!("Configuration files disabled (--no-config)");
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting rag-copilot");

    let trigger = cli.trigger()?;
    let config = load_config(&cli)?;
    let settings = config.to_settings();
    ConsoleFormatter::set_color(config.output.color);

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let cwd = std::env::current_dir().context("Cannot read current directory")?;
    let workspace_root = WorkspaceLocator::locate(cli.workspace.as_deref(), &cwd);
    debug!("Workspace root: {:?}", workspace_root);

    // === Dependency Injection ===
    let surface_root = workspace_root.as_deref().unwrap_or(&cwd);
    let surface = FileTextSurface::new(resolve_template(&config.surface.directory, surface_root))
        .with_open_command(config.surface.open_command.clone());

    let chat_target = config
        .delivery
        .chat_target()
        .unwrap_or_else(|| ChatTarget::Url(DEFAULT_CHAT_URL.to_string()));

    let sinks = DeliverySinks {
        clipboard: Arc::new(SystemClipboard::new(config.delivery.clipboard_command.clone())),
        surface: Arc::new(surface),
        chat: Arc::new(CommandChatLauncher::new(chat_target)),
    };

    let notifier = Arc::new(ConsoleNotifier::new());
    let collector = CollectInputUseCase::new(Arc::new(TerminalInput::new()));
    let dispatcher = DispatchResultUseCase::new(sinks, notifier.clone());
    let use_case = RunRagQueryUseCase::new(
        collector,
        Arc::new(TokioScriptRunner::new()),
        dispatcher,
        notifier,
    );

    let input = RunRagQueryInput::new(settings)
        .with_preset(trigger.preset())
        .with_question(cli.question.clone())
        .with_workspace_root(workspace_root);

    info!("Running trigger {}", trigger);
    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let outcome = use_case.run(input, progress.as_ref()).await;

    let output = ConsoleFormatter::render(&outcome, format);
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(if outcome.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
