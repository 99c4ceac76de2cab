//! CLI entrypoint for annotator
//!
//! This is the main binary that wires together all layers using
//! explicit dependency injection.

use annotator_application::{ClearRecordUseCase, LoginConfig, OAuthLoginUseCase};
use annotator_domain::{ProviderType, RecordId, RecordRepository};
use annotator_infrastructure::{
    ConfigLoader, ConfiguredOAuthRepository, FileConfig, InMemoryRecordRepository,
    InProcessEventDispatcher, JsonlEventLogger,
};
use annotator_presentation::{
    Cli, Command, ConsoleEventReporter, ConsoleFormatter, ConsoleNavigator, OAuthLoginViewModel,
};
use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from));
    let _log_guard = init_logging(cli.verbose, log_file.as_deref());

    for issue in config.validate() {
        if issue.is_error() {
            bail!("Invalid configuration: {}", issue.message);
        }
        warn!("{}", issue.message);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting annotator");

    // === Dependency Injection ===
    let dispatcher = Arc::new(InProcessEventDispatcher::new());
    dispatcher.register(Arc::new(ConsoleEventReporter));
    if let Some(path) = &config.logging.event_log
        && let Some(logger) = JsonlEventLogger::new(path)
    {
        info!("Logging domain events to {}", logger.path().display());
        dispatcher.register(Arc::new(logger));
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Providers => {
            let view_model = login_view_model(&config).await;
            print!(
                "{}",
                ConsoleFormatter::format_providers(&view_model.providers().get())
            );
        }
        Command::Login { provider } => {
            let provider: ProviderType = provider.parse().map_err(|e| {
                anyhow!(
                    "{} (known providers: {})",
                    e,
                    ProviderType::ALL.map(|p| p.as_str()).join(", ")
                )
            })?;
            let view_model = login_view_model(&config).await;
            view_model.authorize(provider);
        }
        Command::Show { record_id } => {
            let repository = record_repository(&cli, &config)?;
            let record = repository.find_record(&RecordId::new(record_id)?).await?;
            print!("{}", ConsoleFormatter::format_record(&record));
        }
        Command::Clear { record_id } => {
            let repository = Arc::new(record_repository(&cli, &config)?);
            let mut record = repository.find_record(&RecordId::new(record_id)?).await?;

            let use_case = ClearRecordUseCase::new(Arc::clone(&repository), dispatcher);
            use_case.execute(&mut record).await?;
            repository.save_record(&record).await?;

            print!("{}", ConsoleFormatter::format_record(&record));
        }
    }

    Ok(())
}

/// Install the tracing subscriber: stderr always, plus an optional log file.
///
/// The returned guard must stay alive for file output to be flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level, RUST_LOG wins if set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file.and_then(|p| Some((p.parent()?, p.file_name()?))) {
        Some((dir, name)) => {
            let dir = if dir.as_os_str().is_empty() {
                Path::new(".")
            } else {
                dir
            };
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

async fn login_view_model(
    config: &FileConfig,
) -> OAuthLoginViewModel<ConfiguredOAuthRepository> {
    let repository = Arc::new(ConfiguredOAuthRepository::from_config(&config.oauth));
    let use_case = OAuthLoginUseCase::new(
        repository,
        LoginConfig::with_authorize_url(config.oauth.authorize_url.clone()),
    );
    let view_model = OAuthLoginViewModel::new(Arc::new(use_case), Arc::new(ConsoleNavigator));
    view_model.init().await;
    view_model
}

fn record_repository(cli: &Cli, config: &FileConfig) -> Result<InMemoryRecordRepository> {
    let path = cli
        .records
        .clone()
        .or_else(|| config.records.data_file.as_ref().map(PathBuf::from));

    match path {
        Some(path) => Ok(InMemoryRecordRepository::load(path)?),
        None => bail!("No record file given. Use --records <PATH> or set records.data_file."),
    }
}
