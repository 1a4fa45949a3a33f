//! CLI entrypoint for Preference Kiosk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use kiosk_application::{ControllerError, SessionController, SessionEventLogger};
use kiosk_domain::Preference;
use kiosk_infrastructure::{
    BedrockInferenceBackend, ConfigIssue, ConfigLoader, FileConfig, JsonPromptFile, JsonResultStore,
    JsonlSessionEventLogger, Severity,
};
use kiosk_presentation::{
    Cli, ConsoleFormatter, GenerationSpinner, KioskCommand, spawn_stdin_reader,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

type Controller = SessionController<BedrockInferenceBackend>;

/// What the operator asked for once a session is over
enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _log_guard = init_tracing(cli.verbose, &config);

    info!("Starting Preference Kiosk");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("Config {}: {}", issue.field, issue.message),
            Severity::Warning => warn!("Config {}: {}", issue.field, issue.message),
        }
    }
    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Invalid configuration; see the errors above");
    }

    // === Dependency Injection ===
    let backend = Arc::new(
        BedrockInferenceBackend::new(
            &config.bedrock.to_provider_config(),
            config.text.to_params(),
            config.image.to_params(),
        )
        .await,
    );
    info!("Using Bedrock in {}", backend.region());
    let prompts = Arc::new(JsonPromptFile::new(&config.prompts.path));
    let store = Arc::new(JsonResultStore::new(&config.results.dir));

    let mut controller = SessionController::new(
        backend,
        prompts,
        store,
        config.controller_config(),
    );
    if let Some(path) = &config.logging.session_log {
        match JsonlSessionEventLogger::new(path) {
            Some(logger) => {
                let logger: Arc<dyn SessionEventLogger> = Arc::new(logger);
                controller = controller.with_event_logger(logger);
            }
            None => warn!("Session log {} is unavailable", path.display()),
        }
    }
    let controller = Arc::new(controller);

    controller.initialize().await.with_context(|| {
        format!(
            "Could not load prompts from {}",
            config.prompts.path.display()
        )
    })?;
    if controller.prompt_count() == 0 {
        bail!("{} contains no prompts", config.prompts.path.display());
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _reader = spawn_stdin_reader(tx);

    loop {
        match run_session(&controller, &mut rx, cli.once).await? {
            Flow::Continue => continue,
            Flow::Quit => break,
        }
    }

    info!("Preference Kiosk stopped");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if let Some(path) = &cli.prompts {
        config.prompts.path = path.clone();
    }
    if let Some(dir) = &cli.results {
        config.results.dir = dir.clone();
    }
    Ok(config)
}

/// Initialize logging based on verbosity level, mirrored to a daily file
/// when `logging.log_dir` is set.
fn init_tracing(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &config.logging.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "preference-kiosk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
            None
        }
    }
}

/// Drive one session: generate both candidates, take button presses, save.
async fn run_session(
    controller: &Arc<Controller>,
    rx: &mut mpsc::UnboundedReceiver<KioskCommand>,
    once: bool,
) -> Result<Flow> {
    println!();
    println!("{}", ConsoleFormatter::session_header(&controller.snapshot()));

    let spinner = GenerationSpinner::start();
    let handle = controller.spawn_generation();
    let wait = handle.wait();
    tokio::pin!(wait);
    let mut ticker = tokio::time::interval(Duration::from_millis(200));

    let outcome = loop {
        tokio::select! {
            result = &mut wait => break result,
            _ = ticker.tick() => spinner.update(controller.state()),
            command = rx.recv() => match command {
                Some(KioskCommand::Next) => {
                    spinner.finish(false);
                    return advance(controller, once).await;
                }
                Some(KioskCommand::Quit) | None => {
                    spinner.finish(false);
                    return Ok(Flow::Quit);
                }
                Some(button) => record(controller, button),
            },
        }
    };

    match outcome {
        Ok(()) => {
            spinner.finish(true);
            println!("{}", ConsoleFormatter::candidates(&controller.session()));
        }
        Err(ControllerError::Cancelled) => return Ok(Flow::Continue),
        Err(ControllerError::Inference(e)) => {
            spinner.finish(false);
            println!("{}", ConsoleFormatter::status(&controller.snapshot()));
            let cooldown = controller.config().error_cooldown;
            warn!("Generation failed: {}; resetting in {:?}", e, cooldown);
            tokio::select! {
                _ = tokio::time::sleep(cooldown) => {}
                command = rx.recv() => {
                    if matches!(command, Some(KioskCommand::Quit) | None) {
                        return Ok(Flow::Quit);
                    }
                }
            }
            controller.reset_session();
            return Ok(Flow::Continue);
        }
        Err(e) => {
            spinner.finish(false);
            return Err(e.into());
        }
    }

    while let Some(command) = rx.recv().await {
        match command {
            KioskCommand::Next => return advance(controller, once).await,
            KioskCommand::Quit => return Ok(Flow::Quit),
            button => record(controller, button),
        }
    }
    Ok(Flow::Quit)
}

fn record(controller: &Controller, button: KioskCommand) {
    let result = match button.preference() {
        Some(Preference::A) => controller.on_choice_a(),
        Some(Preference::B) => controller.on_choice_b(),
        None => return,
    };
    match result {
        Ok(_) => println!("{}", ConsoleFormatter::status(&controller.snapshot())),
        Err(e) => warn!("Choice ignored: {}", e),
    }
}

async fn advance(controller: &Controller, once: bool) -> Result<Flow> {
    let chosen = controller.snapshot().human_preference.is_some();
    let location = controller.save_and_advance().await;
    match location {
        None if chosen => {
            let error = controller.snapshot().error;
            println!("{}", ConsoleFormatter::save_failed(error.as_deref()));
        }
        _ => println!("{}", ConsoleFormatter::saved(location.as_deref())),
    }
    if once {
        return Ok(Flow::Quit);
    }
    Ok(Flow::Continue)
}
