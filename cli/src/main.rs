//! CLI entrypoint for Culture Kingdom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use kingdom_application::{PlayGameUseCase, SessionConfig};
use kingdom_domain::OutputFormat;
use kingdom_infrastructure::{
    ConfigLoader, FileConfig, JsonlGameRecorder, OpenTdbQuestionSource, default_log_directory,
};
use kingdom_presentation::{Cli, ConsoleGame, ConsoleOptions, TuiApp, TuiSettings};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Time the console game gets to record the abort and say goodbye after Ctrl+C
const INTERRUPT_GRACE: Duration = Duration::from_millis(500);

/// How the console session ended
#[derive(Debug, PartialEq, Eq)]
enum ConsoleExit<T> {
    Finished(T),
    /// Ctrl+C fired; holds the result if the game unwound within the grace period
    Interrupted(Option<T>),
}

/// Drive the console game, letting it finish its own quit handling after an interrupt
async fn run_console<F: Future>(
    run: F,
    interrupt: &CancellationToken,
    grace: Duration,
) -> ConsoleExit<F::Output> {
    tokio::pin!(run);
    tokio::select! {
        result = &mut run => ConsoleExit::Finished(result),
        _ = interrupt.cancelled() => {
            ConsoleExit::Interrupted(tokio::time::timeout(grace, &mut run).await.ok())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration (CLI flags override file values below)
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_guard = init_logging(&cli, &config)?;

    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("config error: {}", problem);
        }
        bail!("Invalid configuration ({} problem(s))", problems.len());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Culture Kingdom");

    // === Dependency Injection ===
    let mut trivia = config.trivia.to_settings();
    if let Some(url) = &cli.api_url {
        trivia.api_url = url.clone();
    }
    let source = Arc::new(
        OpenTdbQuestionSource::new(trivia).context("Failed to create trivia client")?,
    );

    let cancellation = CancellationToken::new();
    let mut use_case = PlayGameUseCase::new(source)
        .with_config(SessionConfig::from_timeout_seconds(
            config.trivia.fetch_timeout_seconds,
        ))
        .with_cancellation(cancellation.clone());

    if let Some(path) = cli.record.clone().or_else(|| config.logging.game_record_path()) {
        let recorder = JsonlGameRecorder::open(&path)
            .with_context(|| format!("Failed to open game record {}", path.display()))?;
        info!("Recording games to {}", path.display());
        use_case = use_case.with_recorder(Arc::new(recorder));
    }

    if cli.console {
        let options = ConsoleOptions {
            players: if cli.players.is_empty() {
                config.game.players.clone()
            } else {
                cli.players.clone()
            },
            rounds: cli.rounds.unwrap_or(config.game.rounds),
            unlimited: cli.unlimited,
            format: cli
                .output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default(),
            quiet: cli.quiet,
            max_invalid_difficulty_attempts: config.game.max_invalid_difficulty_attempts,
        };

        // Ctrl+C quits the running game; the console never sees raw mode
        let interrupt = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupt.cancel();
            }
        });

        let game = ConsoleGame::new(use_case, options);
        match run_console(game.run(), &cancellation, INTERRUPT_GRACE).await {
            ConsoleExit::Finished(result) => result?,
            ConsoleExit::Interrupted(result) => {
                if let Some(Err(e)) = result {
                    warn!("Game ended with an error after Ctrl+C: {}", e);
                }
                // a prompt may still be blocked on stdin
                drop(log_guard);
                std::process::exit(130);
            }
        }
    } else {
        if !cli.players.is_empty() || cli.unlimited {
            warn!("--player and --unlimited only apply with --console");
        }
        let settings = TuiSettings {
            result_display: Duration::from_millis(config.tui.result_display_ms),
            tick_rate: Duration::from_millis(config.tui.tick_rate_ms),
            default_rounds: cli.rounds.unwrap_or(config.game.rounds),
        };
        let mut app = TuiApp::new(use_case, settings).with_cancellation(cancellation);
        app.run().await?;
    }

    drop(log_guard);
    Ok(())
}

/// Console mode logs to stderr; the full-screen UI logs to a daily file
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    // RUST_LOG applies only when no -v flag was given
    let filter = || match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.console {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    }

    let Some(dir) = config
        .logging
        .directory_path()
        .or_else(default_log_directory)
    else {
        return Ok(None);
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "culture-kingdom.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_console_returns_finished_game() {
        let token = CancellationToken::new();
        let exit = run_console(async { 7 }, &token, Duration::from_millis(10)).await;
        assert_eq!(exit, ConsoleExit::Finished(7));
    }

    #[tokio::test]
    async fn test_interrupt_lets_game_finish_its_goodbye() {
        let token = CancellationToken::new();
        let watched = token.clone();
        let game = async move {
            watched.cancelled().await;
            // recording the abort and printing the farewell
            tokio::time::sleep(Duration::from_millis(20)).await;
            "goodbye"
        };
        token.cancel();

        let exit = run_console(game, &token, Duration::from_secs(2)).await;
        assert_eq!(exit, ConsoleExit::Interrupted(Some("goodbye")));
    }

    #[tokio::test]
    async fn test_interrupt_gives_up_on_stuck_game() {
        let token = CancellationToken::new();
        token.cancel();

        let exit = run_console(
            std::future::pending::<()>(),
            &token,
            Duration::from_millis(20),
        )
        .await;
        assert_eq!(exit, ConsoleExit::Interrupted(None));
    }
}
