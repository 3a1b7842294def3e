//! goalscout - headless live-football signal monitor
//!
//! Polls live matches, emits first-half goal signals and learns from their
//! outcomes. Metrics are pushed via structured JSON logs to stdout.
//!
//! # Usage
//! ```sh
//! BOT_TOKEN=... CHAT_ID=... cargo run -- run
//! cargo run -- once --state-path /tmp/state.json
//! cargo run -- train
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use goalscout::application::ml::{GoalPredictor, IncrementalTrainer, TrainOutcome};
use goalscout::application::monitor::SignalMonitor;
use goalscout::config::Config;
use goalscout::domain::ports::Notifier;
use goalscout::infrastructure::observability::Metrics;
use goalscout::infrastructure::persistence::{ModelStore, StateStore};
use goalscout::infrastructure::{LogNotifier, SofascoreClient, TelegramNotifier};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Live football first-half goal signal monitor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override STATE_PATH
    #[arg(long, global = true)]
    state_path: Option<PathBuf>,

    /// Override MODEL_PATH
    #[arg(long, global = true)]
    model_path: Option<PathBuf>,

    /// Override TRAINING_CSV_PATH
    #[arg(long, global = true)]
    training_csv: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll until Ctrl+C (default)
    Run {
        /// Skip the "bot started" notification
        #[arg(long)]
        quiet_start: bool,
    },
    /// Run a single cycle, save state and exit
    Once,
    /// Fit the classifier from persisted samples and save the model
    Train,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.state_path {
        config.storage.state_path = path;
    }
    if let Some(path) = cli.model_path {
        config.storage.model_path = path;
    }
    if let Some(path) = cli.training_csv {
        config.storage.training_csv_path = path;
    }

    info!("goalscout {} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: poll={:?}, source={}, state={:?}, model={:?}",
        config.polling.poll_interval,
        config.fetcher.base_url,
        config.storage.state_path,
        config.storage.model_path
    );

    match cli.command.unwrap_or(Commands::Run { quiet_start: false }) {
        Commands::Train => train(&config),
        Commands::Once => {
            let mut monitor = build_monitor(&config)?;
            monitor.run_once().await?;
            Ok(())
        }
        Commands::Run { quiet_start } => {
            // The listener must be installed before the first cycle; the
            // monitor only looks at shutdown between cycles.
            let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        info!("Ctrl+C received, finishing the current cycle");
                        let _ = stop_tx.send(());
                    }
                    Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
                }
            });

            let mut monitor = build_monitor(&config)?;
            if !quiet_start {
                monitor.announce_startup().await;
            }

            info!("Monitor running. Press Ctrl+C to shutdown.");
            monitor
                .run(async {
                    if stop_rx.await.is_err() {
                        std::future::pending::<()>().await;
                    }
                })
                .await?;
            info!("Shutdown complete.");
            Ok(())
        }
    }
}

fn build_monitor(config: &Config) -> Result<SignalMonitor> {
    let metrics = Metrics::new()?;
    let source = Arc::new(SofascoreClient::new(&config.fetcher)?);

    let notifier: Arc<dyn Notifier> = match TelegramNotifier::from_config(&config.notifier) {
        Some(telegram) => Arc::new(telegram),
        None => {
            warn!("BOT_TOKEN/CHAT_ID not set, notifications go to the log only");
            Arc::new(LogNotifier)
        }
    };

    SignalMonitor::new(config, source, notifier, metrics)
}

/// Offline fit, for seeding a model from an existing state file.
fn train(config: &Config) -> Result<()> {
    let state = StateStore::new(&config.storage.state_path).load()?;
    let mut trainer = IncrementalTrainer::new(config.strategy.min_training_samples);

    match trainer.train(&state.samples)? {
        TrainOutcome::Trained(model) => {
            ModelStore::new(&config.storage.model_path).save(&model)?;
            info!(
                "Trained {} {} on {} samples",
                model.name(),
                model.version(),
                model.trained_on()
            );
        }
        TrainOutcome::Skipped(reason) => {
            warn!("Training skipped: {}", reason);
        }
    }
    Ok(())
}
