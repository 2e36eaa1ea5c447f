//! Course Map - headless shell.
//!
//! Reads JSON events from stdin, writes the renderer contract to stdout
//! whenever the query changes. Logs go to stderr.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use cmap_app::logging::init_logging;
use cmap_app::{App, AppConfig, Message, forward_events, spawn_catalog_fetches};
use cmap_catalog::CatalogClient;
use cmap_model::ColorScheme;
use cmap_query::QueryContract;
use tokio::io::{AsyncWriteExt, BufReader, Stdout};
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let (config, config_error) = AppConfig::load();

    let log_config = config
        .logging
        .log_config()
        .with_ansi(config.logging.file.is_none() && std::io::stderr().is_terminal());
    init_logging(&log_config).context("failed to initialize logging")?;
    if let Some(error) = config_error {
        tracing::warn!(%error, "{}", error.user_message());
    }

    tracing::info!("Starting Course Map");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;
    runtime.block_on(run(config))
}

/// Host colour scheme from the terminal's `COLORFGBG`.
fn host_scheme() -> ColorScheme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| ColorScheme::from_colorfgbg(&value))
        .unwrap_or_default()
}

async fn run(config: AppConfig) -> Result<()> {
    let mut app = App::new(config.state_store(), host_scheme());
    let mut stdout = tokio::io::stdout();
    emit(&mut stdout, app.contract()).await?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    match CatalogClient::new(config.api.clone()) {
        Ok(client) => {
            spawn_catalog_fetches(&Arc::new(client), &tx);
        }
        Err(error) => {
            tracing::warn!(%error, "Catalog client unavailable; pickers will be empty");
        }
    }

    let input = forward_events(BufReader::new(tokio::io::stdin()), tx);
    tokio::pin!(input);

    loop {
        tokio::select! {
            biased;
            Some(message) = rx.recv() => {
                if let Some(contract) = app.update(message) {
                    emit(&mut stdout, &contract).await?;
                }
            }
            result = &mut input => {
                result.context("failed to read events")?;
                break;
            }
        }
    }

    // Events read in the final poll of the input are still queued.
    while let Ok(message) = rx.try_recv() {
        if let Some(contract) = app.update(message) {
            emit(&mut stdout, &contract).await?;
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

async fn emit(stdout: &mut Stdout, contract: &QueryContract) -> Result<()> {
    let mut line = serde_json::to_vec(contract).context("failed to encode query")?;
    line.push(b'\n');
    stdout.write_all(&line).await?;
    stdout.flush().await?;
    Ok(())
}
