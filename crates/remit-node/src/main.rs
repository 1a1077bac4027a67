//! # Remit Node
//!
//! Entry point: load configuration, initialize structured logging,
//! bootstrap the engine, and tail its events until interrupted.

use anyhow::{Context, Result};
use remit_bus::{EventFilter, EventSubscriber, TransferEvent};
use remit_node::{bootstrap, NodeConfig};
use remit_types::render_address;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = NodeConfig::from_env().context("loading configuration")?;
    let runtime = bootstrap(&config).context("bootstrapping node")?;

    let mut events = runtime.bus.subscribe(EventFilter::all());
    let tail = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            log_event(&event);
        }
    });

    info!("Node running; press ctrl-c to stop");
    tokio::signal::ctrl_c().await.context("waiting for ctrl-c")?;
    info!("Shutting down");
    tail.abort();
    Ok(())
}

fn log_event(event: &TransferEvent) {
    match event {
        TransferEvent::ProgramInitialized { admin, fee_bps } => {
            info!(admin = %render_address(admin), fee_bps, "program initialized");
        }
        TransferEvent::TransferCreated {
            record,
            sender,
            recipient,
            amount,
            ..
        } => {
            info!(
                record = %render_address(record),
                sender = %render_address(sender),
                recipient = %render_address(recipient),
                amount,
                "transfer created"
            );
        }
        TransferEvent::TransferCompleted {
            record, fee, amount, ..
        } => {
            info!(record = %render_address(record), amount, fee, "transfer completed");
        }
        TransferEvent::TransferCancelled { record, amount, .. } => {
            info!(record = %render_address(record), amount, "transfer cancelled");
        }
    }
}
