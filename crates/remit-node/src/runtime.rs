//! # Runtime Wiring
//!
//! Connects the concrete adapters (in-memory ledger, system clock, event
//! bus) to the engine and exposes the assembled handles.

use std::sync::Arc;

use remit_bus::InMemoryEventBus;
use remit_engine::{InMemoryLedger, SystemClock, TransferEngine};
use remit_types::{Address, Amount};
use tracing::info;

use crate::config::NodeConfig;

/// Assembled node: the engine plus the bus its events flow through.
pub struct Runtime {
    /// The escrow transfer core.
    pub engine: Arc<TransferEngine>,
    /// The event bus; subscribe here for state-change notifications.
    pub bus: Arc<InMemoryEventBus>,
    ledger: Arc<InMemoryLedger>,
}

impl Runtime {
    /// Credit an identity on the backing ledger. Demo/test affordance; a
    /// real deployment funds accounts through its own on-ramp.
    pub fn fund(&self, account: Address, amount: Amount) -> anyhow::Result<()> {
        use remit_engine::BalanceLedger;
        self.ledger.credit(&account, amount)?;
        Ok(())
    }
}

/// Build and initialize a node from configuration.
///
/// The engine is initialized with the configured admin and fee, so the
/// returned runtime is immediately ready to accept transfers.
pub fn bootstrap(config: &NodeConfig) -> anyhow::Result<Runtime> {
    config.validate()?;

    let ledger = Arc::new(InMemoryLedger::new());
    let bus = Arc::new(InMemoryEventBus::with_capacity(config.bus_capacity));
    let engine = Arc::new(TransferEngine::new(
        ledger.clone(),
        Arc::new(SystemClock::new()),
        bus.clone(),
    ));

    let state = engine.initialize(config.admin, config.fee_bps)?;
    info!(
        fee_bps = state.fee_bps,
        "Node bootstrapped, engine initialized"
    );

    Ok(Runtime {
        engine,
        bus,
        ledger,
    })
}
