//! Adapters: in-process implementations of the engine's ports.

pub mod clock;
pub mod memory_ledger;

pub use clock::{ManualClock, SystemClock};
pub use memory_ledger::InMemoryLedger;
