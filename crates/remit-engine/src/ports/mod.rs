//! Ports: the engine's outward-facing trait seams. The ledger backs escrow
//! movement; the clock exists so tests can pin time.

pub mod clock;
pub mod ledger;

pub use clock::Clock;
pub use ledger::BalanceLedger;
