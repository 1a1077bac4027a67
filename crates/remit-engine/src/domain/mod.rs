//! Domain layer: entities, errors, and fee math. Pure data and pure
//! functions; all locking and I/O live in the engine and adapters.

pub mod entities;
pub mod errors;
pub mod fees;

pub use entities::{ProgramState, TransferRecord, TransferStatus, MAX_FEE_BPS, MAX_MEMO_CHARS};
pub use errors::{EngineError, LedgerError};
pub use fees::calculate_fee;
