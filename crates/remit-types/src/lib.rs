//! # remit-types
//!
//! Shared domain types for the Remit escrow ledger.
//!
//! ## Role in System
//!
//! - **Single Vocabulary**: Every crate speaks in these aliases
//!   (`Address`, `Amount`, `Timestamp`)
//! - **Deterministic Addressing**: Pure Keccak-256 derivation from a
//!   domain tag plus key fields (`addressing` module)
//!
//! No I/O, no locks, no async. Everything here is a pure value type or a
//! pure function.

pub mod addressing;
pub mod entities;

pub use addressing::{
    escrow_authority_address, escrow_vault_address, program_state_address,
    transfer_record_address,
};
pub use entities::{render_address, Address, Amount, Timestamp};
