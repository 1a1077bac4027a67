//! # remit-engine
//!
//! The escrow transfer core: a deterministic state machine in which a
//! sender locks funds into an escrow vault, the recipient claims them
//! (minus a basis-point fee), or the sender reclaims them in full.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: Authoritative balances, transfer records,
//!   and global counters
//! - **Four Operations**: `initialize`, `send_transfer`, `receive_transfer`,
//!   `cancel_transfer` — each commits all-or-nothing
//! - **Publishes** `TransferEvent`s to the bus after every successful
//!   operation; consumers are strictly downstream
//!
//! ## Atomicity Model
//!
//! The execution substrate this design descends from serializes all
//! writers per account. On a threaded runtime that guarantee is rebuilt
//! explicitly:
//!
//! - `ProgramState` lives behind one `RwLock`; every `send_transfer`
//!   reserves its sequence number under that lock
//! - each `TransferRecord` lives behind its own `Mutex`, so settlement
//!   attempts on one record never interleave
//! - ledger mutations commit under the ledger's own lock, and every
//!   operation orders its work as: validate everything, then one fallible
//!   ledger commit, then infallible in-memory commits
//!
//! ## Authorization
//!
//! Callers arrive pre-authenticated; the engine checks only domain
//! authorization (recipient claims, sender cancels). Escrow vaults have no
//! external debit path at all: no public method accepts a vault address as
//! a debit source.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod ports;

pub use adapters::{InMemoryLedger, ManualClock, SystemClock};
pub use domain::{EngineError, LedgerError, ProgramState, TransferRecord, TransferStatus};
pub use engine::TransferEngine;
pub use ports::{BalanceLedger, Clock};
