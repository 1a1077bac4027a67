//! # Domain Entities
//!
//! Core data structures of the escrow transfer ledger.
//!
//! ## Type Decisions
//!
//! - Amounts are `u64` in the smallest currency unit; fee math widens to
//!   u128 internally so no intermediate can overflow
//! - `TransferRecord` snapshots `fee_bps` at creation, so a later fee
//!   change can never retroactively recompute a pending transfer's payout
//! - Status transitions happen only through `complete`/`cancel`, which
//!   require the record to be Pending; terminal states never revert

use remit_types::{Address, Amount, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum fee in basis points (10000 = 100%).
pub const MAX_FEE_BPS: u16 = 10_000;

/// Maximum memo length in characters.
pub const MAX_MEMO_CHARS: usize = 200;

/// Global program state singleton.
///
/// Created exactly once by `initialize` and never deleted. The transfer
/// counter doubles as the address-derivation sequence, so it must only
/// ever move forward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramState {
    /// Administrator identity; receives the fee cut of completed transfers.
    pub admin: Address,
    /// Fee in basis points (100 = 1%).
    pub fee_bps: u16,
    /// Total number of transfers created. Strictly +1 per send; doubles as
    /// the next record's derivation sequence.
    pub total_transfers: u64,
    /// Cumulative gross volume of completed transfers.
    pub total_volume: Amount,
}

impl ProgramState {
    /// Fresh state with zeroed counters.
    #[must_use]
    pub fn new(admin: Address, fee_bps: u16) -> Self {
        Self {
            admin,
            fee_bps,
            total_transfers: 0,
            total_volume: 0,
        }
    }
}

/// Lifecycle of a transfer.
///
/// ```text
/// [Pending] ──receive──→ [Completed]
///     │
///     └────cancel───→ [Cancelled]
/// ```
///
/// Completed and Cancelled are terminal; no transition leaves them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStatus {
    /// Funds locked in escrow, awaiting receipt or cancellation.
    #[default]
    Pending,
    /// Funds released to the recipient (minus fee).
    Completed,
    /// Funds returned to the sender in full.
    Cancelled,
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A single escrowed transfer.
///
/// The record address is derived from `(sender, sequence)`; the bound
/// escrow vault's address is derived from the record address. While the
/// record is Pending the vault holds exactly `amount`; in a terminal
/// state it holds 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Derived record address.
    pub address: Address,
    /// Sender identity. May cancel while Pending.
    pub sender: Address,
    /// Recipient identity. May receive while Pending.
    pub recipient: Address,
    /// Gross amount locked in escrow.
    pub amount: Amount,
    /// Optional memo, at most [`MAX_MEMO_CHARS`] characters.
    pub memo: Option<String>,
    /// Fee in basis points, snapshotted at creation.
    pub fee_bps: u16,
    /// Global sequence number the address was derived from.
    pub sequence: u64,
    /// Current lifecycle state.
    pub status: TransferStatus,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Completion timestamp. Stays `None` for Pending and Cancelled
    /// records; the cancellation event on the bus carries its own
    /// timestamp for audit.
    pub completed_at: Option<Timestamp>,
}

impl TransferRecord {
    /// Whether the transfer is still claimable/cancellable.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TransferStatus::Pending
    }

    /// Whether the transfer was claimed by the recipient.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TransferStatus::Completed
    }

    /// Whether the transfer was cancelled by the sender.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == TransferStatus::Cancelled
    }

    /// Seconds between creation and completion, if completed.
    #[must_use]
    pub fn duration(&self) -> Option<i64> {
        self.completed_at.map(|completed| completed - self.created_at)
    }

    /// Transition Pending → Completed. Caller must have verified the
    /// record is Pending; debug-asserted here as a last line of defense.
    pub(crate) fn complete(&mut self, now: Timestamp) {
        debug_assert!(self.is_pending());
        self.status = TransferStatus::Completed;
        self.completed_at = Some(now);
    }

    /// Transition Pending → Cancelled.
    pub(crate) fn cancel(&mut self) {
        debug_assert!(self.is_pending());
        self.status = TransferStatus::Cancelled;
    }
}
