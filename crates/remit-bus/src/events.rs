//! # Transfer Events
//!
//! Defines all event types that flow through the bus. One event is
//! published per successful engine operation, after its mutations commit.

use remit_types::{Address, Amount, Timestamp};
use serde::{Deserialize, Serialize};

/// All events that can be published to the bus.
///
/// Fields carry everything an off-ledger mirror needs to stay consistent
/// without reading the engine back: addresses, amounts, fee split, and
/// the timestamp the transition was recorded with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransferEvent {
    /// The program state singleton was created.
    ProgramInitialized {
        /// Administrator identity receiving fees.
        admin: Address,
        /// Fee in basis points (10000 = 100%).
        fee_bps: u16,
    },

    /// A transfer was created and its amount locked in escrow.
    TransferCreated {
        /// Derived transfer record address.
        record: Address,
        /// Derived escrow vault address now holding `amount`.
        vault: Address,
        /// Sender identity debited.
        sender: Address,
        /// Recipient identity entitled to claim.
        recipient: Address,
        /// Gross amount locked.
        amount: Amount,
        /// Sequence number the record address was derived from.
        sequence: u64,
        /// Creation timestamp.
        created_at: Timestamp,
    },

    /// A pending transfer was claimed by its recipient.
    TransferCompleted {
        /// Transfer record address.
        record: Address,
        /// Recipient identity credited.
        recipient: Address,
        /// Gross amount released from escrow.
        amount: Amount,
        /// Fee portion credited to the admin.
        fee: Amount,
        /// Completion timestamp.
        completed_at: Timestamp,
    },

    /// A pending transfer was cancelled by its sender and fully refunded.
    TransferCancelled {
        /// Transfer record address.
        record: Address,
        /// Sender identity refunded.
        sender: Address,
        /// Amount returned, fee-free.
        amount: Amount,
        /// Cancellation timestamp. The record itself keeps no terminal
        /// timestamp for cancellations; this is the audit trail.
        cancelled_at: Timestamp,
    },
}

impl TransferEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ProgramInitialized { .. } => EventTopic::Program,
            Self::TransferCreated { .. }
            | Self::TransferCompleted { .. }
            | Self::TransferCancelled { .. } => EventTopic::Transfers,
        }
    }

    /// The transfer record address this event concerns, if any.
    #[must_use]
    pub fn record(&self) -> Option<&Address> {
        match self {
            Self::ProgramInitialized { .. } => None,
            Self::TransferCreated { record, .. }
            | Self::TransferCompleted { record, .. }
            | Self::TransferCancelled { record, .. } => Some(record),
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Program lifecycle events (initialization).
    Program,
    /// Transfer lifecycle events (created / completed / cancelled).
    Transfers,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Subscribe to everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Subscribe to a set of topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Whether an event passes this filter.
    #[must_use]
    pub fn matches(&self, event: &TransferEvent) -> bool {
        if self.topics.is_empty() || self.topics.contains(&EventTopic::All) {
            return true;
        }
        self.topics.contains(&event.topic())
    }
}
