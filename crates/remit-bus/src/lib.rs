//! # Remit Bus - Event Sink for Transfer Notifications
//!
//! In-process event bus the engine publishes state changes to. Consumers
//! (off-ledger history mirrors, notification services, log tails) subscribe
//! with a topic filter and read at their own pace.
//!
//! ## Contract
//!
//! - **Fire-and-forget:** publishing never blocks and never fails; a bus
//!   with zero subscribers simply drops the event
//! - **Best-effort delivery:** slow subscribers may lag and lose events;
//!   the ledger itself is the source of truth, not the bus
//! - **No feedback path:** nothing a subscriber does can abort or delay a
//!   ledger operation
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────────┐
//! │ TransferEngine│    publish()      │ history mirror   │
//! │              │ ──────┐            │ notifications    │
//! └──────────────┘       │            └──────────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, TransferEvent};
pub use publisher::{EventSink, InMemoryEventBus, NullEventSink};
pub use subscriber::{EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before old events are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
