//! # Event Publisher
//!
//! Defines the publishing side of the bus. Publishing is synchronous and
//! infallible by contract: the engine calls it after commit, and nothing
//! downstream may block or abort a ledger operation.

use crate::events::{EventFilter, TransferEvent};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::trace;

/// Trait for publishing events to the bus.
///
/// Implementations must be non-blocking and must swallow delivery
/// failures; the return value is informational only.
pub trait EventSink: Send + Sync {
    /// Publish an event.
    ///
    /// # Returns
    ///
    /// The number of active subscribers that received the event.
    fn publish(&self, event: TransferEvent) -> usize;

    /// Total number of events published.
    fn events_published(&self) -> u64;
}

/// In-memory implementation of the event bus.
///
/// Uses `tokio::sync::broadcast` for multi-producer, multi-consumer
/// semantics. Suitable for single-process operation; a deployment with an
/// external mirror would put a durable queue behind this trait instead.
pub struct InMemoryEventBus {
    /// Broadcast sender for events.
    sender: broadcast::Sender<TransferEvent>,

    /// Total events published.
    events_published: AtomicU64,
}

impl InMemoryEventBus {
    /// Create a new bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new bus with the given per-subscriber buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
        }
    }

    /// Subscribe to events matching a filter.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for InMemoryEventBus {
    fn publish(&self, event: TransferEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        trace!(topic = ?event.topic(), "Publishing event");
        // send() only errors when there are no receivers; that is a valid
        // state for a fire-and-forget bus, not a failure.
        self.sender.send(event).unwrap_or(0)
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

/// Sink that discards every event. Useful for tests and for running the
/// engine without any observers attached.
#[derive(Debug, Default)]
pub struct NullEventSink {
    events_published: AtomicU64,
}

impl NullEventSink {
    /// Create a new discarding sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for NullEventSink {
    fn publish(&self, _event: TransferEvent) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        0
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}
