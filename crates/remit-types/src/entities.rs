//! # Shared Domain Types
//!
//! Core aliases used by every Remit crate.
//!
//! ## Type Decisions
//!
//! - `Address: [u8; 32]` - Identities and derived account addresses share
//!   one keyspace. 32 bytes matches the Keccak-256 output used by the
//!   `addressing` module, so derived addresses need no truncation.
//! - `Amount: u64` - Smallest currency unit. Fee math widens to u128
//!   internally; stored balances never exceed u64 in practice.
//! - `Timestamp: i64` - Unix seconds. Signed to survive arithmetic on
//!   durations without casts.

/// 32-byte account address. Used both for external identities (senders,
/// recipients, the admin) and for derived accounts (records, vaults).
pub type Address = [u8; 32];

/// Balance / transfer amount in the smallest currency unit.
pub type Amount = u64;

/// Unix timestamp in seconds.
pub type Timestamp = i64;

/// Render an address as an abbreviated hex string for logs and errors.
///
/// Full 64-char hex is noise in log lines; eight leading chars are enough
/// to correlate against test fixtures and event payloads.
#[must_use]
pub fn render_address(addr: &Address) -> String {
    let full = hex::encode(addr);
    format!("{}..", &full[..8])
}
