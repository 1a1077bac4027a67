//! # Deterministic Address Derivation
//!
//! Pure mapping from a domain tag plus key fields to a stable 32-byte
//! address. Identical inputs always yield identical addresses; distinct
//! `(sender, sequence)` pairs never collide over the used keyspace.
//!
//! ## Derivation Scheme
//!
//! ```text
//! program_state   = Keccak256("remit:program_state")
//! escrow_authority = Keccak256("remit:escrow_authority")
//! transfer_record = Keccak256("remit:transfer" ‖ sender ‖ sequence_be)
//! escrow_vault    = Keccak256("remit:vault" ‖ transfer_record)
//! ```
//!
//! All inputs are fixed-width (tags are distinct string literals, sender
//! is 32 bytes, sequence is 8-byte big-endian), so the preimage encoding
//! is unambiguous and collisions reduce to Keccak collisions.

use sha3::{Digest, Keccak256};

use crate::entities::Address;

/// Domain tag for the singleton program state account.
const PROGRAM_STATE_TAG: &[u8] = b"remit:program_state";

/// Domain tag for the escrow authority pseudo-identity.
const ESCROW_AUTHORITY_TAG: &[u8] = b"remit:escrow_authority";

/// Domain tag for transfer record accounts.
const TRANSFER_RECORD_TAG: &[u8] = b"remit:transfer";

/// Domain tag for escrow vault accounts.
const ESCROW_VAULT_TAG: &[u8] = b"remit:vault";

fn derive(parts: &[&[u8]]) -> Address {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Address of the singleton program state account.
#[must_use]
pub fn program_state_address() -> Address {
    derive(&[PROGRAM_STATE_TAG])
}

/// Address of the escrow authority.
///
/// This identity never signs anything; it exists so vault custody has a
/// stable owner distinct from every external identity.
#[must_use]
pub fn escrow_authority_address() -> Address {
    derive(&[ESCROW_AUTHORITY_TAG])
}

/// Address of the transfer record for `sender`'s `sequence`-th transfer.
///
/// The sequence number is the global transfer counter at creation time,
/// so repeated sends from one sender still land on distinct addresses.
#[must_use]
pub fn transfer_record_address(sender: &Address, sequence: u64) -> Address {
    derive(&[TRANSFER_RECORD_TAG, sender, &sequence.to_be_bytes()])
}

/// Address of the escrow vault bound to a transfer record.
#[must_use]
pub fn escrow_vault_address(record: &Address) -> Address {
    derive(&[ESCROW_VAULT_TAG, record])
}
