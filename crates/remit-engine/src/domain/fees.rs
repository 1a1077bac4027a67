//! # Fee Math
//!
//! Basis-point fee computation: `fee = floor(amount * fee_bps / 10000)`.

use remit_types::Amount;

/// Compute the fee for a transfer amount at a basis-point rate.
///
/// The multiply runs in u128, so `u64::MAX * 10000` cannot overflow, and
/// the floored result is at most `amount`, so the narrowing back to u64 is
/// lossless.
#[must_use]
pub fn calculate_fee(amount: Amount, fee_bps: u16) -> Amount {
    let fee = u128::from(amount) * u128::from(fee_bps) / 10_000;
    fee as Amount
}
