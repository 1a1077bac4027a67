//! # Balance Ledger Port
//!
//! Durable account → balance mapping with atomic single-writer commits.
//! Escrow vaults are ordinary accounts in this ledger; their custody rule
//! (only engine logic may debit them) is enforced by the engine, which
//! never exposes a vault address as a debit source.

use crate::domain::LedgerError;
use remit_types::{Address, Amount};

/// Balance ledger abstraction.
///
/// Every method commits atomically: either the full mutation lands or the
/// ledger is untouched. `disburse` exists so multi-leg payouts (recipient
/// plus fee) settle as one unit.
pub trait BalanceLedger: Send + Sync {
    /// Current balance of an account (0 for unknown accounts).
    fn balance(&self, account: &Address) -> Result<Amount, LedgerError>;

    /// Add to an account's balance.
    fn credit(&self, account: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Remove from an account's balance.
    ///
    /// Fails with `InsufficientFunds` when the balance is short; the
    /// account is left untouched.
    fn debit(&self, account: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Move `amount` from one account to another, atomically.
    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Pay out several legs from one account, all-or-nothing.
    ///
    /// Fails with `InsufficientFunds` unless `from` covers the sum of all
    /// legs; on failure no leg is applied.
    fn disburse(&self, from: &Address, legs: &[(Address, Amount)]) -> Result<(), LedgerError>;
}
