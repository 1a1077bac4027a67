//! # In-Memory Balance Ledger
//!
//! `RwLock<HashMap>` ledger. Each mutating call takes the write lock once
//! and applies its full mutation under it, which gives every commit the
//! required single-writer atomicity. A persistent deployment would put a
//! transactional store behind the same port.

use crate::domain::LedgerError;
use crate::ports::BalanceLedger;
use remit_types::{Address, Amount};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory implementation of [`BalanceLedger`].
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Address, Amount>>,
}

impl InMemoryLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Ledger pre-funded with the given balances.
    #[must_use]
    pub fn with_balances(seed: impl IntoIterator<Item = (Address, Amount)>) -> Self {
        Self {
            balances: RwLock::new(seed.into_iter().collect()),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceLedger for InMemoryLedger {
    fn balance(&self, account: &Address) -> Result<Amount, LedgerError> {
        let balances = self
            .balances
            .read()
            .map_err(|_| LedgerError::LockPoisoned)?;
        Ok(balances.get(account).copied().unwrap_or(0))
    }

    fn credit(&self, account: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| LedgerError::LockPoisoned)?;
        let balance = balances.entry(*account).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(())
    }

    fn debit(&self, account: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| LedgerError::LockPoisoned)?;
        let available = balances.get(account).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        balances.insert(*account, available - amount);
        Ok(())
    }

    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| LedgerError::LockPoisoned)?;

        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        let to_balance = balances.get(to).copied().unwrap_or(0);
        let to_after = to_balance
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        balances.insert(*from, available - amount);
        balances.insert(*to, to_after);
        Ok(())
    }

    fn disburse(&self, from: &Address, legs: &[(Address, Amount)]) -> Result<(), LedgerError> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| LedgerError::LockPoisoned)?;

        let mut total: Amount = 0;
        for (_, amount) in legs {
            total = total
                .checked_add(*amount)
                .ok_or(LedgerError::ArithmeticOverflow)?;
        }

        let available = balances.get(from).copied().unwrap_or(0);
        if available < total {
            return Err(LedgerError::InsufficientFunds {
                required: total,
                available,
            });
        }

        // Stage every post-balance before touching the map, folding repeated
        // targets (and `from` itself, if it appears as a leg) cumulatively so
        // overflow is caught across legs, not per leg.
        let mut staged: HashMap<Address, Amount> = HashMap::new();
        staged.insert(*from, available - total);
        for (to, amount) in legs {
            let current = match staged.get(to) {
                Some(balance) => *balance,
                None => balances.get(to).copied().unwrap_or(0),
            };
            let next = current
                .checked_add(*amount)
                .ok_or(LedgerError::ArithmeticOverflow)?;
            staged.insert(*to, next);
        }

        for (account, balance) in staged {
            balances.insert(account, balance);
        }
        Ok(())
    }
}
