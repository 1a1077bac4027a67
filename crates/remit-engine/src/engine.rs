//! # Transfer Engine
//!
//! The instruction dispatcher: validates preconditions per operation and
//! commits each one as a single all-or-nothing unit.
//!
//! ## Commit Discipline
//!
//! Every operation follows the same shape:
//!
//! 1. validate arguments (no locks held)
//! 2. acquire the locks the operation needs, in the global order: state
//!    lock, then record map, then record mutex
//! 3. run every remaining check and precompute every new value with
//!    checked arithmetic
//! 4. perform the single fallible ledger commit
//! 5. apply the in-memory commits, which can no longer fail
//! 6. release locks, then publish the event (fire-and-forget)
//!
//! Steps 1-4 can abort; nothing before step 5 has mutated anything, so an
//! abort always leaves the engine exactly as it was.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use remit_bus::{EventSink, TransferEvent};
use remit_types::{
    escrow_vault_address, render_address, transfer_record_address, Address, Amount,
};
use tracing::{debug, info};

use crate::domain::{
    calculate_fee, EngineError, ProgramState, TransferRecord, TransferStatus, MAX_FEE_BPS,
    MAX_MEMO_CHARS,
};
use crate::ports::{BalanceLedger, Clock};

type RecordCell = Arc<Mutex<TransferRecord>>;

/// The escrow transfer core.
///
/// Owns the program state singleton and all transfer records; delegates
/// balance custody to the [`BalanceLedger`] port and notification to the
/// event sink. Cloneable handles are not provided; share it via `Arc`.
pub struct TransferEngine {
    ledger: Arc<dyn BalanceLedger>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
    /// Program state singleton. `None` until `initialize`.
    state: RwLock<Option<ProgramState>>,
    /// Transfer records by derived address. Each record has its own mutex
    /// so settlement attempts on one record never interleave.
    records: RwLock<HashMap<Address, RecordCell>>,
}

impl TransferEngine {
    /// Build an engine over the given ports.
    pub fn new(
        ledger: Arc<dyn BalanceLedger>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            ledger,
            clock,
            sink,
            state: RwLock::new(None),
            records: RwLock::new(HashMap::new()),
        }
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Create the program state singleton.
    ///
    /// # Errors
    ///
    /// - `AlreadyInitialized` if called twice; the first configuration wins
    /// - `InvalidFeePercentage` unless `fee_bps <= 10000`
    pub fn initialize(&self, admin: Address, fee_bps: u16) -> Result<ProgramState, EngineError> {
        if fee_bps > MAX_FEE_BPS {
            return Err(EngineError::InvalidFeePercentage { bps: fee_bps });
        }

        let mut state = self.state.write().map_err(|_| EngineError::LockPoisoned)?;
        if state.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }

        let created = ProgramState::new(admin, fee_bps);
        *state = Some(created.clone());
        drop(state);

        info!(
            admin = %render_address(&admin),
            fee_bps,
            "Program state initialized"
        );
        self.sink
            .publish(TransferEvent::ProgramInitialized { admin, fee_bps });
        Ok(created)
    }

    /// Lock `amount` from `sender` into a fresh escrow vault for
    /// `recipient` to claim.
    ///
    /// The record and vault addresses are derived from the current global
    /// transfer counter, which this operation reserves and increments under
    /// the state lock. The fee rate is snapshotted into the record so later
    /// fee changes never touch transfers already in flight.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` when `amount == 0`
    /// - `InvalidMemo` when the memo exceeds 200 characters
    /// - `NotInitialized` before `initialize`
    /// - `InsufficientFunds` when the sender's balance is short
    pub fn send_transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        memo: Option<String>,
    ) -> Result<TransferRecord, EngineError> {
        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        if let Some(text) = &memo {
            let len = text.chars().count();
            if len > MAX_MEMO_CHARS {
                return Err(EngineError::InvalidMemo { len });
            }
        }

        // State lock serializes sequence reservation across all senders.
        let mut state = self.state.write().map_err(|_| EngineError::LockPoisoned)?;
        let state = state.as_mut().ok_or(EngineError::NotInitialized)?;

        let sequence = state.total_transfers;
        let next_total = sequence
            .checked_add(1)
            .ok_or(EngineError::ArithmeticOverflow)?;
        let record_address = transfer_record_address(&sender, sequence);
        let vault = escrow_vault_address(&record_address);
        let created_at = self.clock.now();

        // Take the map lock before the ledger commit so the only fallible
        // step after funds move is nothing at all.
        let mut records = self.records.write().map_err(|_| EngineError::LockPoisoned)?;

        self.ledger.transfer(&sender, &vault, amount)?;

        let record = TransferRecord {
            address: record_address,
            sender,
            recipient,
            amount,
            memo,
            fee_bps: state.fee_bps,
            sequence,
            status: TransferStatus::Pending,
            created_at,
            completed_at: None,
        };
        records.insert(record_address, Arc::new(Mutex::new(record.clone())));
        state.total_transfers = next_total;
        drop(records);

        debug!(
            record = %render_address(&record_address),
            sender = %render_address(&sender),
            amount,
            sequence,
            "Transfer created, funds locked in escrow"
        );
        self.sink.publish(TransferEvent::TransferCreated {
            record: record_address,
            vault,
            sender,
            recipient,
            amount,
            sequence,
            created_at,
        });
        Ok(record)
    }

    /// Claim a pending transfer as its recipient.
    ///
    /// Pays `amount - fee` to the recipient and the fee to the admin in
    /// one atomic disbursement, drains the vault to zero, marks the record
    /// Completed, and adds the gross amount to the global volume counter.
    ///
    /// # Errors
    ///
    /// - `NotInitialized` before `initialize` has run
    /// - `TransferNotFound` for unknown record addresses
    /// - `InvalidState` unless the record is Pending
    /// - `UnauthorizedReceipt` unless `caller` is the recipient; the
    ///   record stays Pending and nothing moves
    pub fn receive_transfer(
        &self,
        caller: Address,
        record_address: Address,
    ) -> Result<TransferRecord, EngineError> {
        // Lock order is state, then record map, then record mutex — the
        // same order every code path uses.
        let mut state = self.state.write().map_err(|_| EngineError::LockPoisoned)?;
        let state = state.as_mut().ok_or(EngineError::NotInitialized)?;

        let cell = self.record_cell(&record_address)?;
        let mut record = cell.lock().map_err(|_| EngineError::LockPoisoned)?;

        if !record.is_pending() {
            return Err(EngineError::InvalidState {
                status: record.status,
            });
        }
        if caller != record.recipient {
            return Err(EngineError::UnauthorizedReceipt);
        }

        let fee = calculate_fee(record.amount, record.fee_bps);
        let net = record.amount - fee;
        let vault = escrow_vault_address(&record.address);
        let completed_at = self.clock.now();

        let new_volume = state
            .total_volume
            .checked_add(record.amount)
            .ok_or(EngineError::ArithmeticOverflow)?;

        let mut legs = vec![(record.recipient, net)];
        if fee > 0 {
            legs.push((state.admin, fee));
        }
        self.ledger.disburse(&vault, &legs)?;

        record.complete(completed_at);
        state.total_volume = new_volume;
        let completed = record.clone();
        drop(record);

        debug!(
            record = %render_address(&record_address),
            net,
            fee,
            "Transfer completed, escrow released"
        );
        self.sink.publish(TransferEvent::TransferCompleted {
            record: record_address,
            recipient: completed.recipient,
            amount: completed.amount,
            fee,
            completed_at,
        });
        Ok(completed)
    }

    /// Cancel a pending transfer as its sender, refunding the full amount
    /// fee-free.
    ///
    /// The record keeps no terminal timestamp on this path; the published
    /// `TransferCancelled` event carries the cancellation time.
    ///
    /// # Errors
    ///
    /// - `NotInitialized` before `initialize` has run
    /// - `TransferNotFound` for unknown record addresses
    /// - `InvalidState` unless the record is Pending
    /// - `UnauthorizedCancellation` unless `caller` is the sender; the
    ///   record stays Pending and nothing moves
    pub fn cancel_transfer(
        &self,
        caller: Address,
        record_address: Address,
    ) -> Result<TransferRecord, EngineError> {
        if self
            .state
            .read()
            .map_err(|_| EngineError::LockPoisoned)?
            .is_none()
        {
            return Err(EngineError::NotInitialized);
        }

        let cell = self.record_cell(&record_address)?;
        let mut record = cell.lock().map_err(|_| EngineError::LockPoisoned)?;

        if !record.is_pending() {
            return Err(EngineError::InvalidState {
                status: record.status,
            });
        }
        if caller != record.sender {
            return Err(EngineError::UnauthorizedCancellation);
        }

        let vault = escrow_vault_address(&record.address);
        let cancelled_at = self.clock.now();

        self.ledger.transfer(&vault, &record.sender, record.amount)?;

        record.cancel();
        let cancelled = record.clone();
        drop(record);

        debug!(
            record = %render_address(&record_address),
            amount = cancelled.amount,
            "Transfer cancelled, escrow refunded"
        );
        self.sink.publish(TransferEvent::TransferCancelled {
            record: record_address,
            sender: cancelled.sender,
            amount: cancelled.amount,
            cancelled_at,
        });
        Ok(cancelled)
    }

    // =========================================================================
    // READ SURFACE
    // =========================================================================

    /// Current program state, if initialized.
    pub fn program_state(&self) -> Result<Option<ProgramState>, EngineError> {
        let state = self.state.read().map_err(|_| EngineError::LockPoisoned)?;
        Ok(state.clone())
    }

    /// Look up one transfer record by address.
    pub fn transfer(&self, record_address: &Address) -> Result<Option<TransferRecord>, EngineError> {
        let records = self.records.read().map_err(|_| EngineError::LockPoisoned)?;
        let Some(cell) = records.get(record_address) else {
            return Ok(None);
        };
        let record = cell.lock().map_err(|_| EngineError::LockPoisoned)?;
        Ok(Some(record.clone()))
    }

    /// All transfers in which `identity` is the sender or the recipient,
    /// oldest first.
    pub fn transfers_for(&self, identity: &Address) -> Result<Vec<TransferRecord>, EngineError> {
        let records = self.records.read().map_err(|_| EngineError::LockPoisoned)?;
        let mut matched = Vec::new();
        for cell in records.values() {
            let record = cell.lock().map_err(|_| EngineError::LockPoisoned)?;
            if record.sender == *identity || record.recipient == *identity {
                matched.push(record.clone());
            }
        }
        drop(records);
        matched.sort_by_key(|r| r.sequence);
        Ok(matched)
    }

    /// Balance currently held by a record's escrow vault.
    pub fn vault_balance(&self, record_address: &Address) -> Result<Amount, EngineError> {
        Ok(self.ledger.balance(&escrow_vault_address(record_address))?)
    }

    fn record_cell(&self, record_address: &Address) -> Result<RecordCell, EngineError> {
        let records = self.records.read().map_err(|_| EngineError::LockPoisoned)?;
        records
            .get(record_address)
            .cloned()
            .ok_or_else(|| EngineError::TransferNotFound {
                address: render_address(record_address),
            })
    }
}
