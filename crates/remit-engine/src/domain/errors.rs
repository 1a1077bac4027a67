//! # Engine and Ledger Errors
//!
//! Every error aborts the whole operation with zero side effects. There is
//! no partial-failure mode: the only recoverable outcome is "nothing
//! changed, retry or report". Retry policy belongs to the caller.

use super::entities::TransferStatus;
use remit_types::Amount;
use thiserror::Error;

/// Errors from the balance ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Amount, available: Amount },

    #[error("Arithmetic overflow in balance update")]
    ArithmeticOverflow,

    #[error("Ledger lock poisoned")]
    LockPoisoned,
}

/// Errors from the four engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Transfer amount must be greater than zero")]
    InvalidAmount,

    #[error("Memo too long: {len} characters (max {max})", max = super::MAX_MEMO_CHARS)]
    InvalidMemo { len: usize },

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Amount, available: Amount },

    #[error("Program state already initialized")]
    AlreadyInitialized,

    #[error("Program state not initialized")]
    NotInitialized,

    #[error("Invalid fee percentage: {bps} basis points (max {max})", max = super::MAX_FEE_BPS)]
    InvalidFeePercentage { bps: u16 },

    #[error("Transfer is not pending: status is {status}")]
    InvalidState { status: TransferStatus },

    #[error("Only the recipient can receive this transfer")]
    UnauthorizedReceipt,

    #[error("Only the sender can cancel this transfer")]
    UnauthorizedCancellation,

    #[error("Transfer record not found: {address}")]
    TransferNotFound { address: String },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Engine lock poisoned")]
    LockPoisoned,
}

impl From<LedgerError> for EngineError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds {
                required,
                available,
            } => Self::InsufficientFunds {
                required,
                available,
            },
            LedgerError::ArithmeticOverflow => Self::ArithmeticOverflow,
            LedgerError::LockPoisoned => Self::LockPoisoned,
        }
    }
}
