// ⚠️ Error types for the banking domain
//
// The domain itself has exactly one failure: a debit that would take the
// balance below zero. The other variants belong to the boundary (parsing
// amounts, looking accounts up by owner or position).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Raised by `Account::debit`, propagated unchanged by `Bank::transfer`
    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

pub type Result<T> = std::result::Result<T, BankError>;
