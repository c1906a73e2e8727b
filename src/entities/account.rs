// 💳 Account Entity - owner + exact decimal balance
//
// "Bank owns the accounts, the account only remembers which bank"
//
// - Balance is a `BigDecimal`: unbounded, never rounded, never a float
// - Debit is guarded: the balance is never left negative by a debit
// - Credit is unguarded: a negative credit lowers the balance with no check
//   (known quirk, kept as-is)
// - `bank` is a non-owning handle (BankId), resolved through BankRegistry

use crate::entities::bank::BankId;
use crate::error::BankError;
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity
///
/// Values: owner, balance (both mutable)
/// Relationship: bank → Bank entity (set by `Bank::add_account`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account holder (e.g., "Chulin Doe")
    owner: String,

    /// Current balance, exact decimal
    balance: BigDecimal,

    /// Back-reference to the owning bank. Weak: lookup only, not ownership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank: Option<BankId>,
}

impl Account {
    /// Create a new account that belongs to no bank yet
    pub fn new(owner: impl Into<String>, balance: BigDecimal) -> Self {
        Account {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    pub fn set_balance(&mut self, balance: BigDecimal) {
        self.balance = balance;
    }

    /// Bank this account was last added to, if any
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub fn set_bank(&mut self, bank: Option<BankId>) {
        self.bank = bank;
    }

    /// Add `amount` to the balance. Always succeeds.
    ///
    /// The sign of `amount` is not checked: crediting a negative amount
    /// decreases the balance and bypasses the insufficient-funds guard.
    pub fn credit(&mut self, amount: &BigDecimal) {
        self.balance += amount;
        debug!(owner = %self.owner, %amount, balance = %self.balance, "credit");
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with `BankError::InsufficientFunds` when the result would be
    /// negative; the balance is left untouched in that case. A result of
    /// exactly zero is allowed.
    pub fn debit(&mut self, amount: &BigDecimal) -> Result<(), BankError> {
        let new_balance = &self.balance - amount;
        if new_balance < BigDecimal::zero() {
            warn!(owner = %self.owner, %amount, balance = %self.balance, "debit rejected");
            return Err(BankError::InsufficientFunds);
        }
        self.balance = new_balance;
        debug!(owner = %self.owner, %amount, balance = %self.balance, "debit");
        Ok(())
    }
}

fn scale(value: &BigDecimal) -> i64 {
    value.as_bigint_and_exponent().1
}

/// Value equality: same owner, same balance value and same balance scale.
///
/// 10.5 and 10.50 are different balances. The bank back-reference takes no
/// part in it.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.balance == other.balance
            && scale(&self.balance) == scale(&other.balance)
    }
}

impl Eq for Account {}

// ============================================================================
// TESTS
// ============================================================================
