// 🏦 Bank Entity - owns an ordered list of accounts, moves funds between two
//
// "Bank name is a VALUE (can change), BankId is IDENTITY (never changes)"
//
// - Accounts point back at their bank through a BankId handle, never a
//   pointer, so there is no ownership cycle
// - BankRegistry is the lookup table that turns a BankId back into a Bank
// - Transfer = debit source, then credit destination. No rollback: credit
//   cannot fail, and a failed debit commits nothing

use crate::entities::account::Account;
use crate::error::{BankError, Result};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

// ============================================================================
// BANK ID
// ============================================================================

/// Stable identity of a bank (UUID) - NEVER changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(Uuid);

impl BankId {
    pub fn new() -> Self {
        BankId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BankId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// BANK ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    id: BankId,

    /// Display name (e.g., "Banco De Chile")
    name: String,

    /// Insertion order preserved, duplicates allowed
    accounts: Vec<Account>,
}

impl Bank {
    /// Create a new bank with a fresh identity and no accounts
    pub fn new(name: impl Into<String>) -> Self {
        Bank {
            id: BankId::new(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }

    /// Replace the whole account list.
    ///
    /// Back-references of the new accounts are left as they are; only
    /// `add_account` establishes them.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Append an account and point its back-reference at this bank.
    ///
    /// Any previous back-reference is overwritten. No check is made for
    /// an account already being in this or another bank.
    pub fn add_account(&mut self, mut account: Account) {
        account.set_bank(Some(self.id));
        debug!(bank = %self.name, owner = %account.owner(), "account added");
        self.accounts.push(account);
    }

    /// Move `amount` from `source` to `destination`.
    ///
    /// Neither account has to belong to this bank. If the debit fails the
    /// error is returned unchanged and `destination` is never credited.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: &BigDecimal,
    ) -> Result<()> {
        source.debit(amount)?;
        destination.credit(amount);
        debug!(
            bank = %self.name,
            from = %source.owner(),
            to = %destination.owner(),
            %amount,
            "transfer"
        );
        Ok(())
    }

    /// Transfer between two accounts this bank holds, by position.
    ///
    /// Same debit-then-credit rule as `transfer`. When both positions are
    /// equal the account is debited and credited back, so the guard still
    /// applies but the balance ends where it started.
    pub fn transfer_between(
        &mut self,
        source: usize,
        destination: usize,
        amount: &BigDecimal,
    ) -> Result<()> {
        let len = self.accounts.len();
        for position in [source, destination] {
            if position >= len {
                return Err(BankError::AccountNotFound(format!("position {}", position)));
            }
        }

        if source == destination {
            let account = &mut self.accounts[source];
            account.debit(amount)?;
            account.credit(amount);
            return Ok(());
        }

        let (from, to) = if source < destination {
            let (left, right) = self.accounts.split_at_mut(destination);
            (&mut left[source], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(source);
            (&mut right[0], &mut left[destination])
        };

        from.debit(amount)?;
        to.credit(amount);
        debug!(bank = %self.name, from = %from.owner(), to = %to.owner(), %amount, "transfer");
        Ok(())
    }

    /// First account (insertion order) held by `owner`
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.owner() == owner)
    }

    /// Position of the first account held by `owner`
    pub fn position_of(&self, owner: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.owner() == owner)
    }

    pub fn contains_owner(&self, owner: &str) -> bool {
        self.accounts.iter().any(|acc| acc.owner() == owner)
    }

    /// Sum of all balances held by this bank
    pub fn total_balance(&self) -> BigDecimal {
        self.accounts.iter().map(|acc| acc.balance()).sum()
    }
}

// ============================================================================
// BANK REGISTRY
// ============================================================================

/// Lookup table from BankId to Bank
///
/// Owns the banks it holds. An account's back-reference is resolved here
/// with `bank_of`.
#[derive(Debug, Default)]
pub struct BankRegistry {
    banks: Vec<Bank>,
}

impl BankRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        BankRegistry { banks: Vec::new() }
    }

    /// Register a bank, returning its id
    pub fn register(&mut self, bank: Bank) -> BankId {
        let id = bank.id();
        self.banks.push(bank);
        id
    }

    pub fn find_by_id(&self, id: BankId) -> Option<&Bank> {
        self.banks.iter().find(|b| b.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: BankId) -> Option<&mut Bank> {
        self.banks.iter_mut().find(|b| b.id() == id)
    }

    /// Find bank by name (exact match, case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Bank> {
        let lower_name = name.to_lowercase();
        self.banks.iter().find(|b| b.name().to_lowercase() == lower_name)
    }

    /// Resolve an account's back-reference
    pub fn bank_of(&self, account: &Account) -> Option<&Bank> {
        account.bank().and_then(|id| self.find_by_id(id))
    }

    pub fn all_banks(&self) -> &[Bank] {
        &self.banks
    }

    pub fn count(&self) -> usize {
        self.banks.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
