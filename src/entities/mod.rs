// Entity Models
//
// - Account: owner + exact decimal balance, guarded debit
// - Bank: owns the accounts, runs transfers
// - BankRegistry: resolves an account's BankId back-reference

pub mod account;
pub mod bank;

pub use account::Account;
pub use bank::{Bank, BankId, BankRegistry};
