// Bank Accounts - Core Library
// Exposes all modules for use in the CLI and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod money;
pub mod scenario;

// Re-export commonly used types
pub use config::Config;
pub use entities::{Account, Bank, BankId, BankRegistry};
pub use error::{BankError, Result};
pub use money::{format_amount, parse_amount};
pub use bigdecimal::BigDecimal;
pub use scenario::{
    load_scenario, parse_scenario,
    Scenario, ScenarioReport, TransferOutcome, TransferRequest, OpeningAccount, BalanceLine,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
