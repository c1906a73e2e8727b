// 📜 Scenario files - a bank, its opening accounts, and transfers to replay
//
// JSON shape:
// {
//   "bank": "Banco De Chile",
//   "accounts": [{ "owner": "kan doe", "balance": "2500" }],
//   "transfers": [{ "from": "Chulin Doe", "to": "kan doe", "amount": "500" }]
// }
//
// Transfers run in file order. A rejected transfer is recorded in the report
// and the run carries on with the next one.

use crate::entities::{Account, Bank};
use crate::error::{BankError, Result as BankResult};
use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub bank: String,
    #[serde(default)]
    pub accounts: Vec<OpeningAccount>,
    #[serde(default)]
    pub transfers: Vec<TransferRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningAccount {
    pub owner: String,
    pub balance: BigDecimal,
}

/// Accounts are named by owner; the first account with that owner is used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub from: String,
    pub to: String,
    pub amount: BigDecimal,
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceLine {
    pub owner: String,
    pub balance: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub bank: String,
    pub outcomes: Vec<TransferOutcome>,
    pub balances: Vec<BalanceLine>,
}

impl ScenarioReport {
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.applied).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.applied_count()
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} transfers applied, {} rejected, {} accounts",
            self.bank,
            self.applied_count(),
            self.rejected_count(),
            self.balances.len()
        )
    }
}

impl Scenario {
    /// Two accounts (2500 and 1000.232) and one transfer of `amount` from
    /// the second to the first
    pub fn reference(bank_name: &str, amount: BigDecimal) -> Self {
        Scenario {
            bank: bank_name.to_string(),
            accounts: vec![
                OpeningAccount {
                    owner: "kan doe".to_string(),
                    balance: BigDecimal::from(2500),
                },
                OpeningAccount {
                    owner: "Chulin Doe".to_string(),
                    balance: BigDecimal::new(1000232.into(), 3),
                },
            ],
            transfers: vec![TransferRequest {
                from: "Chulin Doe".to_string(),
                to: "kan doe".to_string(),
                amount,
            }],
        }
    }

    /// Build the bank with every opening account added in order
    pub fn build_bank(&self) -> Bank {
        let mut bank = Bank::new(self.bank.as_str());
        for opening in &self.accounts {
            bank.add_account(Account::new(opening.owner.as_str(), opening.balance.clone()));
        }
        bank
    }

    /// Replay every transfer against a freshly built bank
    pub fn run(&self) -> (Bank, ScenarioReport) {
        let mut bank = self.build_bank();
        let mut outcomes = Vec::with_capacity(self.transfers.len());

        for request in &self.transfers {
            let result = apply_transfer(&mut bank, request);
            if let Err(e) = &result {
                warn!(from = %request.from, to = %request.to, amount = %request.amount, error = %e, "transfer rejected");
            }
            outcomes.push(TransferOutcome {
                from: request.from.clone(),
                to: request.to.clone(),
                amount: request.amount.clone(),
                applied: result.is_ok(),
                error: result.err().map(|e| e.to_string()),
            });
        }

        let balances = bank
            .accounts()
            .iter()
            .map(|acc| BalanceLine {
                owner: acc.owner().to_string(),
                balance: acc.balance().clone(),
            })
            .collect();

        let report = ScenarioReport {
            bank: bank.name().to_string(),
            outcomes,
            balances,
        };
        info!("{}", report.summary());
        (bank, report)
    }
}

fn apply_transfer(bank: &mut Bank, request: &TransferRequest) -> BankResult<()> {
    let source = bank
        .position_of(&request.from)
        .ok_or_else(|| BankError::AccountNotFound(request.from.clone()))?;
    let destination = bank
        .position_of(&request.to)
        .ok_or_else(|| BankError::AccountNotFound(request.to.clone()))?;
    bank.transfer_between(source, destination, &request.amount)
}

/// Load scenario from JSON file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario: {}", path.display()))?;
    parse_scenario(&content).with_context(|| format!("Failed to parse scenario: {}", path.display()))
}

pub fn parse_scenario(json: &str) -> Result<Scenario> {
    let scenario: Scenario = serde_json::from_str(json)?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "bank": "Banco De Chile",
        "accounts": [
            { "owner": "kan doe", "balance": "2500" },
            { "owner": "Chulin Doe", "balance": "1000.232" }
        ],
        "transfers": [
            { "from": "Chulin Doe", "to": "kan doe", "amount": "500" },
            { "from": "Chulin Doe", "to": "kan doe", "amount": "1500" },
            { "from": "Nadie", "to": "kan doe", "amount": "1" },
            { "from": "kan doe", "to": "Chulin Doe", "amount": "0.768" }
        ]
    }"#;

    #[test]
    fn test_reference_scenario() {
        let (bank, report) = Scenario::reference("Banco De Chile", BigDecimal::from(500)).run();

        assert_eq!(bank.name(), "Banco De Chile");
        assert_eq!(report.applied_count(), 1);
        assert_eq!(report.balances[0].balance.to_plain_string(), "3000");
        assert_eq!(report.balances[1].balance.to_plain_string(), "500.232");
    }

    #[test]
    fn test_parse_and_run_scenario() {
        let scenario = parse_scenario(SAMPLE).unwrap();
        assert_eq!(scenario.accounts.len(), 2);
        assert_eq!(scenario.transfers.len(), 4);

        let (_, report) = scenario.run();

        assert_eq!(report.applied_count(), 2);
        assert_eq!(report.rejected_count(), 2);
        assert_eq!(report.outcomes[1].error.as_deref(), Some("Insufficient funds"));
        assert_eq!(
            report.outcomes[2].error.as_deref(),
            Some("Account not found: Nadie")
        );
        assert!(report.outcomes[3].applied);

        // 2500 + 500 - 0.768, 1000.232 - 500 + 0.768
        assert_eq!(report.balances[0].balance.to_plain_string(), "2999.232");
        assert_eq!(report.balances[1].balance.to_plain_string(), "501.000");
    }

    #[test]
    fn test_build_bank_sets_back_references() {
        let scenario = parse_scenario(SAMPLE).unwrap();
        let bank = scenario.build_bank();

        assert_eq!(bank.accounts().len(), 2);
        assert!(bank.accounts().iter().all(|acc| acc.bank() == Some(bank.id())));
    }

    #[test]
    fn test_scenario_without_transfers() {
        let scenario = parse_scenario(r#"{ "bank": "Vacio" }"#).unwrap();
        let (bank, report) = scenario.run();

        assert!(bank.accounts().is_empty());
        assert!(report.outcomes.is_empty());
        assert_eq!(report.summary(), "Vacio: 0 transfers applied, 0 rejected, 0 accounts");
    }

    #[test]
    fn test_parse_scenario_rejects_bad_amount() {
        let json = r#"{ "bank": "X", "accounts": [{ "owner": "a", "balance": "12,5" }] }"#;
        assert!(parse_scenario(json).is_err());
    }

    #[test]
    fn test_report_serializes_amounts_as_strings() {
        let (_, report) = Scenario::reference("Banco De Chile", BigDecimal::from(500)).run();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["balances"][1]["balance"], "500.232");
        assert_eq!(json["outcomes"][0]["applied"], true);
        assert!(json["outcomes"][0].get("error").is_none());
    }

    #[test]
    fn test_load_scenario_from_demo_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/transfer.json");
        let scenario = load_scenario(&path).unwrap();
        let (_, report) = scenario.run();

        assert_eq!(report.bank, "Banco De Chile");
        assert_eq!(report.applied_count(), 1);
        assert_eq!(report.outcomes[1].error.as_deref(), Some("Insufficient funds"));
        assert_eq!(report.balances[1].balance.to_plain_string(), "500.232");
    }

    #[test]
    fn test_load_scenario_missing_file() {
        let err = load_scenario(Path::new("/nonexistent/scenario.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read scenario"));
    }

    #[test]
    fn test_scenario_beyond_fixed_point_range() {
        let json = r#"{
            "bank": "Grande",
            "accounts": [
                { "owner": "a", "balance": "1" },
                { "owner": "b", "balance": "79228162514264337593543950335" }
            ],
            "transfers": [{ "from": "a", "to": "b", "amount": "1" }]
        }"#;
        let (_, report) = parse_scenario(json).unwrap().run();

        assert_eq!(report.applied_count(), 1);
        assert_eq!(report.balances[0].balance.to_plain_string(), "0");
        assert_eq!(
            report.balances[1].balance.to_plain_string(),
            "79228162514264337593543950336"
        );
    }
}
