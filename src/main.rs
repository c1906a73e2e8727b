use anyhow::{bail, Result};
use bigdecimal::BigDecimal;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use bank_accounts::{format_amount, load_scenario, parse_amount, Config, Scenario, ScenarioReport};

const DEMO_AMOUNT: &str = "500";

#[derive(Debug)]
enum Command {
    /// Reference transfer of `amount` between the two demo accounts
    Demo { amount: BigDecimal },
    /// Replay a JSON scenario file
    Run { path: PathBuf },
}

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let args: Vec<String> = env::args().collect();
    let command = parse_command(&args)?;
    let report = execute(&command, &config)?;

    match command {
        Command::Demo { .. } => print_report(&report),
        Command::Run { .. } => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(bank_accounts::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// `args[0]` is the program name
fn parse_command(args: &[String]) -> Result<Command> {
    match args.get(1).map(String::as_str) {
        Some("run") => match args.get(2) {
            Some(path) => Ok(Command::Run { path: PathBuf::from(path) }),
            None => bail!("usage: bank-accounts run <scenario.json>"),
        },
        Some("demo") | None => {
            let text = args.get(2).map(String::as_str).unwrap_or(DEMO_AMOUNT);
            Ok(Command::Demo { amount: parse_amount(text)? })
        }
        Some(other) => bail!("unknown command: {} (expected `demo [amount]` or `run <file>`)", other),
    }
}

fn execute(command: &Command, config: &Config) -> Result<ScenarioReport> {
    match command {
        Command::Demo { amount } => run_demo(config, amount),
        Command::Run { path } => run_scenario(path),
    }
}

fn run_demo(config: &Config, amount: &BigDecimal) -> Result<ScenarioReport> {
    tracing::info!(version = bank_accounts::VERSION, bank = %config.bank_name, %amount, "running demo transfer");

    let (_, report) = Scenario::reference(&config.bank_name, amount.clone()).run();
    Ok(report)
}

fn run_scenario(path: &Path) -> Result<ScenarioReport> {
    let scenario = load_scenario(path)?;
    tracing::info!(path = %path.display(), transfers = scenario.transfers.len(), "running scenario");

    let (_, report) = scenario.run();
    Ok(report)
}

fn print_report(report: &ScenarioReport) {
    println!("🏦 {}", report.bank);
    for outcome in &report.outcomes {
        let status = match &outcome.error {
            None => "✓".to_string(),
            Some(e) => format!("✗ {}", e),
        };
        println!(
            "  {} → {}  {}  {}",
            outcome.from,
            outcome.to,
            format_amount(&outcome.amount),
            status
        );
    }
    for line in &report.balances {
        println!("  {:<20} {}", line.owner, format_amount(&line.balance));
    }
    println!("{}", report.summary());
}
