use std::env;

pub const DEFAULT_BANK_NAME: &str = "Banco De Chile";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the bank used by the `demo` command
    pub bank_name: String,
    /// `tracing` filter directive (e.g. "info", "bank_accounts=debug")
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            bank_name: env::var("BANK_NAME").unwrap_or_else(|_| DEFAULT_BANK_NAME.to_string()),
            log_filter: env::var("BANK_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_name: DEFAULT_BANK_NAME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
