//! # Terminal Configuration
//!
//! Store-level settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DUKA_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup; the till never mutates it.

use duka_core::{TaxRate, CURRENCY_CODE, VAT_RATE_BPS};

/// Terminal configuration.
///
/// ## Environment Variables
/// - `DUKA_STORE_NAME`: Store name shown in the banner
/// - `DUKA_TAX_RATE`: Tax rate as a percentage (e.g. "16")
/// - `DUKA_CURRENCY`: Currency label for amounts (default "KES")
/// - `DUKA_USERNAME` / `DUKA_PASSWORD`: Skip the login prompt
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Store name (banner and receipts).
    pub store_name: String,

    /// Currency label prefixed to every amount.
    pub currency_symbol: String,

    /// Tax rate applied to new carts.
    pub tax_rate: TaxRate,

    /// Credentials for non-interactive sign-in.
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "Duka Supermarket".to_string(),
            currency_symbol: CURRENCY_CODE.to_string(),
            tax_rate: TaxRate::from_bps(VAT_RATE_BPS),
            username: None,
            password: None,
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from environment variables and defaults.
    pub fn from_env() -> Self {
        let mut config = TerminalConfig::default();

        if let Ok(store_name) = std::env::var("DUKA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(currency) = std::env::var("DUKA_CURRENCY") {
            config.currency_symbol = currency;
        }

        if let Ok(rate_str) = std::env::var("DUKA_TAX_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.tax_rate = TaxRate::from_percentage(rate);
            }
        }

        config.username = std::env::var("DUKA_USERNAME").ok();
        config.password = std::env::var("DUKA_PASSWORD").ok();

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = TerminalConfig::default();
    /// assert_eq!(config.format_currency(1234), "KES 12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        format!(
            "{} {}{}.{:02}",
            self.currency_symbol,
            sign,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TerminalConfig::default();
        assert_eq!(config.store_name, "Duka Supermarket");
        assert_eq!(config.currency_symbol, "KES");
        assert_eq!(config.tax_rate.bps(), 1600);
        assert!(config.username.is_none());
    }

    #[test]
    fn test_format_currency() {
        let config = TerminalConfig::default();
        assert_eq!(config.format_currency(29000), "KES 290.00");
        assert_eq!(config.format_currency(1), "KES 0.01");
        assert_eq!(config.format_currency(0), "KES 0.00");
        assert_eq!(config.format_currency(-550), "KES -5.50");
    }

    #[test]
    fn test_format_currency_other_symbol() {
        let config = TerminalConfig {
            currency_symbol: "KSh".to_string(),
            ..TerminalConfig::default()
        };
        assert_eq!(config.format_currency(1000), "KSh 10.00");
    }
}
