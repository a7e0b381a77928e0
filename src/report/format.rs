//! Locale-aware numeric and currency formatting.
//!
//! Chart and table layers receive display strings alongside the raw
//! statistics. The default locale follows pt-BR conventions: `.` for
//! thousands, `,` for decimals, `R$` for currency.

use serde::{Deserialize, Serialize};

use crate::aggregate::Stat;

/// Separators, currency symbol and not-available marker for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Thousands separator
    pub thousands_separator: char,
    /// Decimal separator
    pub decimal_separator: char,
    /// Currency symbol, prefixed with a space to monetary values
    pub currency_symbol: String,
    /// Marker rendered when a statistic is not available
    pub not_available: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            thousands_separator: '.',
            decimal_separator: ',',
            currency_symbol: "R$".to_string(),
            not_available: "n/d".to_string(),
        }
    }
}

impl Locale {
    /// Format a non-negative integer with thousands separators.
    #[must_use]
    pub fn format_count(&self, value: usize) -> String {
        group_digits(&value.to_string(), self.thousands_separator)
    }

    /// Format a number with the given number of decimal places.
    #[must_use]
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        let formatted = format!("{value:.decimals$}");
        let (sign, unsigned) = match formatted.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", formatted.as_str()),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };
        let mut out = String::from(sign);
        out.push_str(&group_digits(integer, self.thousands_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    /// Format a monetary value with the currency symbol, two decimals.
    #[must_use]
    pub fn format_currency(&self, value: f64) -> String {
        format!("{} {}", self.currency_symbol, self.format_number(value, 2))
    }

    /// Format a statistic, rendering the not-available marker when the
    /// statistic had no contributing records.
    #[must_use]
    pub fn format_stat(&self, stat: Stat, decimals: usize) -> String {
        match stat {
            Stat::Value(value) => self.format_number(value, decimals),
            Stat::NotAvailable => self.not_available.clone(),
        }
    }

    /// Format a monetary statistic, not-available marker included.
    #[must_use]
    pub fn format_currency_stat(&self, stat: Stat) -> String {
        match stat {
            Stat::Value(value) => self.format_currency(value),
            Stat::NotAvailable => self.not_available.clone(),
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
