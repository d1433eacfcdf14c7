use serde::{Deserialize, Serialize};

/// A yield-bearing debit account product.
///
/// Rates are fractional (0.05 means 5%). Values are stored exactly as the
/// user entered them; there is no range validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebitCard {
    pub name: String,
    pub bank: String,
    /// Nominal annual yield rate.
    pub yield_rate: f64,
    /// Balance required for the yield to accrue at all.
    pub minimum_balance: f64,
    pub annual_fee: f64,
    /// Monthly inactivity fee. Recorded for reference, not used by the
    /// yield calculation.
    pub inactivity_fee: f64,
}

impl DebitCard {
    /// Creates a card with all financial parameters at zero.
    pub fn new(name: impl Into<String>, bank: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bank: bank.into(),
            yield_rate: 0.0,
            minimum_balance: 0.0,
            annual_fee: 0.0,
            inactivity_fee: 0.0,
        }
    }
}
