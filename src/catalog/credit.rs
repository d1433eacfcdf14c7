use serde::{Deserialize, Serialize};

/// A credit card product.
///
/// Rates are fractional (0.36 means 36%). `cat` is the disclosed all-in
/// annual cost rate, carried for comparison only — the cost simulation works
/// from `interest_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub name: String,
    pub bank: String,
    /// Nominal annual interest rate.
    pub interest_rate: f64,
    pub cat: f64,
    pub annual_fee: f64,
    pub credit_limit: f64,
    /// Cashback as a fraction of spend.
    pub cashback_rate: f64,
    /// Whether the issuer offers interest-free installment plans.
    pub interest_free_months: bool,
}

impl CreditCard {
    /// Creates a card with all financial parameters at zero.
    pub fn new(name: impl Into<String>, bank: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bank: bank.into(),
            interest_rate: 0.0,
            cat: 0.0,
            annual_fee: 0.0,
            credit_limit: 0.0,
            cashback_rate: 0.0,
            interest_free_months: false,
        }
    }
}
