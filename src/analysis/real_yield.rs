use crate::{analysis::Assumptions, catalog::DebitCard};

/// Outcome of holding a balance on a debit product for one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealYield {
    /// Yield after tax, inflation, and the annual fee. Negative means the
    /// money loses purchasing power.
    pub amount: f64,
    /// `amount` as a percentage of the starting balance.
    pub percent: f64,
    /// Balance projected one year out.
    pub projected_balance: f64,
}

impl RealYield {
    /// Whether the balance gains real value over the year.
    pub fn gains_value(&self) -> bool {
        self.amount > 0.0
    }
}

/// Computes the after-tax, after-inflation annual yield of holding `balance`
/// on the given debit product.
///
/// When the balance sits below the product's minimum, no yield accrues but
/// the annual fee is still charged; that is issuer policy, not an error.
///
/// `balance` must be positive for the percentage to be meaningful — the
/// division is not guarded here.
pub fn real_yield(card: &DebitCard, balance: f64, assumptions: &Assumptions) -> RealYield {
    if balance < card.minimum_balance {
        return RealYield {
            amount: 0.0,
            percent: 0.0,
            projected_balance: balance - card.annual_fee,
        };
    }

    let gross = balance * card.yield_rate;
    let tax = gross * assumptions.tax_rate;
    let net = gross - tax;
    let inflation_erosion = balance * assumptions.annual_inflation;
    let amount = net - inflation_erosion - card.annual_fee;

    RealYield {
        amount,
        percent: amount / balance * 100.0,
        projected_balance: balance + amount,
    }
}
