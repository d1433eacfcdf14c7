use crate::{analysis::Assumptions, catalog::CreditCard};

/// Floating-point residuals below this are treated as fully paid.
const PAYOFF_TOLERANCE: f64 = 0.01;

/// How the amortization simulation ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CreditOutcome {
    /// The debt was retired within the horizon.
    PaidOff,
    /// The payment never got ahead of the accruing interest; the simulation
    /// stopped at the horizon with debt still outstanding.
    HorizonExceeded { remaining: f64 },
}

/// Aggregate cost of carrying a debt on a credit product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditCost {
    /// Interest plus pro-rated annual fee, minus cashback. Negative means
    /// the cashback outweighs the cost.
    pub net_cost: f64,
    /// Months simulated until payoff (or until the horizon).
    pub months: u32,
    /// `net_cost` as a percentage of the original debt.
    pub cost_percent: f64,
    /// The payment actually simulated, after the minimum-payment floor.
    pub effective_payment: f64,
    pub total_interest: f64,
    pub cashback_benefit: f64,
    pub outcome: CreditOutcome,
}

/// Simulates paying off `debt` on the given card with a fixed monthly
/// payment and returns the whole-horizon aggregate cost.
///
/// Payments below the issuer minimum (`debt * minimum_payment_rate`) are
/// silently raised to it before the simulation starts. Cashback is earned
/// once, against the original principal.
///
/// `debt` must be positive; callers reject zero or negative amounts before
/// invoking this.
pub fn credit_cost(
    card: &CreditCard,
    debt: f64,
    monthly_payment: f64,
    assumptions: &Assumptions,
) -> CreditCost {
    let minimum_payment = debt * assumptions.minimum_payment_rate;
    let payment = monthly_payment.max(minimum_payment);

    let monthly_rate = card.interest_rate / 12.0;

    let mut remaining = debt;
    let mut months = 0u32;
    let mut total_interest = 0.0;

    while remaining > 0.0 && months < assumptions.horizon_months {
        let interest = remaining * monthly_rate;
        total_interest += interest;

        // Never pay more than what is owed.
        let applied = payment.min(remaining + interest);
        remaining = remaining + interest - applied;
        months += 1;

        if remaining < PAYOFF_TOLERANCE {
            remaining = 0.0;
        }
    }

    let fee_for_period = card.annual_fee * f64::from(months) / 12.0;
    let total_cost = total_interest + fee_for_period;
    let cashback_benefit = debt * card.cashback_rate;
    let net_cost = total_cost - cashback_benefit;

    let outcome = if remaining > 0.0 {
        CreditOutcome::HorizonExceeded { remaining }
    } else {
        CreditOutcome::PaidOff
    };

    CreditCost {
        net_cost,
        months,
        cost_percent: net_cost / debt * 100.0,
        effective_payment: payment,
        total_interest,
        cashback_benefit,
        outcome,
    }
}
