/// The tax/inflation/amortization regime the calculations run under.
///
/// Passed explicitly so scenario tests can vary a single assumption without
/// touching the core logic. `Default` carries the regime for Mexican retail
/// products.
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    /// ISR withheld on investment yield.
    pub tax_rate: f64,
    /// Estimated annual inflation.
    pub annual_inflation: f64,
    /// Issuer minimum payment as a fraction of the outstanding debt.
    pub minimum_payment_rate: f64,
    /// Amortization iteration ceiling. Guarantees termination even when the
    /// payment never covers the monthly interest.
    pub horizon_months: u32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            tax_rate: 0.20,
            annual_inflation: 0.042,
            minimum_payment_rate: 0.05,
            horizon_months: 1000,
        }
    }
}
