//! The calculation core: pure functions that turn raw product parameters
//! into decision-relevant numbers. No I/O, no shared state.

pub mod assumptions;
pub mod credit_cost;
pub mod real_yield;

pub use assumptions::Assumptions;
pub use credit_cost::{credit_cost, CreditCost, CreditOutcome};
pub use real_yield::{real_yield, RealYield};
