//! Product records and the persisted card catalog.

pub mod credit;
pub mod debit;

use serde::{Deserialize, Serialize};

pub use credit::CreditCard;
pub use debit::DebitCard;

/// Every card the user has registered, grouped by kind.
///
/// The JSON file keeps the historical top-level keys `debito` and `credito`
/// so catalogs written by earlier versions of the tool keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "debito", default)]
    pub debit: Vec<DebitCard>,
    #[serde(rename = "credito", default)]
    pub credit: Vec<CreditCard>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a debit card, preserving insertion order.
    pub fn add_debit(&mut self, card: DebitCard) {
        self.debit.push(card);
    }

    /// Appends a credit card, preserving insertion order.
    pub fn add_credit(&mut self, card: CreditCard) {
        self.credit.push(card);
    }

    pub fn is_empty(&self) -> bool {
        self.debit.is_empty() && self.credit.is_empty()
    }
}
