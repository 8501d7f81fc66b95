use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product record as returned by the catalog collaborator.
///
/// Transient: fetched per request and never cached, so two requests may
/// observe different prices for the same product. Historical pricing lives
/// on the order items, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

impl ProductRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
