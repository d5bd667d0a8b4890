use serde::{Deserialize, Serialize};

// Prices are whole currency units; a fractional price in the catalog
// document is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub price: i64,
    pub category: String,
    pub popular: bool,
}
