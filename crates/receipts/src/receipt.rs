use serde::{Deserialize, Serialize};

use tally_core::ValueObject;

/// One purchased product entry within a receipt.
///
/// `price` is kept in its submitted textual form; the validator decides whether
/// it is a usable amount.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: String,
}

impl LineItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

impl ValueObject for LineItem {}

/// A submitted purchase receipt, exactly as the client sent it.
///
/// Absent text fields deserialize as empty strings and an absent or `null`
/// `items` as `None`, so that incomplete receipts reach the validator rather
/// than failing JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock
    #[serde(default)]
    pub purchase_time: String,
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
    #[serde(default)]
    pub total: String,
}

impl Receipt {
    /// Line items, treating an absent list as empty.
    pub fn line_items(&self) -> &[LineItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

impl ValueObject for Receipt {}
