use serde::{Deserialize, Serialize};

/// A catalog item, as attached to any e-commerce event
///
/// Transient value object: built by the caller right before a send and
/// never retained by the adapters.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID or SKU, unique within one event's item list
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub brand: Option<Vec<String>>,
    /// Category hierarchy, one entry per level, up to 5 levels
    #[serde(default)]
    pub category: Option<Vec<String>>,
    #[serde(default)]
    pub variant: Option<Vec<String>>,

    /// Unit price, in currency units
    #[serde(default)]
    pub price: Option<f64>,
    /// Discount subtracted from the unit price
    #[serde(default)]
    pub discount: Option<f64>,
    /// Taken as 1 where absent
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub coupon: Option<String>,
}
