use crate::events::product::Product;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The seven e-commerce event kinds understood by both schema adapters
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ViewItem,
    AddToCart,
    RemoveFromCart,
    BeginCheckout,
    AddPaymentInfo,
    AddShippingInfo,
    Purchase,
}

impl Action {
    /// The event name on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewItem => "view_item",
            Action::AddToCart => "add_to_cart",
            Action::RemoveFromCart => "remove_from_cart",
            Action::BeginCheckout => "begin_checkout",
            Action::AddPaymentInfo => "add_payment_info",
            Action::AddShippingInfo => "add_shipping_info",
            Action::Purchase => "purchase",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported when an event submission cannot be understood
#[derive(Error, Debug, Clone)]
pub enum EventError {
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl FromStr for Action {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view_item" => Ok(Action::ViewItem),
            "add_to_cart" => Ok(Action::AddToCart),
            "remove_from_cart" => Ok(Action::RemoveFromCart),
            "begin_checkout" => Ok(Action::BeginCheckout),
            "add_payment_info" => Ok(Action::AddPaymentInfo),
            "add_shipping_info" => Ok(Action::AddShippingInfo),
            "purchase" => Ok(Action::Purchase),
            other => Err(EventError::UnknownAction(other.to_string())),
        }
    }
}

/// One event's payload, shared by every action kind
///
/// Numeric optionals default to 0 at the point of use, in the adapters,
/// not here.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    pub affiliation: String,
    /// Carried for callers building events generically; the adapters stamp
    /// the currency they were configured with on outbound payloads
    pub currency: String,

    /// May be empty; order is preserved through mapping
    #[serde(default)]
    pub items: Vec<Product>,

    /// Transaction identifier, purchase only
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub shipping: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub coupon: Option<String>,

    /// Payment method or shipping tier, depending on the action
    #[serde(default)]
    pub option: Option<String>,
}

impl ActionData {
    /// An event payload around a set of items, everything else left unset
    pub fn with_items<S: Into<String>, C: Into<String>>(affiliation: S, currency: C, items: Vec<Product>) -> Self {
        Self {
            affiliation: affiliation.into(),
            currency: currency.into(),
            items,
            transaction_id: None,
            shipping: None,
            tax: None,
            total: None,
            coupon: None,
            option: None,
        }
    }
}
