use crate::config::Settings;
use crate::events::action::{Action, ActionData};
use crate::events::product::Product;
use crate::gtag::{GtagFunction, GtagHandle};
use crate::providers::Provider;

use serde::Serialize;
use serde_json;
use std::fmt::{Debug, Display};
use log;

/// A product as the legacy schema expects it: flat, single-string fields
#[derive(Serialize, Debug)]
pub struct UaProduct {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Payload for view_item, add_to_cart and remove_from_cart
#[derive(Serialize, Debug)]
struct ItemsPayload {
    items: Vec<UaProduct>,
}

/// Payload for begin_checkout
#[derive(Serialize, Debug)]
struct BeginCheckoutPayload {
    items: Vec<UaProduct>,
    coupon: String,
}

/// Payload for the checkout option event shared by the payment and shipping steps
#[derive(Serialize, Debug)]
struct CheckoutOptionPayload {
    checkout_option: String,
}

/// Payload for purchase
#[derive(Serialize, Debug)]
struct PurchasePayload {
    transaction_id: String,
    affiliation: String,
    currency: String,
    value: f64,
    tax: f64,
    shipping: f64,
    coupon: String,
    items: Vec<UaProduct>,
}

/// The legacy flat-schema adapter, for "UA-" properties
pub struct UniversalAnalytics {
    tracking_id: String,
    currency: String,
    debug: bool,
    gtag: GtagHandle,
}

impl Display for UniversalAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str("ua")
    }
}

impl UniversalAnalytics {
    pub fn new(settings: &Settings, gtag: GtagHandle) -> Self {
        Self {
            tracking_id: settings.tracking_id.clone(),
            currency: settings.currency.clone(),
            debug: settings.debug,
            gtag,
        }
    }

    /// Flattens products into the legacy item shape
    ///
    /// Joining an absent sequence yields an absent field, not an empty string.
    fn parse_products(products: &[Product]) -> Vec<UaProduct> {
        products.iter().map(|item| UaProduct {
            id: item.id.clone(),
            name: item.name.clone(),
            brand: item.brand.as_ref().map(|b| b.join(",")),
            category: item.category.as_ref().map(|c| c.join(",")),
            variant: item.variant.as_ref().map(|v| v.join("-")),
            price: item.price,
            quantity: item.quantity,
        }).collect()
    }

    /// Serializes a payload and hands it to the tracking function
    fn emit<P: Serialize + Debug>(&self, gtag: &dyn GtagFunction, event: &str, payload: &P) {
        if self.debug {
            log::debug!("{}: {:?}", event, payload);
        }
        match serde_json::to_value(payload) {
            Ok(value) => gtag.call("event", event, &value),
            Err(e) => log::warn!("could not serialize {} payload, skipping: {}", event, e),
        }
    }
}

impl Provider for UniversalAnalytics {
    fn send(&self, action: Action, data: &ActionData) {
        let gtag = match self.gtag.get() {
            Some(g) => g,
            None => return,
        };

        if self.debug {
            log::debug!("send (ua) for {}: {} {:?}", self.tracking_id, action, data);
        }

        match action {
            Action::ViewItem | Action::AddToCart | Action::RemoveFromCart => {
                let payload = ItemsPayload {
                    items: Self::parse_products(&data.items),
                };
                self.emit(gtag.as_ref(), action.as_str(), &payload);
            },
            Action::BeginCheckout => {
                let payload = BeginCheckoutPayload {
                    items: Self::parse_products(&data.items),
                    coupon: data.coupon.clone().unwrap_or_default(),
                };
                self.emit(gtag.as_ref(), "begin_checkout", &payload);
            },
            Action::AddPaymentInfo | Action::AddShippingInfo => {
                /* The legacy schema funnels both checkout steps into one
                 * event and keeps only the selected option */
                let payload = CheckoutOptionPayload {
                    checkout_option: data.option.clone().unwrap_or_default(),
                };
                self.emit(gtag.as_ref(), "set_checkout_option", &payload);
            },
            Action::Purchase => {
                let payload = PurchasePayload {
                    transaction_id: data.transaction_id.clone().unwrap_or_default(),
                    affiliation: data.affiliation.clone(),
                    currency: self.currency.clone(),
                    value: data.total.unwrap_or(0.0),
                    tax: data.tax.unwrap_or(0.0),
                    shipping: data.shipping.unwrap_or(0.0),
                    coupon: data.coupon.clone().unwrap_or_default(),
                    items: Self::parse_products(&data.items),
                };
                self.emit(gtag.as_ref(), "purchase", &payload);
            },
        }
    }
}
