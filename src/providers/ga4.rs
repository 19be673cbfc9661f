use crate::config::Settings;
use crate::events::action::{Action, ActionData};
use crate::events::product::Product;
use crate::gtag::{GtagFunction, GtagHandle};
use crate::providers::Provider;

use serde::Serialize;
use serde_json;
use std::fmt::{Debug, Display};
use log;

/// A product as the current schema expects it, category hierarchy flattened
#[derive(Serialize, Debug)]
pub struct Ga4Item {
    pub affiliation: String,
    pub currency: String,
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category_5: Option<String>,
    pub item_id: String,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Payload for view_item, add_to_cart and remove_from_cart
#[derive(Serialize, Debug)]
struct ItemsPayload {
    currency: String,
    items: Vec<Ga4Item>,
    value: f64,
}

/// Payload for begin_checkout
#[derive(Serialize, Debug)]
struct BeginCheckoutPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    coupon: Option<String>,
    currency: String,
    items: Vec<Ga4Item>,
    value: f64,
}

/// Payload for add_payment_info
#[derive(Serialize, Debug)]
struct PaymentInfoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    coupon: Option<String>,
    currency: String,
    items: Vec<Ga4Item>,
    payment_type: String,
    value: f64,
}

/// Payload for add_shipping_info
#[derive(Serialize, Debug)]
struct ShippingInfoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    coupon: Option<String>,
    currency: String,
    items: Vec<Ga4Item>,
    shipping_tier: String,
    value: f64,
}

/// Payload for purchase
#[derive(Serialize, Debug)]
struct PurchasePayload {
    affiliation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    coupon: Option<String>,
    currency: String,
    items: Vec<Ga4Item>,
    transaction_id: String,
    shipping: f64,
    tax: f64,
    value: f64,
}

/// The current itemized-schema adapter, for everything that is not a "UA-" property
pub struct Ga4 {
    tracking_id: String,
    currency: String,
    debug: bool,
    gtag: GtagHandle,
}

impl Display for Ga4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str("ga4")
    }
}

impl Ga4 {
    pub fn new(settings: &Settings, gtag: GtagHandle) -> Self {
        Self {
            tracking_id: settings.tracking_id.clone(),
            currency: settings.currency.clone(),
            debug: settings.debug,
            gtag,
        }
    }

    /// Maps products into the itemized shape, flattening the category
    /// hierarchy onto item_category through item_category_5
    fn parse_products(&self, products: &[Product], affiliation: &str) -> Vec<Ga4Item> {
        products.iter().map(|item| {
            let categories = item.category.as_deref().unwrap_or(&[]);
            Ga4Item {
                affiliation: affiliation.to_string(),
                currency: self.currency.clone(),
                discount: item.discount.unwrap_or(0.0),
                item_brand: item.brand.as_ref().map(|b| b.join(",")),
                item_category: categories.get(0).cloned(),
                item_category_2: categories.get(1).cloned(),
                item_category_3: categories.get(2).cloned(),
                item_category_4: categories.get(3).cloned(),
                item_category_5: categories.get(4).cloned(),
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                item_variant: item.variant.as_ref().map(|v| v.join("-")),
                price: item.price,
                quantity: item.quantity,
            }
        }).collect()
    }

    /// The event value computed from the items: unit price net of the
    /// discount, times quantity
    fn items_total(products: &[Product]) -> f64 {
        products.iter()
            .map(|item| {
                (item.price.unwrap_or(0.0) - item.discount.unwrap_or(0.0)) * item.quantity.unwrap_or(1) as f64
            })
            .sum()
    }

    /// The event value: an explicit, non-zero total wins over the computed one
    fn value_for(data: &ActionData) -> f64 {
        match data.total {
            Some(total) if total != 0.0 => total,
            _ => Self::items_total(&data.items),
        }
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

impl Provider for Ga4 {
    fn send(&self, action: Action, data: &ActionData) {
        let gtag = match self.gtag.get() {
            Some(g) => g,
            None => return,
        };

        if self.debug {
            log::debug!("send (ga4) for {}: {} {:?}", self.tracking_id, action, data);
        }

        match action {
            Action::ViewItem | Action::AddToCart | Action::RemoveFromCart => {
                let payload = ItemsPayload {
                    currency: self.currency.clone(),
                    items: self.parse_products(&data.items, &data.affiliation),
                    value: Self::items_total(&data.items),
                };
                self.emit(gtag.as_ref(), action.as_str(), &payload);
            },
            Action::BeginCheckout => {
                let payload = BeginCheckoutPayload {
                    coupon: data.coupon.clone(),
                    currency: self.currency.clone(),
                    items: self.parse_products(&data.items, &data.affiliation),
                    value: Self::value_for(data),
                };
                self.emit(gtag.as_ref(), "begin_checkout", &payload);
            },
            Action::AddPaymentInfo => {
                let payload = PaymentInfoPayload {
                    coupon: data.coupon.clone(),
                    currency: self.currency.clone(),
                    items: self.parse_products(&data.items, &data.affiliation),
                    payment_type: data.option.clone().unwrap_or_default(),
                    value: Self::value_for(data),
                };
                self.emit(gtag.as_ref(), "add_payment_info", &payload);
            },
            Action::AddShippingInfo => {
                let payload = ShippingInfoPayload {
                    coupon: data.coupon.clone(),
                    currency: self.currency.clone(),
                    items: self.parse_products(&data.items, &data.affiliation),
                    shipping_tier: data.option.clone().unwrap_or_default(),
                    value: Self::value_for(data),
                };
                self.emit(gtag.as_ref(), "add_shipping_info", &payload);
            },
            Action::Purchase => {
                let payload = PurchasePayload {
                    affiliation: data.affiliation.clone(),
                    coupon: data.coupon.clone(),
                    currency: self.currency.clone(),
                    items: self.parse_products(&data.items, &data.affiliation),
                    transaction_id: data.transaction_id.clone().unwrap_or_default(),
                    shipping: data.shipping.unwrap_or(0.0),
                    tax: data.tax.unwrap_or(0.0),
                    value: Self::value_for(data),
                };
                self.emit(gtag.as_ref(), "purchase", &payload);
            },
        }
    }
}
