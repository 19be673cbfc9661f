//! A small, no-fuss adapter mapping unified e-commerce events to the
//! payloads understood by Universal Analytics and GA4 properties.
//!
//! Construct an [`EcommerceTracker`] with a tracking id and a
//! [`GtagHandle`] wrapping the host's tracking function; every
//! [`send`](EcommerceTracker::send) call is translated into the schema
//! that property expects and handed to that function. The prefix of the
//! tracking id picks the schema, once, at construction.
//!
//! ```
//! use ecommerce_gtag::{Action, ActionData, EcommerceTracker, GtagHandle, Product};
//!
//! let gtag = GtagHandle::with(|_command: &str, event: &str, payload: &serde_json::Value| {
//!     println!("{} {}", event, payload);
//! });
//!
//! let tracker = EcommerceTracker::for_tracking_id("G-ABC123", gtag);
//! tracker.send(Action::ViewItem, &ActionData::with_items("Web Store", "THB", vec![
//!     Product {
//!         id: "P67890".into(),
//!         name: "Android T-Shirt".into(),
//!         price: Some(29.2),
//!         quantity: Some(2),
//!         ..Product::default()
//!     },
//! ]));
//! ```

pub mod config;
pub mod events;
pub mod gtag;
pub mod providers;
pub mod tracker;

pub use crate::config::Settings;
pub use crate::events::action::{Action, ActionData, EventError};
pub use crate::events::envelope::EventEnvelope;
pub use crate::events::product::Product;
pub use crate::gtag::{GtagFunction, GtagHandle};
pub use crate::tracker::EcommerceTracker;
