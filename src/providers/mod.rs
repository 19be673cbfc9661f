pub mod ga4;
pub mod ua;

use crate::config::Settings;
use crate::events::action::{Action, ActionData};
use crate::gtag::GtagHandle;

use crate::providers::ga4::Ga4;
use crate::providers::ua::UniversalAnalytics;

use std::fmt::Display;

/// The Provider trait, both schema adapters implement this
///
/// Sending is fire-and-forget: adapters never report failures, as a
/// dropped analytics event must not disturb the host application.
pub trait Provider: Display + Send + Sync {
    fn send(&self, action: Action, data: &ActionData);
}

/// Tracking ids with this prefix belong to the legacy schema
const LEGACY_PREFIX: &str = "UA";

/// Picks the schema adapter matching a tracking id
///
/// The prefix decides: "UA-" properties speak the legacy flat schema,
/// everything else the current itemized one.
pub fn provider_for(settings: &Settings, gtag: &GtagHandle) -> Box<dyn Provider> {
    match settings.tracking_id.starts_with(LEGACY_PREFIX) {
        true => Box::new(UniversalAnalytics::new(settings, gtag.clone())),
        false => Box::new(Ga4::new(settings, gtag.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_id_prefix_picks_the_provider() {
        let handle = GtagHandle::empty();

        let legacy = provider_for(&Settings::for_tracking_id("UA-12345-1"), &handle);
        assert_eq!(legacy.to_string(), "ua");

        let current = provider_for(&Settings::for_tracking_id("G-ABC123"), &handle);
        assert_eq!(current.to_string(), "ga4");
    }

    #[test]
    fn unknown_prefixes_get_the_current_schema() {
        let handle = GtagHandle::empty();
        let provider = provider_for(&Settings::for_tracking_id("AW-999"), &handle);
        assert_eq!(provider.to_string(), "ga4");
    }
}
