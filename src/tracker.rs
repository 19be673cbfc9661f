use crate::config::Settings;
use crate::events::action::{Action, ActionData};
use crate::gtag::GtagHandle;
use crate::providers::{provider_for, Provider};

use log;

/// The entry point: owns one schema adapter and forwards every event to it
///
/// The adapter is picked once, from the tracking id prefix, and kept for
/// the tracker's whole lifetime.
pub struct EcommerceTracker {
    settings: Settings,
    provider: Box<dyn Provider>,
}

impl EcommerceTracker {
    /// Builds a tracker from full settings
    pub fn new(settings: Settings, gtag: GtagHandle) -> Self {
        let provider = provider_for(&settings, &gtag);
        log::debug!("tracking id {} handled by provider: {}", settings.tracking_id, provider);
        Self { settings, provider }
    }

    /// Builds a tracker around a tracking id, with the default currency and
    /// no debug output
    pub fn for_tracking_id<S: Into<String>>(tracking_id: S, gtag: GtagHandle) -> Self {
        Self::new(Settings::for_tracking_id(tracking_id), gtag)
    }

    /// The settings captured at construction
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Forwards one event to the schema adapter, verbatim
    pub fn send(&self, action: Action, data: &ActionData) {
        self.provider.send(action, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gtag::recording::Recorder;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn selection_is_made_once_and_stays_stable() {
        let (recorder, handle) = Recorder::wired();
        let tracker = EcommerceTracker::for_tracking_id("UA-12345-1", handle);
        let data = ActionData {
            option: Some("credit_card".into()),
            ..ActionData::with_items("Web Store", "THB", vec!())
        };

        tracker.send(Action::ViewItem, &data);
        tracker.send(Action::AddPaymentInfo, &data);

        /* Both calls went through the legacy adapter: the second one got
         * renamed to its checkout option event */
        let events: Vec<String> = recorder.calls().iter().map(|(_, e, _)| e.clone()).collect();
        assert_eq!(events, ["view_item", "set_checkout_option"]);
    }

    #[test]
    fn each_send_produces_exactly_one_call() {
        let (recorder, handle) = Recorder::wired();
        let tracker = EcommerceTracker::for_tracking_id("G-ABC123", handle);
        let data = ActionData::with_items("Web Store", "THB", vec!());

        tracker.send(Action::ViewItem, &data);
        tracker.send(Action::ViewItem, &data);

        assert_eq!(recorder.calls().len(), 2);
    }

    #[test]
    fn default_settings_follow_the_tracking_id() {
        let tracker = EcommerceTracker::for_tracking_id("G-ABC123", GtagHandle::empty());
        assert_eq!(tracker.settings().tracking_id, "G-ABC123");
        assert_eq!(tracker.settings().currency, "THB");
        assert!(!tracker.settings().debug);
    }

    #[test]
    fn tracking_function_can_arrive_late() {
        let handle = GtagHandle::empty();
        let tracker = EcommerceTracker::for_tracking_id("G-ABC123", handle.clone());
        let data = ActionData::with_items("Web Store", "THB", vec!());

        /* No function yet: the event is dropped */
        tracker.send(Action::ViewItem, &data);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        handle.install(move |_command: &str, event: &str, _payload: &serde_json::Value| {
            sink.lock().unwrap().push(event.to_string());
        });

        tracker.send(Action::ViewItem, &data);
        assert_eq!(seen.lock().unwrap().as_slice(), ["view_item"]);

        handle.clear();
        tracker.send(Action::ViewItem, &data);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn configured_currency_reaches_the_payload() {
        let (recorder, handle) = Recorder::wired();
        let settings = Settings {
            tracking_id: "G-ABC123".into(),
            currency: "EUR".into(),
            debug: false,
        };
        let tracker = EcommerceTracker::new(settings, handle);

        /* The event's own currency field is informative only */
        tracker.send(Action::ViewItem, &ActionData::with_items("Web Store", "USD", vec!()));

        let calls = recorder.calls();
        assert_eq!(calls[0].2["currency"], json!("EUR"));
    }
}
