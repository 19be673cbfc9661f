use serde_json;
use std::sync::{Arc, RwLock};

/// The external tracking function, as exposed by the host environment
///
/// The real collaborator is the gtag.js command queue: one global function
/// taking a command, an event name and a payload. Anything callable with
/// that shape can stand in. Delivery semantics (queuing, batching, retry)
/// belong to the function, not to this crate.
pub trait GtagFunction: Send + Sync {
    fn call(&self, command: &str, event: &str, payload: &serde_json::Value);
}

impl<F> GtagFunction for F
where
    F: Fn(&str, &str, &serde_json::Value) + Send + Sync,
{
    fn call(&self, command: &str, event: &str, payload: &serde_json::Value) {
        self(command, event, payload)
    }
}

/// A shared slot holding the tracking function, when the host has installed one
///
/// The tracking script loads asynchronously, so the function may appear
/// only after trackers have been constructed, or be removed again. The
/// adapters look the slot up before every call and drop the whole event
/// when it is empty.
#[derive(Clone, Default)]
pub struct GtagHandle {
    slot: Arc<RwLock<Option<Arc<dyn GtagFunction>>>>,
}

impl GtagHandle {
    /// An empty slot: events are dropped until a function is installed
    pub fn empty() -> Self {
        Self::default()
    }

    /// A slot prefilled with a tracking function
    pub fn with<F: GtagFunction + 'static>(function: F) -> Self {
        let handle = Self::default();
        handle.install(function);
        handle
    }

    /// Installs or replaces the tracking function
    pub fn install<F: GtagFunction + 'static>(&self, function: F) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(Arc::new(function));
        }
    }

    /// Removes the tracking function; subsequent events are dropped
    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }

    /// The currently installed function, if any
    pub fn get(&self) -> Option<Arc<dyn GtagFunction>> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[test]
    fn empty_handles_resolve_to_nothing() {
        assert!(GtagHandle::empty().get().is_none());
    }

    #[test]
    fn closures_act_as_tracking_functions() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handle = GtagHandle::with(move |command: &str, event: &str, payload: &serde_json::Value| {
            sink.lock().unwrap().push((command.to_string(), event.to_string(), payload.clone()));
        });

        let function = handle.get().expect("function should be installed");
        function.call("event", "purchase", &json!({"value": 1.0}));

        let calls = seen.lock().unwrap();
        assert_eq!(calls.as_slice(), [("event".to_string(), "purchase".to_string(), json!({"value": 1.0}))]);
    }

    #[test]
    fn clearing_empties_every_clone_of_the_slot() {
        let handle = GtagHandle::with(|_: &str, _: &str, _: &serde_json::Value| {});
        let clone = handle.clone();
        assert!(clone.get().is_some());

        handle.clear();
        assert!(clone.get().is_none());

        clone.install(|_: &str, _: &str, _: &serde_json::Value| {});
        assert!(handle.get().is_some());
    }
}
