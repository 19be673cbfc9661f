use crate::events::action::{Action, ActionData};

use serde::{Deserialize, Serialize};

/// A complete event submission: which action, and its payload
///
/// The JSON shape hosts use when events arrive as text rather than as
/// constructed values, e.g. over an internal queue or on the checker's
/// standard input.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventEnvelope {
    pub action: Action,
    pub data: ActionData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_parses_action_and_data() {
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "action": "begin_checkout",
            "data": {
                "affiliation": "Web Store",
                "currency": "THB",
                "items": [{"id": "P1", "name": "Socks", "price": 5.0}],
                "coupon": "SUMMER_SALE13"
            }
        })).unwrap();

        assert_eq!(envelope.action, Action::BeginCheckout);
        assert_eq!(envelope.data.items.len(), 1);
        assert_eq!(envelope.data.coupon.as_deref(), Some("SUMMER_SALE13"));
    }

    #[test]
    fn envelope_rejects_unknown_actions() {
        let result = serde_json::from_value::<EventEnvelope>(json!({
            "action": "refund",
            "data": {"affiliation": "", "currency": "THB"}
        }));
        assert!(result.is_err());
    }
}
