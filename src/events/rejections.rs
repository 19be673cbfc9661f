use crate::events::action::{Action, ActionData};
use crate::events::envelope::EventEnvelope;

use serde_json;
use std::str::FromStr;

/// Attempts to explain why an envelope payload is being rejected, with log-friendly messages
pub fn explain_rejection(payload: &str) -> Vec<String> {
    let generic_json = match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(j) => j,
        Err(_) => return vec!("invalid JSON structure".into())
    };

    let mut messages: Vec<String> = vec!();
    let global_message = match serde_json::from_str::<EventEnvelope>(payload) {
        Ok(_) => return vec!(),
        Err(e) => e.to_string()
    };
    messages.push(global_message);

    match generic_json.as_object() {
        Some(generic_map) => {
            match generic_map.get("action").map(|a| a.as_str()) {
                Some(Some(action_str)) => {
                    if let Err(e) = Action::from_str(action_str) {
                        messages.push(e.to_string());
                    }
                },
                Some(None) => messages.push("the action key should be a string".into()),
                None => messages.push("missing action key in envelope".into()),
            }

            match generic_map.get("data") {
                Some(data) => {
                    if let Err(e) = serde_json::from_value::<ActionData>(data.clone()) {
                        messages.push(format!("data: {}", e));
                    }
                },
                None => messages.push("missing data key in envelope".into()),
            }
        },
        None => messages.push("root element is not a map".into())
    }

    messages.iter().enumerate()
        .map(|(i, m)| format!("({}) {}", i + 1, m))
        .collect::<Vec<String>>()
}
