//! Intent Invocation Event
//!
//! Serde model of the inbound dialog event as the bot platform delivers it.
//! Slot values stay raw strings here; typing happens in [`crate::slots`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque conversation state owned by the platform. Carried through every
/// response unchanged unless a handler explicitly updates it.
pub type SessionAttributes = HashMap<String, String>;

/// One intent-invocation event
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    /// Intent being fulfilled, with the slots collected so far
    pub current_intent: CurrentIntent,

    /// Which dialog phase the platform is invoking
    pub invocation_source: InvocationSource,

    /// Absent on the wire means no state carried yet
    #[serde(default)]
    pub session_attributes: SessionAttributes,
}

/// The intent under fulfillment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentIntent {
    /// Intent name as configured on the platform
    pub name: String,

    /// Slot map; the platform sends null for anything not yet elicited
    #[serde(default)]
    pub slots: SlotValues,
}

/// Raw slot values for the RecommendPortfolio intent.
///
/// Every key is present on the wire even when unfilled, so the struct
/// serializes all fields (nulls included) rather than skipping them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotValues {
    pub first_name: Option<String>,
    pub age: Option<String>,
    pub investment_amount: Option<String>,
    pub risk_level: Option<String>,
}

/// Dialog phase of an invocation.
///
/// The platform contract is asymmetric: only the exact string
/// `"DialogCodeHook"` selects validation; every other source value is
/// treated as a fulfillment request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum InvocationSource {
    /// Mid-conversation validation callback
    DialogCodeHook,
    /// Final fulfillment once the platform considers the slots filled
    FulfillmentCodeHook,
}

impl From<String> for InvocationSource {
    fn from(source: String) -> Self {
        match source.as_str() {
            "DialogCodeHook" => Self::DialogCodeHook,
            _ => Self::FulfillmentCodeHook,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_event() {
        let event: IntentRequest = serde_json::from_str(
            r#"{
                "currentIntent": {
                    "name": "RecommendPortfolio",
                    "slots": {
                        "firstName": "Ana",
                        "age": "30",
                        "investmentAmount": "10000",
                        "riskLevel": null
                    }
                },
                "invocationSource": "DialogCodeHook",
                "sessionAttributes": {"channel": "web"}
            }"#,
        )
        .unwrap();

        assert_eq!(event.current_intent.name, "RecommendPortfolio");
        assert_eq!(event.current_intent.slots.first_name.as_deref(), Some("Ana"));
        assert!(event.current_intent.slots.risk_level.is_none());
        assert_eq!(event.invocation_source, InvocationSource::DialogCodeHook);
        assert_eq!(event.session_attributes.get("channel").unwrap(), "web");
    }

    #[test]
    fn test_missing_session_attributes_default_to_empty() {
        let event: IntentRequest = serde_json::from_str(
            r#"{
                "currentIntent": {"name": "RecommendPortfolio", "slots": {}},
                "invocationSource": "FulfillmentCodeHook"
            }"#,
        )
        .unwrap();

        assert!(event.session_attributes.is_empty());
        assert!(event.current_intent.slots.age.is_none());
    }

    #[test]
    fn test_unknown_invocation_source_is_fulfillment() {
        let source: InvocationSource =
            serde_json::from_str(r#""SomeFutureHook""#).unwrap();
        assert_eq!(source, InvocationSource::FulfillmentCodeHook);
    }

    #[test]
    fn test_slot_values_serialize_nulls() {
        let json = serde_json::to_value(SlotValues::default()).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 4);
        assert!(map["firstName"].is_null());
        assert!(map["riskLevel"].is_null());
    }
}
