//! Dialog Actions
//!
//! The three directives the bot can return to the platform, the response
//! envelope that carries them, and the validation result the handler uses
//! to decide between them.

use serde::{Deserialize, Serialize};

use crate::event::{SessionAttributes, SlotValues};
use crate::slots::Slot;

/// A message shown to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    pub content_type: String,
    pub content: String,
}

impl MessageContent {
    /// Plain-text message, the only content type this bot emits
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText".into(),
            content: content.into(),
        }
    }
}

/// Terminal outcome reported by a Close action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Directive returned to the platform, tagged on the wire by `type`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Re-ask the user for one specific slot
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: SlotValues,
        slot_to_elicit: Slot,
        message: MessageContent,
    },

    /// Hand control back to the platform's own slot filling
    Delegate { slots: SlotValues },

    /// End the turn with a final outcome
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: MessageContent,
    },
}

/// Complete response envelope for one invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// Build an elicit-slot response: re-prompt for `slot_to_elicit`
pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: SlotValues,
    slot_to_elicit: Slot,
    message: MessageContent,
) -> BotResponse {
    BotResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit,
            message,
        },
    }
}

/// Build a delegate response: let the platform continue slot filling
pub fn delegate(session_attributes: SessionAttributes, slots: SlotValues) -> BotResponse {
    BotResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// Build a close response: end the turn with `fulfillment_state`
pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: MessageContent,
) -> BotResponse {
    BotResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

/// Outcome of a validation pass over the collected slots.
///
/// Invariant (constructor-enforced): a passing result carries neither a
/// violated slot nor a message; a failing result names exactly one slot.
#[derive(Clone, Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub violated_slot: Option<Slot>,
    pub message: Option<MessageContent>,
}

impl ValidationResult {
    /// General constructor. An absent `message_content` stays absent;
    /// no default text is synthesized.
    pub fn new(valid: bool, violated_slot: Option<Slot>, message_content: Option<String>) -> Self {
        Self {
            valid,
            violated_slot,
            message: message_content.map(MessageContent::plain_text),
        }
    }

    /// Input passed every rule
    pub fn ok() -> Self {
        Self::new(true, None, None)
    }

    /// Input violated a rule on `slot`
    pub fn violation(slot: Slot, message: impl Into<String>) -> Self {
        Self::new(false, Some(slot), Some(message.into()))
    }
}
