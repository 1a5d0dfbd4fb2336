//! Intent Dispatch
//!
//! Routes an inbound event to its intent handler. The supported intents are
//! a closed enum, so adding a handler without wiring it in fails to compile
//! instead of falling through at runtime.

use std::str::FromStr;

use crate::dialog::BotResponse;
use crate::error::{AdvisorError, Result};
use crate::event::IntentRequest;
use crate::handler;

/// Intents this bot fulfills
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    RecommendPortfolio,
}

impl FromStr for Intent {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RecommendPortfolio" => Ok(Self::RecommendPortfolio),
            other => Err(AdvisorError::UnsupportedIntent(other.to_string())),
        }
    }
}

/// Entry point: route the incoming event based on its intent name.
///
/// User-correctable problems are resolved into a dialog action by the
/// handlers. Only an unrecognized intent surfaces as an error: without a
/// known slot contract there is no well-formed action to return.
pub fn handle_event(request: &IntentRequest) -> Result<BotResponse> {
    let intent: Intent = request.current_intent.name.parse()?;
    tracing::debug!(?intent, source = ?request.invocation_source, "dispatching");

    match intent {
        Intent::RecommendPortfolio => Ok(handler::recommend_portfolio(request)),
    }
}
