//! RecommendPortfolio Intent Handler
//!
//! Dialog management and fulfillment for the portfolio recommendation
//! intent. The validation phase re-prompts on the first violated rule and
//! otherwise hands slot filling back to the platform; the fulfillment phase
//! closes the turn with the rendered recommendation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation;
use crate::dialog::{
    self, BotResponse, FulfillmentState, MessageContent, ValidationResult,
};
use crate::error::{AdvisorError, Result};
use crate::event::{IntentRequest, InvocationSource, SlotValues};
use crate::slots::{self, RiskLevel, Slot};

/// Inclusive age bounds accepted for an investment account
const MIN_AGE: i64 = 0;
const MAX_AGE: i64 = 65;

/// Minimum accepted investment amount in USD
const MIN_INVESTMENT: Decimal = dec!(5000);

/// Handle one RecommendPortfolio invocation
pub fn recommend_portfolio(request: &IntentRequest) -> BotResponse {
    match request.invocation_source {
        InvocationSource::DialogCodeHook => validate_phase(request),
        InvocationSource::FulfillmentCodeHook => fulfill_phase(request),
    }
}

/// Validation phase: check what the user has supplied so far and re-prompt
/// for the first violation. A clean pass delegates slot filling back to
/// the platform.
fn validate_phase(request: &IntentRequest) -> BotResponse {
    let slots = &request.current_intent.slots;

    match validate_slots(slots) {
        ValidationResult {
            valid: false,
            violated_slot: Some(slot),
            message: Some(message),
        } => {
            tracing::debug!(slot = %slot, "slot validation failed, re-eliciting");
            dialog::elicit_slot(
                request.session_attributes.clone(),
                request.current_intent.name.clone(),
                slots.clone(),
                slot,
                message,
            )
        }
        _ => dialog::delegate(request.session_attributes.clone(), slots.clone()),
    }
}

/// Apply the validation rules in fixed order, stopping at the first
/// violation. Slots not yet collected are skipped.
fn validate_slots(slots: &SlotValues) -> ValidationResult {
    if let Some(raw) = slots.age.as_deref() {
        let in_range = matches!(slots::parse_age(raw), Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age));
        if !in_range {
            return ValidationResult::violation(
                Slot::Age,
                "You must be between 0 and 65 years of age. Please provide your age again.",
            );
        }
    }

    if let Some(raw) = slots.investment_amount.as_deref() {
        let acceptable = matches!(slots::parse_amount(raw), Ok(amount) if amount >= MIN_INVESTMENT);
        if !acceptable {
            return ValidationResult::violation(
                Slot::InvestmentAmount,
                "The amount to invest should be at least $5,000. Please enter the amount again.",
            );
        }
    }

    if let Some(raw) = slots.risk_level.as_deref() {
        if raw.parse::<RiskLevel>().is_err() {
            return ValidationResult::violation(
                Slot::RiskLevel,
                "The risk level should be one of: none, very low, low, medium, high or very high. \
                 Please choose your risk level again.",
            );
        }
    }

    ValidationResult::ok()
}

/// Fulfillment phase: every slot should be present and valid by now. A
/// missing or unparseable value here is a platform-contract breach and is
/// reported as a failed close rather than a fault.
fn fulfill_phase(request: &IntentRequest) -> BotResponse {
    let session_attributes = request.session_attributes.clone();

    match fulfillment_message(&request.current_intent.slots) {
        Ok(content) => dialog::close(
            session_attributes,
            FulfillmentState::Fulfilled,
            MessageContent::plain_text(content),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "fulfillment reached with unusable slots");
            dialog::close(
                session_attributes,
                FulfillmentState::Failed,
                MessageContent::plain_text(
                    "Sorry, I was not able to work out a recommendation from the information \
                     provided. Please start over and check your answers.",
                ),
            )
        }
    }
}

/// Render the fulfilled-turn message, or the reason the slots are unusable
fn fulfillment_message(slots: &SlotValues) -> Result<String> {
    let first_name = slots
        .first_name
        .as_deref()
        .ok_or(AdvisorError::MissingSlot(Slot::FirstName))?;
    let raw_amount = slots
        .investment_amount
        .as_deref()
        .ok_or(AdvisorError::MissingSlot(Slot::InvestmentAmount))?;
    let raw_risk = slots
        .risk_level
        .as_deref()
        .ok_or(AdvisorError::MissingSlot(Slot::RiskLevel))?;

    let amount = slots::parse_amount(raw_amount)?;
    let level: RiskLevel = raw_risk.parse()?;

    let recommendation = allocation::recommend(level, amount);

    Ok(format!(
        "{first_name}, thank you for your information; based on the risk level you defined, \
         my recommendation is to choose an investment portfolio with {}.",
        recommendation.description
    ))
}
