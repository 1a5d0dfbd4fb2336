//! # portfolio-advisor
//!
//! Dialog fulfillment for a conversational investment bot. One intent is
//! supported, `RecommendPortfolio`: the platform collects a first name, an
//! age, an investment amount and a risk level, and this crate validates the
//! slots mid-conversation and produces the final allocation recommendation.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐   DialogCodeHook    ┌─────────────────────────────┐
//! │ bot platform │ ──────────────────▶ │ validate slots              │
//! │  (caller)    │                     │  violation → ElicitSlot     │
//! │              │                     │  clean     → Delegate       │
//! │              │   FulfillmentHook   ├─────────────────────────────┤
//! │              │ ──────────────────▶ │ allocate bond/equity split  │
//! └──────────────┘                     │  → Close (Fulfilled/Failed) │
//!                                      └─────────────────────────────┘
//! ```
//!
//! ## Allocation table
//!
//! | risk level | bonds (AGG) | equities (SPY) |
//! |------------|-------------|----------------|
//! | none       | 100%        | 0%             |
//! | very low   | 80%         | 20%            |
//! | low        | 60%         | 40%            |
//! | medium     | 40%         | 60%            |
//! | high       | 20%         | 80%            |
//! | very high  | 0%          | 100%           |
//!
//! Every invocation is a pure function of its event; the only state that
//! outlives a turn is the caller-owned session attribute map, passed
//! through untouched.

pub mod allocation;
pub mod dialog;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod handler;
pub mod slots;

pub use allocation::{AllocationSplit, Recommendation};
pub use dialog::{BotResponse, DialogAction, FulfillmentState, MessageContent, ValidationResult};
pub use dispatch::{Intent, handle_event};
pub use error::{AdvisorError, Result};
pub use event::{IntentRequest, InvocationSource, SessionAttributes, SlotValues};
pub use slots::{RiskLevel, Slot};
