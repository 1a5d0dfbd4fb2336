//! Typed Slot Parsing
//!
//! Slot values arrive as raw strings or not at all. Everything numeric or
//! enumerated is parsed here at the boundary; a value that fails to parse
//! becomes a validation failure on its slot, never a fault.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Slot names for the RecommendPortfolio intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "investmentAmount")]
    InvestmentAmount,
    #[serde(rename = "riskLevel")]
    RiskLevel,
}

impl Slot {
    /// Wire name as the platform spells it
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Age => "age",
            Self::InvestmentAmount => "investmentAmount",
            Self::RiskLevel => "riskLevel",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk tolerance categories accepted for the riskLevel slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    None,
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl FromStr for RiskLevel {
    type Err = AdvisorError;

    /// Case-insensitive, whitespace-tolerant match against the fixed set
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "very low" => Ok(Self::VeryLow),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "very high" => Ok(Self::VeryHigh),
            _ => Err(AdvisorError::UnknownRiskLevel(s.trim().to_string())),
        }
    }
}

/// Parse the age slot as an integer
pub fn parse_age(raw: &str) -> Result<i64, AdvisorError> {
    raw.trim().parse().map_err(|_| AdvisorError::InvalidSlotValue {
        slot: Slot::Age,
        value: raw.to_string(),
    })
}

/// Parse the investment amount slot as a decimal dollar figure
pub fn parse_amount(raw: &str) -> Result<Decimal, AdvisorError> {
    raw.trim().parse().map_err(|_| AdvisorError::InvalidSlotValue {
        slot: Slot::InvestmentAmount,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_risk_level_case_insensitive() {
        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!("VERY LOW".parse::<RiskLevel>().unwrap(), RiskLevel::VeryLow);
        assert_eq!(" very high ".parse::<RiskLevel>().unwrap(), RiskLevel::VeryHigh);
        assert_eq!("none".parse::<RiskLevel>().unwrap(), RiskLevel::None);
    }

    #[test]
    fn test_risk_level_unknown() {
        let err = "extreme".parse::<RiskLevel>().unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownRiskLevel(ref s) if s == "extreme"));
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("30").unwrap(), 30);
        assert_eq!(parse_age(" 65 ").unwrap(), 65);
        assert_eq!(parse_age("-1").unwrap(), -1);
        assert!(parse_age("thirty").is_err());
        assert!(parse_age("30.5").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10000").unwrap(), dec!(10000));
        assert_eq!(parse_amount("4999.99").unwrap(), dec!(4999.99));
        assert!(parse_amount("a lot").is_err());
    }

    #[test]
    fn test_slot_wire_names() {
        assert_eq!(Slot::InvestmentAmount.as_str(), "investmentAmount");
        assert_eq!(
            serde_json::to_string(&Slot::RiskLevel).unwrap(),
            r#""riskLevel""#
        );
    }
}
