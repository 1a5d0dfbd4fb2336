//! Portfolio Allocation
//!
//! Maps a risk tolerance category to a fixed bond/equity split and renders
//! the recommendation text. Uses `rust_decimal` for all monetary values -
//! never use f64 for money!

use rust_decimal::Decimal;

use crate::slots::RiskLevel;

/// Bond index fund named in recommendations
const BOND_TICKER: &str = "AGG";
/// Equity index fund named in recommendations
const EQUITY_TICKER: &str = "SPY";

/// A bond/equity percentage split. Invariant: the percentages sum to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationSplit {
    pub bond_percent: u8,
    pub equity_percent: u8,
}

impl AllocationSplit {
    /// Fixed split for a risk category
    pub const fn for_risk_level(level: RiskLevel) -> Self {
        let (bond_percent, equity_percent) = match level {
            RiskLevel::None => (100, 0),
            RiskLevel::VeryLow => (80, 20),
            RiskLevel::Low => (60, 40),
            RiskLevel::Medium => (40, 60),
            RiskLevel::High => (20, 80),
            RiskLevel::VeryHigh => (0, 100),
        };
        Self {
            bond_percent,
            equity_percent,
        }
    }

    /// Dollar amount of `total` going to bonds, rounded to cents
    pub fn bond_amount(self, total: Decimal) -> Decimal {
        portion(total, self.bond_percent)
    }

    /// Dollar amount of `total` going to equities, rounded to cents
    pub fn equity_amount(self, total: Decimal) -> Decimal {
        portion(total, self.equity_percent)
    }
}

/// `total * percent / 100` in decimal arithmetic, rounded to cents
fn portion(total: Decimal, percent: u8) -> Decimal {
    (total * Decimal::from(percent) / Decimal::from(100u8)).round_dp(2)
}

/// A complete recommendation: the split, its dollar figures, and the
/// rendered description
#[derive(Clone, Debug)]
pub struct Recommendation {
    pub split: AllocationSplit,
    pub bond_amount: Decimal,
    pub equity_amount: Decimal,
    pub description: String,
}

/// Build the recommendation for `level` on an investment of `amount`
pub fn recommend(level: RiskLevel, amount: Decimal) -> Recommendation {
    let split = AllocationSplit::for_risk_level(level);
    let bond_amount = split.bond_amount(amount);
    let equity_amount = split.equity_amount(amount);

    let description = format!(
        "{}% (${:.2}) in bonds ({}) and {}% (${:.2}) in equities ({})",
        split.bond_percent, bond_amount, BOND_TICKER, split.equity_percent, equity_amount,
        EQUITY_TICKER,
    );

    Recommendation {
        split,
        bond_amount,
        equity_amount,
        description,
    }
}
