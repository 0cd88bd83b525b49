use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    answers::Answers,
    catalog::{RiskTier, is_high_risk_lender},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_points(points: u32) -> Self {
        if points >= 70 {
            RiskLevel::High
        } else if points >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub points: u32,
    pub growth_percent: i64,
    pub level: RiskLevel,
}

/// Read a normalised amount; anything missing or unparseable counts as zero.
pub fn parse_amount(amount: Option<&str>) -> f64 {
    amount
        .and_then(|a| a.parse::<f64>().ok())
        .filter(|a| a.is_finite())
        .unwrap_or(0.0)
}

/// Relative increase from original to current amount, in percent.
pub fn growth(original: f64, current: f64) -> f64 {
    if original > 0.0 {
        (current - original) / original * 100.0
    } else {
        0.0
    }
}

// Halves round towards positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn growth_points(growth: f64) -> u32 {
    if growth > 200.0 {
        40
    } else if growth > 100.0 {
        25
    } else if growth > 50.0 {
        15
    } else {
        0
    }
}

fn duration_points(multiplier: Option<f64>) -> u32 {
    match multiplier {
        Some(m) if m >= 2.0 => 15,
        Some(m) if m >= 1.5 => 10,
        _ => 0,
    }
}

/// Heuristic likelihood that the debt carries abusive charges.
pub fn score(answers: &Answers) -> RiskResult {
    let original = parse_amount(answers.original_amount.as_deref());
    let current = parse_amount(answers.current_amount.as_deref());
    let growth = growth(original, current);

    let mut points = growth_points(growth);

    points += match answers.debt_type.map(|t| t.risk_tier()) {
        Some(RiskTier::VeryHigh) => 25,
        Some(RiskTier::High) => 15,
        _ => 5,
    };

    points += duration_points(answers.duration.map(|d| d.multiplier()));

    if answers.is_negatively_listed() {
        points += 20;
    }

    if answers.bank.as_deref().is_some_and(is_high_risk_lender) {
        points += 15;
    }

    RiskResult {
        points,
        growth_percent: round_half_up(growth),
        level: RiskLevel::from_points(points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DebtDuration, DebtType, NegativeListing};

    fn answers(original: &str, current: &str) -> Answers {
        Answers {
            original_amount: Some(original.to_string()),
            current_amount: Some(current.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_points(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_points(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_points(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_points(39), RiskLevel::Low);
        assert_eq!(RiskLevel::from_points(0), RiskLevel::Low);
    }

    #[test]
    fn test_zero_original_means_zero_growth() {
        let result = score(&answers("000", "18000"));
        assert_eq!(result.growth_percent, 0);
        let result = score(&Answers::default());
        assert_eq!(result.growth_percent, 0);
    }

    #[test]
    fn test_growth_thresholds_are_strict() {
        // exactly 200% growth only reaches the middle band
        assert_eq!(growth_points(growth(1000.0, 3000.0)), 25);
        assert_eq!(growth_points(200.01), 40);
        assert_eq!(growth_points(100.0), 15);
        assert_eq!(growth_points(50.0), 0);
    }

    #[test]
    fn test_missing_debt_type_scores_as_medium_tier() {
        let result = score(&Answers::default());
        assert_eq!(result.points, 5);
        assert_eq!(result.level, RiskLevel::Low);
    }

    #[test]
    fn test_malformed_amounts_degrade_to_zero() {
        assert_eq!(parse_amount(Some("12a")), 0.0);
        assert_eq!(parse_amount(None), 0.0);
        assert_eq!(parse_amount(Some("4000")), 4000.0);
        let result = score(&answers("abc", "xyz"));
        assert_eq!(result.growth_percent, 0);
    }

    #[test]
    fn test_growth_rounding() {
        assert_eq!(score(&answers("300", "301")).growth_percent, 0);
        assert_eq!(score(&answers("200", "201")).growth_percent, 1);
        // -0.5% rounds up to zero
        assert_eq!(score(&answers("200", "199")).growth_percent, 0);
        assert_eq!(score(&answers("1000", "500")).growth_percent, -50);
    }

    #[test]
    fn test_duration_and_lender_bonuses() {
        let base = Answers {
            debt_type: Some(DebtType::PersonalLoan),
            duration: Some(DebtDuration::OneToTwoYears),
            bank: Some("Agibank".to_string()),
            negative_listing: Some(NegativeListing::Unsure),
            ..Default::default()
        };
        // 15 (high tier) + 10 (1.5x) + 15 (lender)
        let result = score(&base);
        assert_eq!(result.points, 40);
        assert_eq!(result.level, RiskLevel::Medium);
    }

    #[test]
    fn test_score_is_deterministic() {
        let a = Answers {
            debt_type: Some(DebtType::Overdraft),
            duration: Some(DebtDuration::TwoToFiveYears),
            ..answers("1500", "4000")
        };
        assert_eq!(score(&a), score(&a));
    }
}
