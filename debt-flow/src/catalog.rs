//! Closed option sets offered by the questionnaire.
//!
//! Risk tiers and duration multipliers are fixed here, at catalog definition
//! time, and read by the scorer.

use serde::{Deserialize, Serialize};

/// Banks and lenders offered at the `bank` step, in display order.
pub const BANKS: &[&str] = &[
    "Banco do Brasil",
    "Caixa Econômica",
    "Bradesco",
    "Itaú",
    "Santander",
    "Nubank",
    "Inter",
    "PAN",
    "BMG",
    "Portocred",
    "Agibank",
    "C6 Bank",
    "Mercado Pago",
    "Crefisa",
    "Other",
];

/// Non-bank lenders that add to the risk score.
pub const HIGH_RISK_LENDERS: &[&str] = &["Portocred", "Crefisa", "BMG", "Agibank"];

pub fn is_high_risk_lender(bank: &str) -> bool {
    HIGH_RISK_LENDERS.contains(&bank)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    VeryHigh,
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    PersonalLoan,
    Overdraft,
    Financing,
    Refinancing,
    Other,
}

impl DebtType {
    pub const ALL: [DebtType; 6] = [
        DebtType::CreditCard,
        DebtType::PersonalLoan,
        DebtType::Overdraft,
        DebtType::Financing,
        DebtType::Refinancing,
        DebtType::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DebtType::CreditCard => "credit_card",
            DebtType::PersonalLoan => "personal_loan",
            DebtType::Overdraft => "overdraft",
            DebtType::Financing => "financing",
            DebtType::Refinancing => "refinancing",
            DebtType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebtType::CreditCard => "💳 Credit card",
            DebtType::PersonalLoan => "💵 Personal loan",
            DebtType::Overdraft => "🏦 Overdraft",
            DebtType::Financing => "🏠 Financing",
            DebtType::Refinancing => "🔄 Refinancing",
            DebtType::Other => "📦 Other",
        }
    }

    pub fn risk_tier(self) -> RiskTier {
        match self {
            DebtType::CreditCard | DebtType::Overdraft => RiskTier::VeryHigh,
            DebtType::PersonalLoan | DebtType::Refinancing => RiskTier::High,
            DebtType::Financing | DebtType::Other => RiskTier::Medium,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// How long the debt has existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtDuration {
    UnderSixMonths,
    SixMonthsToOneYear,
    OneToTwoYears,
    TwoToFiveYears,
    OverFiveYears,
}

impl DebtDuration {
    pub const ALL: [DebtDuration; 5] = [
        DebtDuration::UnderSixMonths,
        DebtDuration::SixMonthsToOneYear,
        DebtDuration::OneToTwoYears,
        DebtDuration::TwoToFiveYears,
        DebtDuration::OverFiveYears,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DebtDuration::UnderSixMonths => "under_6_months",
            DebtDuration::SixMonthsToOneYear => "6_months_to_1_year",
            DebtDuration::OneToTwoYears => "1_to_2_years",
            DebtDuration::TwoToFiveYears => "2_to_5_years",
            DebtDuration::OverFiveYears => "over_5_years",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebtDuration::UnderSixMonths => "Less than 6 months",
            DebtDuration::SixMonthsToOneYear => "6 months to 1 year",
            DebtDuration::OneToTwoYears => "1 to 2 years",
            DebtDuration::TwoToFiveYears => "2 to 5 years",
            DebtDuration::OverFiveYears => "More than 5 years",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            DebtDuration::UnderSixMonths => 0.5,
            DebtDuration::SixMonthsToOneYear => 1.0,
            DebtDuration::OneToTwoYears => 1.5,
            DebtDuration::TwoToFiveYears => 2.0,
            DebtDuration::OverFiveYears => 2.5,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

/// Whether the user's name is on a credit-default registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeListing {
    Yes,
    No,
    Unsure,
}

impl NegativeListing {
    pub const ALL: [NegativeListing; 3] = [
        NegativeListing::Yes,
        NegativeListing::No,
        NegativeListing::Unsure,
    ];

    pub fn code(self) -> &'static str {
        match self {
            NegativeListing::Yes => "yes",
            NegativeListing::No => "no",
            NegativeListing::Unsure => "unsure",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NegativeListing::Yes => "✅ Yes, my name is listed",
            NegativeListing::No => "❌ No, it is not listed",
            NegativeListing::Unsure => "🤷 I don't know",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code)
    }
}

/// Outcome of the user's attempt to renegotiate with the lender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Renegotiation {
    TriedNoAgreement,
    AgreementDefaulted,
    NotTried,
}

impl Renegotiation {
    pub const ALL: [Renegotiation; 3] = [
        Renegotiation::TriedNoAgreement,
        Renegotiation::AgreementDefaulted,
        Renegotiation::NotTried,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Renegotiation::TriedNoAgreement => "tried_no_agreement",
            Renegotiation::AgreementDefaulted => "agreement_defaulted",
            Renegotiation::NotTried => "not_tried",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Renegotiation::TriedNoAgreement => "Yes, but we didn't reach an agreement",
            Renegotiation::AgreementDefaulted => "Yes, I made a deal but couldn't keep paying",
            Renegotiation::NotTried => "I haven't tried yet",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tiers_follow_catalog() {
        assert_eq!(DebtType::CreditCard.risk_tier(), RiskTier::VeryHigh);
        assert_eq!(DebtType::Overdraft.risk_tier(), RiskTier::VeryHigh);
        assert_eq!(DebtType::PersonalLoan.risk_tier(), RiskTier::High);
        assert_eq!(DebtType::Refinancing.risk_tier(), RiskTier::High);
        assert_eq!(DebtType::Financing.risk_tier(), RiskTier::Medium);
        assert_eq!(DebtType::Other.risk_tier(), RiskTier::Medium);
    }

    #[test]
    fn test_codes_resolve_back() {
        for t in DebtType::ALL {
            assert_eq!(DebtType::from_code(t.code()), Some(t));
        }
        for d in DebtDuration::ALL {
            assert_eq!(DebtDuration::from_code(d.code()), Some(d));
        }
        assert_eq!(DebtType::from_code("mortgage"), None);
    }

    #[test]
    fn test_high_risk_lenders_are_offered() {
        for lender in HIGH_RISK_LENDERS {
            assert!(BANKS.contains(lender));
        }
        assert!(is_high_risk_lender("Crefisa"));
        assert!(!is_high_risk_lender("Nubank"));
        assert!(!is_high_risk_lender("crefisa"));
    }
}
