//! The summary card shown at the terminal step.

use serde::{Deserialize, Serialize};

use crate::{
    answers::Answers,
    contact::contact_link,
    prompt::Branding,
    scorer::{RiskLevel, RiskResult, score},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalAction {
    JudicialReview,
    MoralDamages,
    DoubleRefund,
    BalanceReduction,
    UrgentInjunction,
}

impl LegalAction {
    pub fn label(self) -> &'static str {
        match self {
            LegalAction::JudicialReview => "✅ Judicial review of interest and charges",
            LegalAction::MoralDamages => "✅ Compensation for moral damages caused by the listing",
            LegalAction::DoubleRefund => "✅ Double refund of abusive charges",
            LegalAction::BalanceReduction => "✅ Reduction of the balance to its fair value",
            LegalAction::UrgentInjunction => "✅ Urgent injunction to suspend collection",
        }
    }
}

/// Actions worth offering, gated by level, listing and growth.
pub fn recommended_actions(risk: &RiskResult, negatively_listed: bool) -> Vec<LegalAction> {
    let mut actions = Vec::new();
    if risk.level != RiskLevel::Low {
        actions.push(LegalAction::JudicialReview);
    }
    if negatively_listed {
        actions.push(LegalAction::MoralDamages);
    }
    if risk.growth_percent > 100 {
        actions.push(LegalAction::DoubleRefund);
    }
    actions.push(LegalAction::BalanceReduction);
    if risk.level == RiskLevel::High {
        actions.push(LegalAction::UrgentInjunction);
    }
    actions
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: LegalAction,
    pub label: String,
}

/// Copy that depends on the level only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCopy {
    pub badge: String,
    pub headline: String,
    pub summary: String,
}

pub fn level_copy(level: RiskLevel) -> LevelCopy {
    let (badge, headline, summary) = match level {
        RiskLevel::High => (
            "PRIORITY CASE",
            "⚠️ High likelihood of abusive interest",
            "We found strong signs of irregularities in your debt.",
        ),
        RiskLevel::Medium => (
            "REVIEW RECOMMENDED",
            "📋 Signs of irregularities",
            "Your debt shows characteristics that deserve a detailed legal review.",
        ),
        RiskLevel::Low => (
            "FREE CONSULTATION",
            "🔍 Review recommended",
            "Even with lower figures, a review may reveal improper charges.",
        ),
    };
    LevelCopy {
        badge: badge.to_string(),
        headline: headline.to_string(),
        summary: summary.to_string(),
    }
}

/// Display a normalised digit string, read as cents, as `R$ 1.234,56`.
/// Zero or unreadable amounts display as `—`.
pub fn format_brl(amount: Option<&str>) -> String {
    let cents = match amount.and_then(|a| a.parse::<u128>().ok()) {
        Some(c) if c > 0 => c,
        _ => return "—".to_string(),
    };
    let units = (cents / 100).to_string();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("R$ {},{:02}", grouped, cents % 100)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCard {
    pub level: RiskLevel,
    pub points: u32,
    #[serde(flatten)]
    pub copy: LevelCopy,
    pub growth_percent: i64,
    /// Growth above 100% is shown in the level's accent colour.
    pub growth_highlighted: bool,
    pub original_amount: String,
    pub current_amount: String,
    pub negatively_listed: bool,
    pub actions: Vec<Recommendation>,
    pub contact_link: String,
    pub follow_up: String,
    pub disclaimer: String,
}

impl ResultCard {
    pub fn build(answers: &Answers, branding: &Branding) -> Self {
        let risk = score(answers);
        let negatively_listed = answers.is_negatively_listed();
        let actions = recommended_actions(&risk, negatively_listed)
            .into_iter()
            .map(|action| Recommendation {
                action,
                label: action.label().to_string(),
            })
            .collect();

        Self {
            level: risk.level,
            points: risk.points,
            copy: level_copy(risk.level),
            growth_percent: risk.growth_percent,
            growth_highlighted: risk.growth_percent > 100,
            original_amount: format_brl(answers.original_amount.as_deref()),
            current_amount: format_brl(answers.current_amount.as_deref()),
            negatively_listed,
            actions,
            contact_link: contact_link(answers, branding),
            follow_up: "Our team will review your case and contact you within **24 business hours**."
                .to_string(),
            disclaimer: "Preliminary analysis. Does not constitute a legal opinion.".to_string(),
        }
    }
}
