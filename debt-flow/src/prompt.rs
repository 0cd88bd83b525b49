//! What each step says and which input it exposes.
//!
//! [`prompt_for`] is a plain match over [`Step`]: it builds a descriptor and
//! never renders anything, so presentation layers decide how to show it.

use serde::{Deserialize, Serialize};

use crate::{
    answers::Answers,
    catalog::{BANKS, DebtDuration, DebtType, NegativeListing, Renegotiation},
    step::Step,
};

/// Names used in the assistant's copy and the contact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub assistant_name: String,
    pub firm_name: String,
    /// International dialling prefix prepended to the lead's phone number.
    pub country_code: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            assistant_name: "Juri".to_string(),
            firm_name: "Marques & Cunha Advogados".to_string(),
            country_code: "55".to_string(),
        }
    }
}

/// A button-style answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMode {
    Choices { options: Vec<Choice> },
    FreeText { placeholder: String },
    None,
}

impl InputMode {
    pub fn options(&self) -> &[Choice] {
        match self {
            InputMode::Choices { options } => options,
            _ => &[],
        }
    }
}

/// Bot messages to reveal for a step, then the input to expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPrompt {
    pub messages: Vec<String>,
    pub input: InputMode,
}

pub const WELCOME_ACCEPT: &str = "yes";

/// Options offered at a choice step. Empty for every other step.
pub fn choices_for(step: Step) -> Vec<Choice> {
    match step {
        Step::Welcome => vec![Choice::new("Yes, I want to know! →", WELCOME_ACCEPT)],
        Step::Bank => BANKS.iter().map(|b| Choice::new(*b, *b)).collect(),
        Step::DebtType => DebtType::ALL
            .iter()
            .map(|t| Choice::new(t.label(), t.code()))
            .collect(),
        Step::Duration => DebtDuration::ALL
            .iter()
            .map(|d| Choice::new(d.label(), d.code()))
            .collect(),
        Step::NegativeListing => NegativeListing::ALL
            .iter()
            .map(|n| Choice::new(n.label(), n.code()))
            .collect(),
        Step::RenegotiationAttempt => Renegotiation::ALL
            .iter()
            .map(|r| Choice::new(r.label(), r.code()))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn placeholder_for(step: Step) -> Option<&'static str> {
    match step {
        Step::OriginalAmount => Some("e.g. 5000"),
        Step::CurrentAmount => Some("e.g. 18000"),
        Step::Name => Some("Your full name"),
        Step::Phone => Some("Area code + number (e.g. 13999991234)"),
        _ => None,
    }
}

fn input_for(step: Step) -> InputMode {
    if let Some(placeholder) = placeholder_for(step) {
        return InputMode::FreeText {
            placeholder: placeholder.to_string(),
        };
    }
    let options = choices_for(step);
    if options.is_empty() {
        InputMode::None
    } else {
        InputMode::Choices { options }
    }
}

fn messages_for(step: Step, answers: &Answers, branding: &Branding) -> Vec<String> {
    match step {
        Step::Welcome => vec![
            format!(
                "Hi! I'm **{}**, the legal assistant at **{}**. 👋",
                branding.assistant_name, branding.firm_name
            ),
            "I'm here to help you find out whether your debt carries **abusive interest** and whether you are entitled to a judicial review.".to_string(),
            "It's just a few quick questions. Completely **free and confidential**. 🔒".to_string(),
            "Ready to start?".to_string(),
        ],
        Step::Bank => {
            vec!["Which **bank or financial institution** holds this debt?".to_string()]
        }
        Step::DebtType => vec![format!(
            "Got it! And what **type of debt** do you have with {}?",
            answers.bank.as_deref().unwrap_or("them")
        )],
        Step::OriginalAmount => vec![
            "What was the **original amount** of the debt? (how much you borrowed or spent on the card)".to_string(),
            "A rough number is fine, it doesn't need to be exact. 😊".to_string(),
        ],
        Step::CurrentAmount => {
            vec!["And what is the **amount the bank is charging today**?".to_string()]
        }
        Step::Duration => vec!["**How long** has this debt existed?".to_string()],
        Step::NegativeListing => vec![
            "Is your name **negatively listed** (SPC, Serasa or Boa Vista) because of this debt?"
                .to_string(),
        ],
        Step::RenegotiationAttempt => {
            vec!["Have you already tried to **renegotiate** this debt with the bank?".to_string()]
        }
        Step::Name => vec![
            "Great! I already have enough information to build your analysis. 📊".to_string(),
            "Before showing the result, I need a few details so our team can **get in touch with you**.".to_string(),
            "What is your **full name**?".to_string(),
        ],
        Step::Phone => vec![format!(
            "Nice to meet you, {}! Now tell me your **WhatsApp** number with area code:",
            answers.first_name().unwrap_or("")
        )],
        Step::Analyzing => vec!["Analyzing your debt details... ⚖️".to_string()],
        Step::Result => Vec::new(),
    }
}

/// Descriptor for entering `step` with the answers collected so far.
pub fn prompt_for(step: Step, answers: &Answers, branding: &Branding) -> StepPrompt {
    StepPrompt {
        messages: messages_for(step, answers, branding),
        input: input_for(step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::InputKind;

    #[test]
    fn test_each_step_exposes_one_input_mode() {
        let answers = Answers::default();
        let branding = Branding::default();
        for step in Step::ALL {
            let prompt = prompt_for(step, &answers, &branding);
            match (step.input_kind(), &prompt.input) {
                (InputKind::Choices, InputMode::Choices { options }) => {
                    assert!(!options.is_empty(), "{step} has no options")
                }
                (InputKind::FreeText, InputMode::FreeText { placeholder }) => {
                    assert!(!placeholder.is_empty())
                }
                (InputKind::Closed, InputMode::None) => {}
                (kind, input) => panic!("{step}: {kind:?} vs {input:?}"),
            }
        }
    }

    #[test]
    fn test_welcome_offers_single_option() {
        let options = choices_for(Step::Welcome);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, WELCOME_ACCEPT);
    }

    #[test]
    fn test_messages_reference_collected_answers() {
        let answers = Answers {
            bank: Some("Crefisa".to_string()),
            full_name: Some("Ana Paula Souza".to_string()),
            ..Default::default()
        };
        let branding = Branding::default();

        let debt_type = prompt_for(Step::DebtType, &answers, &branding);
        assert!(debt_type.messages[0].contains("Crefisa"));

        let phone = prompt_for(Step::Phone, &answers, &branding);
        assert!(phone.messages[0].starts_with("Nice to meet you, Ana!"));
    }

    #[test]
    fn test_welcome_uses_branding() {
        let branding = Branding {
            assistant_name: "Lia".to_string(),
            firm_name: "Costa Advocacia".to_string(),
            country_code: "55".to_string(),
        };
        let prompt = prompt_for(Step::Welcome, &Answers::default(), &branding);
        assert!(prompt.messages[0].contains("**Lia**"));
        assert!(prompt.messages[0].contains("**Costa Advocacia**"));
        assert_eq!(prompt.messages.len(), 4);
    }
}
