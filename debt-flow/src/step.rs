use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the questionnaire. Steps only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Welcome,
    Bank,
    DebtType,
    OriginalAmount,
    CurrentAmount,
    Duration,
    NegativeListing,
    RenegotiationAttempt,
    Name,
    Phone,
    Analyzing,
    Result,
}

/// Which input affordance a step exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Choices,
    FreeText,
    Closed,
}

impl InputKind {
    pub fn describe(self) -> &'static str {
        match self {
            InputKind::Choices => "choice",
            InputKind::FreeText => "text",
            InputKind::Closed => "no",
        }
    }
}

impl Step {
    pub const ALL: [Step; 12] = [
        Step::Welcome,
        Step::Bank,
        Step::DebtType,
        Step::OriginalAmount,
        Step::CurrentAmount,
        Step::Duration,
        Step::NegativeListing,
        Step::RenegotiationAttempt,
        Step::Name,
        Step::Phone,
        Step::Analyzing,
        Step::Result,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::Bank => "bank",
            Step::DebtType => "debt_type",
            Step::OriginalAmount => "original_amount",
            Step::CurrentAmount => "current_amount",
            Step::Duration => "duration",
            Step::NegativeListing => "negative_listing",
            Step::RenegotiationAttempt => "renegotiation_attempt",
            Step::Name => "name",
            Step::Phone => "phone",
            Step::Analyzing => "analyzing",
            Step::Result => "result",
        }
    }

    /// The step that follows this one, `None` at the terminal step.
    pub fn next(self) -> Option<Step> {
        let position = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(position + 1).copied()
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Step::Welcome
            | Step::Bank
            | Step::DebtType
            | Step::Duration
            | Step::NegativeListing
            | Step::RenegotiationAttempt => InputKind::Choices,
            Step::OriginalAmount | Step::CurrentAmount | Step::Name | Step::Phone => {
                InputKind::FreeText
            }
            Step::Analyzing | Step::Result => InputKind::Closed,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Result
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_advance_in_order() {
        let mut step = Step::Welcome;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            visited.push(next);
            step = next;
        }
        assert_eq!(visited, Step::ALL.to_vec());
        assert!(step.is_terminal());
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(Step::Welcome.input_kind(), InputKind::Choices);
        assert_eq!(Step::OriginalAmount.input_kind(), InputKind::FreeText);
        assert_eq!(Step::Phone.input_kind(), InputKind::FreeText);
        assert_eq!(Step::Analyzing.input_kind(), InputKind::Closed);
        assert_eq!(Step::Result.input_kind(), InputKind::Closed);
    }

    #[test]
    fn test_serialized_names_match_display() {
        for step in Step::ALL {
            let json = serde_json::to_value(step).unwrap();
            assert_eq!(json, serde_json::Value::String(step.to_string()));
        }
    }
}
