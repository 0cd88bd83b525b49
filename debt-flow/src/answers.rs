use serde::{Deserialize, Serialize};

use crate::catalog::{DebtDuration, DebtType, NegativeListing, Renegotiation};

/// Everything the user has told the assistant so far.
///
/// Each collecting step writes exactly one field. Amounts are kept as the
/// normalised digit strings produced by [`normalize_amount`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answers {
    pub bank: Option<String>,
    pub debt_type: Option<DebtType>,
    pub original_amount: Option<String>,
    pub current_amount: Option<String>,
    pub duration: Option<DebtDuration>,
    pub negative_listing: Option<NegativeListing>,
    pub renegotiation: Option<Renegotiation>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl Answers {
    pub fn first_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .and_then(|name| name.split(' ').next())
    }

    pub fn is_negatively_listed(&self) -> bool {
        self.negative_listing == Some(NegativeListing::Yes)
    }
}

/// Strip every non-digit character, then right-pad with zeros to at least
/// three digits. `"50"` becomes `"500"`; the result is read as cents.
pub fn normalize_amount(text: &str) -> String {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{digits:0<3}")
}

/// Keep only the ASCII digits of `text`.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pads_short_amounts() {
        assert_eq!(normalize_amount("50"), "500");
        assert_eq!(normalize_amount("5"), "500");
        assert_eq!(normalize_amount("5000"), "5000");
        assert_eq!(normalize_amount("100"), "100");
    }

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize_amount("R$ 1.500,00"), "150000");
        assert_eq!(normalize_amount("about 18k"), "180");
        assert_eq!(normalize_amount("no idea"), "000");
    }

    #[test]
    fn test_first_name() {
        let answers = Answers {
            full_name: Some("Maria da Silva".to_string()),
            ..Default::default()
        };
        assert_eq!(answers.first_name(), Some("Maria"));
        assert_eq!(Answers::default().first_name(), None);
    }
}
