use crate::{
    answers::{Answers, digits_only},
    prompt::Branding,
};

/// WhatsApp deep link that opens a chat with the lead, prefilled with a
/// greeting from the firm.
pub fn contact_link(answers: &Answers, branding: &Branding) -> String {
    let phone = answers.phone.as_deref().map(digits_only).unwrap_or_default();
    let greeting = format!(
        "Hello {}, this is the {} team. We have just seen the result of your debt analysis. Can we talk?",
        answers.first_name().unwrap_or(""),
        branding.firm_name
    );
    format!(
        "https://wa.me/{}{}?text={}",
        branding.country_code,
        phone,
        urlencoding::encode(&greeting)
    )
}
