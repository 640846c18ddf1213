use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{
    CLAIM_RECIPIENT, CONTACT_REQUIRED_ERROR, EMPTY_FIELD, MIN_HANDLE_LENGTH, MIN_PHONE_LENGTH,
    NO_PRIZE_ERROR, TELEGRAM_LINK_BASE,
};
use crate::prize_table::Prize;

// Same reserved set as JavaScript's encodeURIComponent
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Contact details typed into the claim form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_contact"))]
pub struct ClaimRequest {
    pub name: String,
    pub handle: String,
    pub phone: String,
}

/// Either a usable TG handle or a usable phone number is enough.
pub fn validate_contact(request: &ClaimRequest) -> Result<(), ValidationError> {
    let handle_ok = request.handle.trim().chars().count() >= MIN_HANDLE_LENGTH;
    let phone_ok = request.phone.trim().chars().count() >= MIN_PHONE_LENGTH;

    if !handle_ok && !phone_ok {
        let mut err = ValidationError::new("contact_required");
        err.message = Some(CONTACT_REQUIRED_ERROR.into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClaimError {
    NoPrize,
    Invalid(ValidationErrors),
}

impl ClaimError {
    /// Text shown to the user in the blocking notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoPrize => NO_PRIZE_ERROR,
            Self::Invalid(_) => CONTACT_REQUIRED_ERROR,
        }
    }
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPrize => write!(f, "no prize has been resolved yet"),
            Self::Invalid(errors) => write!(f, "invalid contact details: {}", errors),
        }
    }
}

impl std::error::Error for ClaimError {}

impl From<ValidationErrors> for ClaimError {
    fn from(errors: ValidationErrors) -> Self {
        ClaimError::Invalid(errors)
    }
}

/// A validated claim, ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub message: String,
    pub link: String,
}

fn or_dash(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}

pub fn compose_message(prize: &Prize, request: &ClaimRequest) -> String {
    format!(
        "🎡 Заявка на приз\n🎁 Приз: {}\n👤 Имя: {}\n💬 TG: {}\n📞 Телефон: {}",
        prize.text,
        or_dash(&request.name),
        or_dash(&request.handle),
        or_dash(&request.phone),
    )
}

pub fn claim_link(recipient: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        TELEGRAM_LINK_BASE,
        recipient,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Validates the form against the resolved prize and builds the outbound link.
pub fn prepare_claim(prize: Option<&Prize>, request: &ClaimRequest) -> Result<Claim, ClaimError> {
    let prize = prize.ok_or(ClaimError::NoPrize)?;
    request.validate()?;

    let message = compose_message(prize, request);
    let link = claim_link(CLAIM_RECIPIENT, &message);
    Ok(Claim { message, link })
}
