use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::BookingDraft;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// Optional leading +, then 7-15 digits, spaces or hyphens.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s-]{7,15}$").expect("valid phone pattern"));

/// A step guard failed. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a service option.")]
    MissingService,

    #[error("Please select both a date and a time.")]
    MissingDateTime,

    #[error("All contact fields are required.")]
    MissingContact,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate_service(draft: &BookingDraft) -> Result<(), ValidationError> {
    match draft.service() {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingService),
    }
}

pub fn validate_date_time(draft: &BookingDraft) -> Result<(), ValidationError> {
    if draft.date.is_empty() || draft.time.is_empty() {
        return Err(ValidationError::MissingDateTime);
    }
    Ok(())
}

/// Checked in order: presence, then email, then phone.
pub fn validate_contact(draft: &BookingDraft) -> Result<(), ValidationError> {
    if draft.name.is_empty() || draft.email.is_empty() || draft.phone.is_empty() {
        return Err(ValidationError::MissingContact);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&draft.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    fn contact(name: &str, email: &str, phone: &str) -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.name = name.to_string();
        draft.email = email.to_string();
        draft.phone = phone.to_string();
        draft
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("amine@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.tn"));

        assert!(!is_valid_email("amine@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("amine@.com"));
        assert!(!is_valid_email("amine example@test.com"));
        assert!(!is_valid_email("amine@@example.com"));
        assert!(!is_valid_email("amine@example."));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("+21650112233"));
        assert!(is_valid_phone("50112233"));
        assert!(is_valid_phone("50 112 233"));
        assert!(is_valid_phone("50-112-233"));
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("123456789012345"));

        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("++21650112233"));
        assert!(!is_valid_phone("2165011223a"));
        assert!(!is_valid_phone("(216) 5011223"));
    }

    #[test]
    fn test_service_required() {
        let mut draft = BookingDraft::default();
        assert_eq!(validate_service(&draft), Err(ValidationError::MissingService));
        draft.select_service(Service::WithoutTraining);
        assert_eq!(validate_service(&draft), Ok(()));
    }

    #[test]
    fn test_date_and_time_both_required() {
        let mut draft = BookingDraft::default();
        assert_eq!(validate_date_time(&draft), Err(ValidationError::MissingDateTime));
        draft.date = "2025-06-01".to_string();
        assert_eq!(validate_date_time(&draft), Err(ValidationError::MissingDateTime));
        draft.date.clear();
        draft.time = "18:00".to_string();
        assert_eq!(validate_date_time(&draft), Err(ValidationError::MissingDateTime));
        draft.date = "2025-06-01".to_string();
        assert_eq!(validate_date_time(&draft), Ok(()));
    }

    #[test]
    fn test_contact_presence_checked_first() {
        let draft = contact("", "not-an-email", "x");
        assert_eq!(validate_contact(&draft), Err(ValidationError::MissingContact));
    }

    #[test]
    fn test_contact_email_before_phone() {
        let draft = contact("Amine", "amine.example.com", "x");
        assert_eq!(validate_contact(&draft), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_contact_bad_phone() {
        let draft = contact("Amine", "amine@example.com", "12ab");
        assert_eq!(validate_contact(&draft), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_contact_valid() {
        let draft = contact("Amine", "amine@example.com", "+21650112233");
        assert_eq!(validate_contact(&draft), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingContact.to_string(),
            "All contact fields are required."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number."
        );
    }
}
