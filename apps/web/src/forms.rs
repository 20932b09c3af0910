//! Contact form model and validation.
//!
//! Rules run in a fixed order and every violation is collected, so a user
//! fixing the form sees the full list at once rather than one error per
//! round trip.

use serde::Deserialize;

pub const ERR_NAME_REQUIRED: &str = "Name is required";
pub const ERR_EMAIL_REQUIRED: &str = "Valid email is required";
pub const ERR_MESSAGE_REQUIRED: &str = "Message is required";

/// Raw form fields as posted. Absent fields deserialize to empty strings so
/// a partially filled form never fails extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Copy with surrounding whitespace stripped from every field, used to
    /// echo values back into a rejected form.
    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// A validated submission. Transient: logged and discarded, never persisted.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// Optional; empty when the sender left it blank.
    pub subject: String,
    pub message: String,
}

/// Validates a contact form after trimming. Checks run in {name, email,
/// message} order and all violations are returned together.
///
/// The email rule is deliberately weak: non-empty and contains `@`. That is
/// the entire check.
pub fn validate_contact(form: &ContactForm) -> Result<ContactSubmission, Vec<String>> {
    let form = form.trimmed();
    let mut errors = Vec::new();

    if form.name.is_empty() {
        errors.push(ERR_NAME_REQUIRED.to_string());
    }
    if form.email.is_empty() || !form.email.contains('@') {
        errors.push(ERR_EMAIL_REQUIRED.to_string());
    }
    if form.message.is_empty() {
        errors.push(ERR_MESSAGE_REQUIRED.to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: form.name,
        email: form.email,
        subject: form.subject,
        message: form.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let submission = validate_contact(&form("Test User", "test@example.com", "hi")).unwrap();
        assert_eq!(submission.name, "Test User");
        assert_eq!(submission.subject, "");
    }

    #[test]
    fn test_missing_name() {
        let errors = validate_contact(&form("", "test@example.com", "hi")).unwrap_err();
        assert_eq!(errors, vec![ERR_NAME_REQUIRED]);
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let errors = validate_contact(&form("   ", "test@example.com", "hi")).unwrap_err();
        assert_eq!(errors, vec![ERR_NAME_REQUIRED]);
    }

    #[test]
    fn test_missing_email() {
        let errors = validate_contact(&form("Test", "", "hi")).unwrap_err();
        assert_eq!(errors, vec![ERR_EMAIL_REQUIRED]);
    }

    #[test]
    fn test_email_without_at_sign_rejected() {
        let errors = validate_contact(&form("Test", "invalid-email", "hi")).unwrap_err();
        assert_eq!(errors, vec![ERR_EMAIL_REQUIRED]);
    }

    #[test]
    fn test_any_string_with_at_sign_accepted() {
        // The check is `@` containment only, nothing stricter.
        assert!(validate_contact(&form("Test", "a@", "hi")).is_ok());
        assert!(validate_contact(&form("Test", "@", "hi")).is_ok());
    }

    #[test]
    fn test_missing_message() {
        let errors = validate_contact(&form("Test", "test@example.com", "")).unwrap_err();
        assert_eq!(errors, vec![ERR_MESSAGE_REQUIRED]);
    }

    #[test]
    fn test_all_violations_collected_in_order() {
        let errors = validate_contact(&form("", "nope", "  ")).unwrap_err();
        assert_eq!(
            errors,
            vec![ERR_NAME_REQUIRED, ERR_EMAIL_REQUIRED, ERR_MESSAGE_REQUIRED]
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let submission =
            validate_contact(&form("  Test User  ", " test@example.com ", " hi ")).unwrap();
        assert_eq!(submission.name, "Test User");
        assert_eq!(submission.email, "test@example.com");
        assert_eq!(submission.message, "hi");
    }

    #[test]
    fn test_trimmed_echo() {
        let echo = form("  Ada  ", " a@b ", " text ").trimmed();
        assert_eq!(echo.name, "Ada");
        assert_eq!(echo.email, "a@b");
        assert_eq!(echo.message, "text");
    }
}
