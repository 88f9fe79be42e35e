use crate::features::registration::types::*;
use crate::services::client::SignUpRequest;
use crate::services::errors::ValidationError;
use crate::utils::validation::{is_email, is_password};

/// Runs the submit guards in order and stops at the first failure:
/// passwords must match, then the email must be well-formed, then the
/// password must meet the complexity rules.
pub fn validate_submission(form: &SignUpForm) -> Result<SignUpRequest, ValidationError> {
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if !is_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_password(&form.password) {
        return Err(ValidationError::InvalidPassword);
    }

    Ok(form.sign_up_request())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            nickname: "x".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            ..SignUpForm::default()
        }
    }

    #[test]
    fn test_valid_form_produces_request() {
        let request = validate_submission(&form("user@example.com", "Abc1234!", "Abc1234!")).unwrap();
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.nickname, "x");
        assert_eq!(request.password, "Abc1234!");
    }

    #[test]
    fn test_mismatch_is_checked_first() {
        // Everything is wrong, but the mismatch guard wins
        let result = validate_submission(&form("not-an-email", "short", "other"));
        assert_eq!(result, Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_email_is_checked_before_password() {
        let result = validate_submission(&form("not-an-email", "short", "short"));
        assert_eq!(result, Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_invalid_password() {
        let result = validate_submission(&form("user@example.com", "abcdefgh", "abcdefgh"));
        assert_eq!(result, Err(ValidationError::InvalidPassword));
    }

    #[test]
    fn test_empty_form_fails_on_email() {
        // Two empty passwords match, so the email guard is the first to fail
        let result = validate_submission(&SignUpForm::default());
        assert_eq!(result, Err(ValidationError::InvalidEmail));
    }
}
