use thiserror::Error;

use crate::services::client::ClientError;

/// A failed submit guard. The `Display` text is what the user sees in the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("password and confirmation must match")]
    PasswordMismatch,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("invalid password format")]
    InvalidPassword,
}

/// Form fields a rejected submission resets to empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    ConfirmPassword,
}

impl ValidationError {
    pub fn fields_cleared(&self) -> &'static [FormField] {
        match self {
            ValidationError::PasswordMismatch => &[],
            ValidationError::InvalidEmail => &[FormField::Email],
            ValidationError::InvalidPassword => &[FormField::Password, FormField::ConfirmPassword],
        }
    }
}

/// A sign-up call that did not resolve, as surfaced to the user
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Remote(#[from] ClientError),
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "password and confirmation must match"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "invalid email format");
        assert_eq!(ValidationError::InvalidPassword.to_string(), "invalid password format");
    }

    #[test]
    fn test_fields_cleared() {
        assert!(ValidationError::PasswordMismatch.fields_cleared().is_empty());
        assert_eq!(ValidationError::InvalidEmail.fields_cleared(), &[FormField::Email]);
        assert_eq!(
            ValidationError::InvalidPassword.fields_cleared(),
            &[FormField::Password, FormField::ConfirmPassword]
        );
    }

    #[test]
    fn test_registration_error_is_transparent() {
        let err: RegistrationError = ClientError::NetworkError {
            message: "offline".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Network error: offline");
    }
}
