// Core types for the sign-up form - no dioxus imports needed here
use crate::services::client::SignUpRequest;
use crate::services::errors::{FormField, ValidationError};

/// Field values of the sign-up screen. Lives as long as the mounted page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub nickname: String,
    pub email: String,
    /// Captured from the verification-code input but never validated or sent
    pub email_auth_code: String,
    pub password: String,
    pub confirm_password: String,
    /// Display-only status line under the email field
    pub info_message: String,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SignUpAction {
    SetNickname(String),
    SetEmail(String),
    SetEmailAuthCode(String),
    SetPassword(String),
    SetConfirmPassword(String),
    SetInfoMessage(String),

    // A submit guard failed; reset whatever that guard clears
    RejectSubmission(ValidationError),
}

impl SignUpForm {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: SignUpAction) {
        match action {
            SignUpAction::SetNickname(nickname) => {
                self.nickname = nickname;
            }
            SignUpAction::SetEmail(email) => {
                self.email = email;
            }
            SignUpAction::SetEmailAuthCode(code) => {
                self.email_auth_code = code;
            }
            SignUpAction::SetPassword(password) => {
                self.password = password;
            }
            SignUpAction::SetConfirmPassword(password) => {
                self.confirm_password = password;
            }
            SignUpAction::SetInfoMessage(message) => {
                self.info_message = message;
            }
            SignUpAction::RejectSubmission(error) => {
                for field in error.fields_cleared() {
                    self.clear(*field);
                }
            }
        }
    }

    fn clear(&mut self, field: FormField) {
        match field {
            FormField::Email => self.email.clear(),
            FormField::Password => self.password.clear(),
            FormField::ConfirmPassword => self.confirm_password.clear(),
        }
    }

    /// Payload for the sign-up call. The verification code is not part of it.
    pub fn sign_up_request(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.email.clone(),
            nickname: self.nickname.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignUpForm {
        SignUpForm {
            nickname: "x".to_string(),
            email: "user@example.com".to_string(),
            email_auth_code: "123456".to_string(),
            password: "Abc1234!".to_string(),
            confirm_password: "Abc1234!".to_string(),
            info_message: String::new(),
        }
    }

    #[test]
    fn test_setters_store_values_verbatim() {
        let mut form = SignUpForm::default();

        form.reduce_in_place(SignUpAction::SetNickname("  nick  ".to_string()));
        form.reduce_in_place(SignUpAction::SetEmail(" user@example.com".to_string()));
        form.reduce_in_place(SignUpAction::SetEmailAuthCode("00 11".to_string()));
        form.reduce_in_place(SignUpAction::SetPassword("pass word".to_string()));
        form.reduce_in_place(SignUpAction::SetConfirmPassword("pass word ".to_string()));
        form.reduce_in_place(SignUpAction::SetInfoMessage("hello".to_string()));

        assert_eq!(form.nickname, "  nick  ");
        assert_eq!(form.email, " user@example.com");
        assert_eq!(form.email_auth_code, "00 11");
        assert_eq!(form.password, "pass word");
        assert_eq!(form.confirm_password, "pass word ");
        assert_eq!(form.info_message, "hello");
    }

    #[test]
    fn test_reject_mismatch_keeps_fields() {
        let mut form = filled_form();
        form.confirm_password = "Abc1234!!".to_string();
        let before = form.clone();

        form.reduce_in_place(SignUpAction::RejectSubmission(ValidationError::PasswordMismatch));
        assert_eq!(form, before);
    }

    #[test]
    fn test_reject_invalid_email_clears_email_only() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();

        form.reduce_in_place(SignUpAction::RejectSubmission(ValidationError::InvalidEmail));
        assert_eq!(form.email, "");
        assert_eq!(form.nickname, "x");
        assert_eq!(form.password, "Abc1234!");
        assert_eq!(form.confirm_password, "Abc1234!");
        assert_eq!(form.email_auth_code, "123456");
    }

    #[test]
    fn test_reject_invalid_password_clears_both_passwords() {
        let mut form = filled_form();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();

        form.reduce_in_place(SignUpAction::RejectSubmission(ValidationError::InvalidPassword));
        assert_eq!(form.password, "");
        assert_eq!(form.confirm_password, "");
        assert_eq!(form.email, "user@example.com");
        assert_eq!(form.nickname, "x");
    }

    #[test]
    fn test_sign_up_request_excludes_auth_code() {
        let request = filled_form().sign_up_request();
        assert_eq!(
            request,
            SignUpRequest {
                email: "user@example.com".to_string(),
                nickname: "x".to_string(),
                password: "Abc1234!".to_string(),
            }
        );
    }
}
