use dioxus::prelude::*;

use crate::components::{
    display::InfoMessage,
    input::{ControlledInput, InputType},
};
use crate::features::registration::*;
use crate::services::client::SharedSignUpService;
use crate::utils::platform::BrowserAlert;

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormProps {
    pub state: Signal<SignUpForm>,
    pub dispatch: EventHandler<SignUpAction>,
    pub service: SharedSignUpService,
}

#[component]
pub fn RegistrationForm(props: RegistrationFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let service = props.service;

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        // No in-flight flag: every valid submit sends its own request
        let dispatch_action = move |action: SignUpAction| dispatch.call(action);
        if let Some(call) =
            begin_submission(&state(), &dispatch_action, service.clone(), BrowserAlert)
        {
            spawn(async move {
                // Outcome is already logged and alerted by the call itself
                let _ = call.await;
            });
        }
    };

    rsx! {
        form {
            class: "sign-up-form",
            onsubmit: on_submit,

            h2 {
                class: "form-title",
                "Sign Up"
            }

            // Nickname
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "nickname",
                    "Nickname"
                }
                div {
                    class: "input-row",
                    ControlledInput {
                        id: "nickname".to_string(),
                        value: state().nickname,
                        input_type: InputType::Text,
                        on_change: move |value: String| dispatch.call(SignUpAction::SetNickname(value))
                    }
                    // Availability check is not wired up
                    button {
                        class: "secondary-button",
                        r#type: "button",
                        "Check nickname"
                    }
                }
            }

            // Email
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "email",
                    "Email"
                }
                div {
                    class: "input-row",
                    ControlledInput {
                        id: "email".to_string(),
                        value: state().email,
                        input_type: InputType::Email,
                        on_change: move |value: String| dispatch.call(SignUpAction::SetEmail(value))
                    }
                    button {
                        class: "secondary-button",
                        r#type: "button",
                        "Send verification email"
                    }
                }
                p {
                    class: "input-hint",
                    "Enter the email address you use to receive a verification code."
                }
                InfoMessage {
                    message: state().info_message
                }
            }

            // Verification code
            div {
                class: "input-section",
                div {
                    class: "input-row",
                    ControlledInput {
                        id: "email-auth-code".to_string(),
                        value: state().email_auth_code,
                        input_type: InputType::Text,
                        on_change: move |value: String| dispatch.call(SignUpAction::SetEmailAuthCode(value))
                    }
                    button {
                        class: "secondary-button",
                        r#type: "button",
                        "Verify code"
                    }
                }
            }

            // Password
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "password",
                    "Password"
                }
                ControlledInput {
                    id: "password".to_string(),
                    value: state().password,
                    input_type: InputType::Password,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetPassword(value))
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "confirm-password",
                    "Confirm password"
                }
                ControlledInput {
                    id: "confirm-password".to_string(),
                    value: state().confirm_password,
                    input_type: InputType::Password,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetConfirmPassword(value))
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "submit",
                    "Sign up"
                }
            }
        }
    }
}
