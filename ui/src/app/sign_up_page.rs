use dioxus::prelude::*;

use crate::features::registration::{SignUpAction, SignUpForm};
use crate::services::client::{ClientResult, HttpSignUpService, SharedSignUpService};
use crate::services::config::SignUpConfig;
use crate::{console_error, console_info};

#[cfg(feature = "web")]
use crate::components::forms::RegistrationForm;

const SIGN_UP_CSS: Asset = asset!("/assets/styling/sign_up.css");

/// Render the sign-up form based on feature flags
fn render_sign_up_form(
    state: Signal<SignUpForm>,
    dispatch: EventHandler<SignUpAction>,
    service: SharedSignUpService,
) -> Element {
    #[cfg(feature = "web")]
    {
        rsx! {
            RegistrationForm {
                state: state,
                dispatch: dispatch,
                service: service
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = (state, dispatch, service);
        rsx! {
            div { "Sign-up form not available for non-web features" }
        }
    }
}

fn default_service() -> ClientResult<SharedSignUpService> {
    let config = SignUpConfig::default();
    console_info!("[SignUp] Using sign-up endpoint {}", config.sign_up_url());
    HttpSignUpService::new(&config).map(SharedSignUpService::new)
}

#[derive(Props, PartialEq, Clone)]
pub struct SignUpPageProps {
    /// Overrides the HTTP-backed service built from [`SignUpConfig`]
    #[props(default)]
    pub service: Option<SharedSignUpService>,
}

#[component]
pub fn SignUpPage(props: SignUpPageProps) -> Element {
    // Fresh form state for every mount
    let mut state = use_signal(SignUpForm::default);

    let service = use_hook(move || match props.service {
        Some(service) => Ok(service),
        None => default_service(),
    });

    // In-place reduction keeps the Signal reactive
    let dispatch = EventHandler::new(move |action: SignUpAction| {
        state.with_mut(|form| {
            form.reduce_in_place(action);
        });
    });

    let content = match service {
        Ok(service) => render_sign_up_form(state, dispatch, service),
        Err(e) => {
            console_error!("[SignUp] Could not create sign-up client: {}", e);
            rsx! {
                div {
                    class: "sign-up-unavailable",
                    "Sign-up is currently unavailable: {e}"
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SIGN_UP_CSS }

        div {
            class: "sign-up-container",
            {content}
        }
    }
}
