use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct InfoMessageProps {
    pub message: String,
}

/// Status line shown under the email field. Renders an empty paragraph when
/// there is nothing to say so the layout does not shift.
#[component]
pub fn InfoMessage(props: InfoMessageProps) -> Element {
    rsx! {
        p {
            class: "info-message",
            "{props.message}"
        }
    }
}
