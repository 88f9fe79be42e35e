use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

/// An `<input>` whose displayed value always comes from component state.
/// Edits are reported through `on_change` and only show up once the owner
/// writes them back into `value`.
#[derive(Props, PartialEq, Clone)]
pub struct ControlledInputProps {
    pub id: String,
    pub value: String,
    pub input_type: InputType,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ControlledInput(props: ControlledInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            name: "{props.id}",
            class: "input-field",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
