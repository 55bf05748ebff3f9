use dioxus::prelude::*;

/// Labelled input with an inline validation message.
#[component]
pub fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let class = if error.is_some() {
        "field__input field__input--invalid"
    } else {
        "field__input"
    };

    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            input {
                class: "{class}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                oninput: move |e| on_input.call(e.value()),
            }
            if let Some(message) = error {
                span { class: "field__error", "{message}" }
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut visible = use_signal(|| false);
    let input_type = if visible() { "text" } else { "password" };
    let class = if error.is_some() {
        "field__input field__input--invalid"
    } else {
        "field__input"
    };

    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            div { class: "field__row",
                input {
                    class: "{class}",
                    r#type: "{input_type}",
                    value: "{value}",
                    disabled,
                    oninput: move |e| on_input.call(e.value()),
                }
                button {
                    class: "icon-btn field__toggle",
                    r#type: "button",
                    title: if visible() { "Hide password" } else { "Show password" },
                    onclick: move |_| visible.set(!visible()),
                    if visible() { "🙈" } else { "👁" }
                }
            }
            if let Some(message) = error {
                span { class: "field__error", "{message}" }
            }
        }
    }
}
