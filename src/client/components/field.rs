use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] required: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text mb-1",
                "{label}"
                if required {
                    span { class: "text-error", " *" }
                }
            }
            input {
                class: "input input-bordered w-full",
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    )
}

/// Dropdown over `(value, label)` pairs, led by a `placeholder` entry with an empty value.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    placeholder: String,
    #[props(default)] required: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text mb-1",
                "{label}"
                if required {
                    span { class: "text-error", " *" }
                }
            }
            select {
                class: "select select-bordered w-full",
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    )
}
