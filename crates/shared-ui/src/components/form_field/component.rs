use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// A labelled text input.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] autocomplete: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "form-field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field",
            prim::Label { class: "form-field-label", html_for: id.clone(), "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autocomplete: autocomplete,
                required: required,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
