use dioxus::prelude::*;

/// Catch-all for paths outside the registry. The access guard redirects
/// these before they mount, so this only shows if that ever changes.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "screen",
            h2 { class: "screen-title", "Page Not Found" }
            p { class: "screen-summary",
                "The page "
                code { "{path}" }
                " could not be found."
            }
        }
    }
}
