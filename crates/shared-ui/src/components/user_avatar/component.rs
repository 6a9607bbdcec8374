use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Round avatar for the signed-in user: the image when one is set,
/// otherwise the name's initials.
#[component]
pub fn UserAvatar(name: String, #[props(default)] image: Option<String>) -> Element {
    let fallback = initials(&name);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { class: "user-avatar", title: "{name}",
            if let Some(src) = image.clone() {
                prim::AvatarImage { class: "user-avatar-image", src: src }
            }
            prim::AvatarFallback { class: "user-avatar-fallback", "{fallback}" }
        }
    }
}
