use dioxus::prelude::*;
use shared_types::ViewportClass;

use crate::auth::use_auth;

/// Reports the window width on mount and on every resize.
const RESIZE_LISTENER_JS: &str = r#"
    dioxus.send(window.innerWidth);
    window.addEventListener("resize", () => dioxus.send(window.innerWidth));
"#;

/// Feeds viewport width changes into the shell. Renders nothing.
#[component]
pub fn ViewportListener() -> Element {
    let auth = use_auth();

    use_hook(move || {
        let mut shell = auth.shell;
        spawn(async move {
            let mut eval = document::eval(RESIZE_LISTENER_JS);
            loop {
                match eval.recv::<f64>().await {
                    Ok(width) => {
                        let width = width.max(0.0) as u32;
                        // Only breakpoint crossings change anything.
                        let current = shell.peek().layout_state().viewport_class;
                        if current != Some(ViewportClass::from_width(width)) {
                            shell.write().on_viewport_change(width);
                        }
                    }
                    Err(e) => {
                        tracing::debug!("viewport listener stopped: {e}");
                        break;
                    }
                }
            }
        });
    });

    rsx! {}
}
