use dioxus::prelude::*;

mod auth;
mod icons;
mod routes;
mod storage;
mod viewport;

use auth::AuthState;
use routes::Route;

const APP_BASE: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: APP_BASE }
        viewport::ViewportListener {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
