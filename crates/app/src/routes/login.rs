use crate::auth::use_auth;
use crate::routes::route_for;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shell::{Authenticator, HttpAuthenticator};
use shared_ui::{use_toast, FormField, ToastOptions};

/// Username/password sign-in. On success the shell redirects to the
/// role's home; on failure a notification shows the server's reason.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let authenticating = auth.shell.read().is_authenticating();

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        let request = LoginRequest::new(username().trim(), password());
        if let Err(e) = request.validate() {
            toast.error(e.friendly_message(), ToastOptions::new());
            return;
        }

        let mut shell = auth.shell;
        if !shell.write().begin_login() {
            return;
        }
        error_msg.set(None);

        let authenticator = HttpAuthenticator::new(&shell::config::load().auth);
        let result = authenticator.authenticate(&request).await;

        let outcome = shell.write().apply_login_result(result);
        match outcome {
            Ok(decision) => {
                let role = auth.shell.read().session().role();
                toast.success(role.welcome_message(), ToastOptions::new());
                password.set(String::new());
                navigator().replace(route_for(decision.target_path()));
            }
            Err(e) => {
                let message = e.friendly_message();
                toast.error(message.clone(), ToastOptions::new());
                error_msg.set(Some(message));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-header",
                    h1 { class: "auth-title", "Sign In" }
                    p { class: "auth-description", "Enter your credentials to access the dashboard" }
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", role: "alert", "{err}" }
                }

                form { onsubmit: handle_login,
                    FormField {
                        id: "username",
                        label: "Username",
                        autocomplete: "username",
                        required: true,
                        disabled: authenticating,
                        value: username(),
                        on_input: move |e: FormEvent| username.set(e.value()),
                    }
                    FormField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        autocomplete: "current-password",
                        required: true,
                        disabled: authenticating,
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: authenticating,
                        if authenticating { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
