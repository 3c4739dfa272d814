use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use netroster::console::{
    form::{LoginField, LoginForm},
    wizard::{FormField, Wizard},
};

use crate::client::{
    components::{LoadingOverlay, TextField},
    router::Route,
    util::{
        notice,
        session::{sign_in, use_backend, use_session},
    },
};

#[component]
pub fn Login() -> Element {
    let backend = use_backend();
    let session = use_session();
    let navigator = use_navigator();

    let mut wizard = use_signal(Wizard::<LoginForm>::new);

    use_effect(move || {
        if session.read().is_authenticated() {
            navigator.replace(Route::Users {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = match wizard.write().begin_submit() {
            Ok(credentials) => credentials,
            Err(err) => {
                notice::alert(&err.to_string());
                return;
            }
        };

        let backend = backend.clone();
        spawn(async move {
            let result = sign_in(session, &backend, &credentials).await;
            wizard.write().finish_submit(&result);
            match result {
                Ok(()) => {
                    navigator.replace(Route::Users {});
                }
                Err(err) => {
                    tracing::warn!("login failed: {}", err);
                    notice::alert(&err.user_message());
                }
            }
        });
    };

    let state = wizard.read();

    rsx!(
        Title { "Login | Netroster" }
        Meta { name: "description", content: "Internet user administration console." }
        div { class: "min-h-screen flex items-center justify-center bg-base-200",
            if state.is_submitting() {
                LoadingOverlay {}
            }
            form { class: "card bg-base-100 shadow-sm w-full max-w-sm",
                onsubmit: submit,
                div { class: "card-body gap-4",
                    h2 { class: "card-title", "Login" }
                    for field in LoginField::ALL.iter().copied() {
                        TextField {
                            key: "{field.name()}",
                            label: field.label().to_string(),
                            value: state.value(field).to_string(),
                            input_type: if field == LoginField::Password { "password".to_string() } else { "email".to_string() },
                            required: true,
                            oninput: move |value: String| wizard.write().set(field, value),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: state.is_submitting(),
                        "Login"
                    }
                    p { class: "text-sm text-center",
                        "No account yet? "
                        Link { class: "link", to: Route::Register {}, "Register" }
                    }
                }
            }
        }
    )
}
