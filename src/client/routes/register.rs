use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use netroster::{
    api::Backend,
    console::{
        form::{RegistrationField, RegistrationForm},
        wizard::{FormField, Wizard},
    },
    model::account::SystemUser,
};

use crate::client::{
    components::{LoadingOverlay, TextField},
    router::Route,
    util::{notice, session::use_backend},
};

#[component]
pub fn Register() -> Element {
    let backend = use_backend();
    let navigator = use_navigator();

    let mut wizard = use_signal(Wizard::<RegistrationForm>::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let account = match wizard.write().begin_submit() {
            Ok(account) => account,
            Err(err) => {
                notice::alert(&err.to_string());
                return;
            }
        };

        let backend = backend.clone();
        spawn(async move {
            let result = backend.create::<SystemUser>(&account).await;
            wizard.write().finish_submit(&result);
            match result {
                Ok(user) => {
                    tracing::info!(id = %user.id, "operator registered");
                    notice::alert("Registration successful! Please log in.");
                    navigator.push(Route::Login {});
                }
                Err(err) => notice::alert(&err.user_message()),
            }
        });
    };

    let state = wizard.read();

    rsx!(
        Title { "Register | Netroster" }
        div { class: "min-h-screen flex items-center justify-center bg-base-200",
            if state.is_submitting() {
                LoadingOverlay {}
            }
            form { class: "card bg-base-100 shadow-sm w-full max-w-sm",
                onsubmit: submit,
                div { class: "card-body gap-4",
                    h2 { class: "card-title", "Create Account" }
                    for field in RegistrationField::ALL.iter().copied() {
                        TextField {
                            key: "{field.name()}",
                            label: field.label().to_string(),
                            value: state.value(field).to_string(),
                            input_type: match field {
                                RegistrationField::Name => "text".to_string(),
                                RegistrationField::Email => "email".to_string(),
                                _ => "password".to_string(),
                            },
                            required: true,
                            oninput: move |value: String| wizard.write().set(field, value),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: state.is_submitting(),
                        "Register"
                    }
                    p { class: "text-sm text-center",
                        "Already registered? "
                        Link { class: "link", to: Route::Login {}, "Login" }
                    }
                }
            }
        }
    )
}
