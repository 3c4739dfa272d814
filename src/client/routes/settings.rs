use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use netroster::{
    api::Backend,
    console::{
        form::{ProfileField, ProfileForm},
        wizard::{FormField, Wizard},
    },
    error::ApiError,
    model::account::{SessionUser, SystemUser},
};

use crate::client::{
    components::{LoadingOverlay, Page, TextField},
    util::{
        notice,
        session::{use_backend, use_request_scope, use_session},
    },
};

fn profile_of(user: &SystemUser) -> Wizard<ProfileForm> {
    Wizard::with_form(ProfileForm {
        name: user.name.clone(),
        email: user.email.clone(),
        password: String::new(),
    })
}

#[component]
pub fn Settings() -> Element {
    let backend = use_backend();
    let scope = use_request_scope();
    let mut session = use_session();

    let mut wizard = use_signal(Wizard::<ProfileForm>::new);
    let mut load_error = use_signal(|| None::<String>);
    let id = session.read().user_id().cloned();
    let has_id = id.is_some();

    use_future({
        let backend = backend.clone();
        let scope = scope.clone();
        let id = id.clone();
        move || {
            let backend = backend.clone();
            let scope = scope.clone();
            let id = id.clone();
            async move {
                let Some(id) = id else {
                    tracing::error!("User ID not found");
                    load_error.set(Some("User ID not found.".to_string()));
                    return;
                };
                match scope.run(backend.get::<SystemUser>(&id)).await {
                    Ok(user) => wizard.set(profile_of(&user)),
                    Err(ApiError::Cancelled) => {}
                    Err(err) => {
                        tracing::error!(id = %id, "{}", err);
                        load_error.set(Some(err.user_message()));
                    }
                }
            }
        }
    });

    let submit = move |_: MouseEvent| {
        let Some(id) = id.clone() else {
            tracing::error!("User ID not found");
            return;
        };
        let patch = match wizard.write().begin_submit() {
            Ok(patch) => patch,
            Err(err) => {
                notice::alert(&err.to_string());
                return;
            }
        };

        let backend = backend.clone();
        let scope = scope.clone();
        spawn(async move {
            let result = scope.run(backend.update::<SystemUser>(&id, &patch)).await;
            if result.as_ref().is_err_and(ApiError::is_cancelled) {
                return;
            }
            wizard.write().finish_submit(&result);
            match result {
                Ok(user) => {
                    wizard.set(profile_of(&user));
                    let refreshed = session.read().current_user().map(|current| SessionUser {
                        name: user.name.clone(),
                        email: user.email.clone(),
                        ..current.clone()
                    });
                    if let Some(refreshed) = refreshed {
                        if let Err(err) = session.write().login(refreshed) {
                            tracing::error!("{}", err);
                        }
                    }
                    notice::alert("Profile updated successfully.");
                }
                Err(err) => notice::alert(&err.user_message()),
            }
        });
    };

    let state = wizard.read();

    rsx!(
        Title { "Settings | Netroster" }
        Page { title: "Profile Settings",
            if state.is_submitting() {
                LoadingOverlay {}
            }
            if let Some(error) = load_error() {
                div { class: "alert alert-error", "{error}" }
            }
            div { class: "card bg-base-100 shadow-sm max-w-xl",
                div { class: "card-body gap-4",
                    for field in ProfileField::ALL.iter().copied() {
                        TextField {
                            key: "{field.name()}",
                            label: field.label().to_string(),
                            value: state.value(field).to_string(),
                            input_type: if field == ProfileField::Password { "password".to_string() } else { "text".to_string() },
                            required: field != ProfileField::Password,
                            oninput: move |value: String| wizard.write().set(field, value),
                        }
                    }
                    p { class: "text-xs opacity-70", "Leave the password blank to keep the current one." }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-primary",
                            disabled: state.is_submitting() || !has_id,
                            onclick: submit,
                            "Save"
                        }
                    }
                }
            }
        }
    )
}
