use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use netroster::{
    api::Backend,
    console::{
        directory::Directory,
        form::{InternetUserForm, UserField},
        wizard::{FormField, StepForm, Wizard},
    },
    error::ApiError,
    model::user::{InternetUser, UserStatus},
};

use crate::client::{
    components::{LoadingOverlay, Page, SelectField, TextField},
    router::Route,
    util::{
        notice,
        options::{
            deputy_ministry_options, directorate_options, employment_type_options, status_options,
            violation_options,
        },
        session::{use_backend, use_request_scope},
    },
};

type UserWizard = Wizard<InternetUserForm>;

fn is_required(field: UserField) -> bool {
    InternetUserForm::step_of(field.name()).is_some()
}

#[component]
fn WizardText(
    wizard: Signal<UserWizard>,
    field: UserField,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    let mut wizard = wizard;
    let value = wizard.read().value(field).to_string();

    rsx!(TextField {
        label: field.label().to_string(),
        value,
        input_type,
        required: is_required(field),
        oninput: move |value: String| wizard.write().set(field, value),
    })
}

#[component]
fn WizardSelect(
    wizard: Signal<UserWizard>,
    field: UserField,
    options: Vec<(String, String)>,
) -> Element {
    let mut wizard = wizard;
    let value = wizard.read().value(field).to_string();

    rsx!(SelectField {
        label: field.label().to_string(),
        value,
        options,
        placeholder: format!("Select {}", field.label().to_lowercase()),
        required: is_required(field),
        onchange: move |value: String| {
            let mut wizard = wizard.write();
            if field == UserField::DeputyMinistry {
                wizard.set(UserField::Directorate, String::new());
            }
            wizard.set(field, value);
        },
    })
}

#[component]
pub fn AddUser() -> Element {
    let backend = use_backend();
    let scope = use_request_scope();
    let navigator = use_navigator();

    let mut wizard = use_signal(UserWizard::new);
    let mut directory = use_signal(Directory::default);

    use_future({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move { directory.set(Directory::load(&backend).await) }
        }
    });

    let next = move |_: MouseEvent| match wizard.write().next() {
        Ok(_) => {}
        Err(err) => notice::alert(&err.to_string()),
    };

    let back = move |_: MouseEvent| {
        wizard.write().back();
    };

    let submit = move |_: MouseEvent| {
        let draft = match wizard.write().begin_submit() {
            Ok(draft) => draft,
            Err(err) => {
                notice::alert(&err.to_string());
                return;
            }
        };

        let backend = backend.clone();
        let scope = scope.clone();
        spawn(async move {
            let result = scope.run(backend.create::<InternetUser>(&draft)).await;
            if result.as_ref().is_err_and(ApiError::is_cancelled) {
                return;
            }
            wizard.write().finish_submit(&result);
            match result {
                Ok(user) => {
                    tracing::info!(id = %user.id, "internet user created");
                    notice::alert("User added successfully!");
                    navigator.push(Route::Users {});
                }
                Err(err) => notice::alert(&err.user_message()),
            }
        });
    };

    let state = wizard.read();
    let lookups = directory.read();
    let step = state.step();
    let ministry = state.value(UserField::DeputyMinistry).to_string();
    let review: Vec<(&'static str, String)> = state
        .review()
        .into_iter()
        .map(|(label, value)| {
            let value = match label {
                "Directorate" => lookups.directorate_name(value),
                "Deputy Ministry" => lookups.deputy_ministry_name(value),
                "Status" => value.parse::<UserStatus>().map_or(value, |status| status.label()),
                _ => value,
            };
            (label, value.to_string())
        })
        .collect();

    rsx!(
        Title { "Add User | Netroster" }
        Page { title: "Add Internet User",
            if state.is_submitting() {
                LoadingOverlay {}
            }
            ul { class: "steps w-full",
                for (i, title) in InternetUserForm::STEPS.iter().enumerate() {
                    li {
                        key: "{title}",
                        class: if i <= step { "step step-primary" } else { "step" },
                        "{title}"
                    }
                }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-4",
                    h2 { class: "card-title", "{state.title()}" }
                    {match step {
                        0 => rsx!(
                            WizardText { wizard, field: UserField::Name }
                            WizardText { wizard, field: UserField::Username }
                            WizardText { wizard, field: UserField::Email, input_type: "email" }
                            WizardText { wizard, field: UserField::Phone, input_type: "tel" }
                        ),
                        1 => rsx!(
                            WizardSelect {
                                wizard,
                                field: UserField::EmploymentType,
                                options: employment_type_options(&lookups),
                            }
                            WizardSelect {
                                wizard,
                                field: UserField::DeputyMinistry,
                                options: deputy_ministry_options(&lookups),
                            }
                            WizardSelect {
                                wizard,
                                field: UserField::Directorate,
                                options: directorate_options(&lookups, &ministry),
                            }
                            WizardText { wizard, field: UserField::Position }
                        ),
                        2 => rsx!(
                            WizardText { wizard, field: UserField::DeviceLimit, input_type: "number" }
                            WizardText { wizard, field: UserField::DeviceType }
                            WizardText { wizard, field: UserField::MacAddress }
                        ),
                        3 => rsx!(
                            WizardSelect { wizard, field: UserField::Status, options: status_options() }
                            WizardSelect { wizard, field: UserField::Violations, options: violation_options() }
                            WizardText { wizard, field: UserField::Comment }
                        ),
                        _ => rsx!(
                            div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                                for (label, value) in review {
                                    div { key: "{label}",
                                        p { class: "text-xs opacity-70", "{label}" }
                                        p { class: "font-medium", if value.is_empty() { "-" } else { "{value}" } }
                                    }
                                }
                            }
                        ),
                    }}
                    div { class: "card-actions justify-between",
                        button {
                            class: "btn btn-ghost",
                            disabled: step == 0,
                            onclick: back,
                            "Back"
                        }
                        if state.is_last_step() {
                            button {
                                class: "btn btn-primary",
                                disabled: state.is_submitting(),
                                onclick: submit,
                                "Submit"
                            }
                        } else {
                            button { class: "btn btn-primary", onclick: next, "Next" }
                        }
                    }
                }
            }
        }
    )
}
