use dioxus::document::Title;
use dioxus::prelude::*;
use netroster::{
    console::{directory::Directory, filter, list::ListState},
    model::{user::InternetUser, violation::Violation},
};

use crate::client::{
    components::{LoadingOverlay, Page, TextField},
    util::{
        actions::{create_record, load_list},
        session::{use_backend, use_request_scope},
    },
};

#[component]
pub fn Violations() -> Element {
    let backend = use_backend();
    let scope = use_request_scope();

    let users = use_signal(ListState::<InternetUser>::new);
    let violations = use_signal(ListState::<Violation>::new);
    let mut directory = use_signal(Directory::default);
    let mut search = use_signal(String::new);
    let mut record = use_signal(|| None::<Violation>);
    let mut submitting = use_signal(|| false);

    use_future({
        let backend = backend.clone();
        let scope = scope.clone();
        move || {
            let backend = backend.clone();
            let scope = scope.clone();
            async move {
                let (_, _, lookups) = futures::join!(
                    load_list(users, backend.clone(), scope.clone()),
                    load_list(violations, backend.clone(), scope.clone()),
                    Directory::load(&backend),
                );
                directory.set(lookups);
            }
        }
    });

    let submit = move |_: MouseEvent| {
        if submitting() {
            return;
        }
        let Some(draft) = record() else {
            return;
        };
        submitting.set(true);

        let backend = backend.clone();
        let scope = scope.clone();
        spawn(async move {
            let created = create_record(violations, backend, scope, draft).await;
            submitting.set(false);
            if created {
                record.set(None);
                search.set(String::new());
            }
        });
    };

    let term = search();
    let user_list = users.read();
    let matches: Vec<InternetUser> = if term.trim().is_empty() {
        Vec::new()
    } else {
        filter::search(user_list.items(), &term, |user| [user.username.as_str()])
            .into_iter()
            .cloned()
            .collect()
    };
    let lookups = directory.read();
    let recorded = violations.read();
    let current = record();

    rsx!(
        Title { "Violations | Netroster" }
        Page { title: "Violations",
            if submitting() {
                LoadingOverlay {}
            }
            div { class: "max-w-md",
                TextField {
                    label: "Search by username",
                    value: term.clone(),
                    oninput: move |value| search.set(value),
                }
            }
            if let Some(error) = user_list.error() {
                div { class: "alert alert-error", "{error}" }
            }
            if !matches.is_empty() {
                ul { class: "menu bg-base-200 rounded-box max-w-md",
                    for user in matches {
                        li { key: "{user.id}",
                            a {
                                onclick: {
                                    let user = user.clone();
                                    move |_| record.set(Some(Violation::for_user(&user)))
                                },
                                "{user.username} ({user.name})"
                            }
                        }
                    }
                }
            }
            if let Some(violation) = current {
                div { class: "card bg-base-100 shadow-sm max-w-2xl",
                    div { class: "card-body gap-3",
                        h2 { class: "card-title", "Record violation for {violation.username}" }
                        div { class: "grid grid-cols-2 gap-2",
                            p { class: "opacity-70", "Name" }
                            p { "{violation.name}" }
                            p { class: "opacity-70", "Position" }
                            p { "{violation.position}" }
                            p { class: "opacity-70", "Deputy Ministry" }
                            p { "{lookups.deputy_ministry_name(&violation.deputy_ministry)}" }
                            p { class: "opacity-70", "Directorate" }
                            p { "{lookups.directorate_name(&violation.directorate)}" }
                            p { class: "opacity-70", "Violation Count" }
                            p { "{violation.violation_count}" }
                        }
                        TextField {
                            label: "User Signature",
                            value: violation.user_signature.clone(),
                            oninput: move |value| {
                                if let Some(record) = record.write().as_mut() {
                                    record.user_signature = value;
                                }
                            },
                        }
                        TextField {
                            label: "Directorate Signature",
                            value: violation.directorate_signature.clone(),
                            oninput: move |value| {
                                if let Some(record) = record.write().as_mut() {
                                    record.directorate_signature = value;
                                }
                            },
                        }
                        TextField {
                            label: "Comment",
                            value: violation.comment.clone(),
                            oninput: move |value| {
                                if let Some(record) = record.write().as_mut() {
                                    record.comment = value;
                                }
                            },
                        }
                        div { class: "card-actions justify-end",
                            button { class: "btn btn-ghost", onclick: move |_| record.set(None), "Cancel" }
                            button {
                                class: "btn btn-primary",
                                disabled: submitting(),
                                onclick: submit,
                                "Submit Violation"
                            }
                        }
                    }
                }
            }
            h2 { class: "text-xl font-semibold mt-4", "Recorded Violations" }
            if let Some(error) = recorded.error() {
                div { class: "alert alert-error", "{error}" }
            }
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Username" }
                        th { "Name" }
                        th { "Directorate" }
                        th { "Count" }
                        th { "Comment" }
                    }
                }
                tbody {
                    for violation in recorded.items().iter() {
                        tr { key: "{violation.id}",
                            td { "{violation.username}" }
                            td { "{violation.name}" }
                            td { "{lookups.directorate_name(&violation.directorate)}" }
                            td { "{violation.violation_count}" }
                            td { "{violation.comment}" }
                        }
                    }
                }
            }
        }
    )
}
