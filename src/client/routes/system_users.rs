use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use netroster::{
    console::list::ListState,
    model::{
        account::{SystemUser, SystemUserPatch},
        id::RecordId,
    },
};

use crate::client::{
    components::{Modal, Page, TextField},
    util::{
        actions::{delete_record, load_list, update_record},
        notice,
        session::{use_backend, use_request_scope},
    },
};

/// Account under edit: its id and the pending patch.
type AccountEdit = (RecordId, SystemUserPatch);

#[component]
pub fn SystemUsers() -> Element {
    let backend = use_backend();
    let scope = use_request_scope();

    let accounts = use_signal(ListState::<SystemUser>::new);
    let mut editing = use_signal(|| None::<AccountEdit>);

    use_future({
        let backend = backend.clone();
        let scope = scope.clone();
        move || load_list(accounts, backend.clone(), scope.clone())
    });

    let save = use_callback({
        let backend = backend.clone();
        let scope = scope.clone();
        move |_: ()| {
            let Some((id, patch)) = editing.read().clone() else {
                return;
            };
            if let Err(err) = patch.validate() {
                notice::alert(&err.to_string());
                return;
            }
            let backend = backend.clone();
            let scope = scope.clone();
            spawn(async move {
                if update_record(accounts, backend, scope, id, patch).await {
                    editing.set(None);
                }
            });
        }
    });

    let delete = use_callback(move |id: RecordId| {
        delete_record(accounts, backend.clone(), scope.clone(), id, "system user")
    });

    let edit = move |update: fn(&mut SystemUserPatch, String)| {
        move |value: String| {
            let mut editing = editing;
            if let Some((_, patch)) = editing.write().as_mut() {
                update(patch, value);
            };
        }
    };

    let list = accounts.read();
    let current = editing.read().clone();

    rsx!(
        Title { "System Users | Netroster" }
        Page { title: "System Users",
            if let Some(error) = list.error() {
                div { class: "alert alert-error", "{error}" }
            }
            if list.is_loading() {
                span { class: "loading loading-spinner loading-lg" }
            }
            table { class: "table table-md max-w-4xl",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for account in list.items().iter().cloned() {
                        tr { key: "{account.id}",
                            td { "{account.name}" }
                            td { "{account.email}" }
                            td { if account.is_admin { "Admin" } else { "Operator" } }
                            td { class: "flex gap-1",
                                button {
                                    class: "btn btn-xs btn-ghost",
                                    title: "Edit",
                                    onclick: {
                                        let account = account.clone();
                                        move |_| editing.set(Some((
                                            account.id.clone(),
                                            SystemUserPatch {
                                                name: account.name.clone(),
                                                email: account.email.clone(),
                                                is_admin: Some(account.is_admin),
                                                password: None,
                                            },
                                        )))
                                    },
                                    Icon { width: 14, height: 14, icon: FaPen }
                                }
                                button {
                                    class: "btn btn-xs btn-ghost text-error",
                                    title: "Delete",
                                    onclick: {
                                        let id = account.id.clone();
                                        move |_| delete.call(id.clone())
                                    },
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                }
                            }
                        }
                    }
                }
            }
            if let Some((_, patch)) = current {
                Modal { title: "Edit System User", on_close: move |_| editing.set(None),
                    div { class: "flex flex-col gap-4",
                        TextField {
                            label: "Full Name",
                            value: patch.name.clone(),
                            required: true,
                            oninput: edit(|patch, value| patch.name = value),
                        }
                        TextField {
                            label: "Email",
                            value: patch.email.clone(),
                            input_type: "email",
                            required: true,
                            oninput: edit(|patch, value| patch.email = value),
                        }
                        TextField {
                            label: "New Password",
                            value: patch.password.clone().unwrap_or_default(),
                            input_type: "password",
                            oninput: edit(|patch, value| {
                                patch.password = (!value.is_empty()).then_some(value)
                            }),
                        }
                        label { class: "label cursor-pointer justify-start gap-2",
                            input {
                                r#type: "checkbox",
                                class: "checkbox",
                                checked: patch.is_admin.unwrap_or(false),
                                onchange: move |evt: FormEvent| {
                                    if let Some((_, patch)) = editing.write().as_mut() {
                                        patch.is_admin = Some(evt.checked());
                                    }
                                },
                            }
                            span { class: "label-text", "Administrator" }
                        }
                    }
                    div { class: "modal-action",
                        button { class: "btn btn-ghost", onclick: move |_| editing.set(None), "Cancel" }
                        button { class: "btn btn-primary", onclick: move |_| save.call(()), "Save Changes" }
                    }
                }
            }
        }
    )
}
