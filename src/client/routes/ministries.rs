use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPen, FaTrash, FaXmark};
use dioxus_free_icons::Icon;
use netroster::{
    console::list::ListState,
    model::{
        id::RecordId,
        org::{DeputyMinistry, DeputyMinistryDraft},
    },
};

use crate::client::{
    components::{Page, TextField},
    util::{
        actions::{create_record, delete_record, load_list, update_record},
        notice,
        session::{use_backend, use_request_scope},
    },
};

#[component]
pub fn Ministries() -> Element {
    let backend = use_backend();
    let scope = use_request_scope();

    let ministries = use_signal(ListState::<DeputyMinistry>::new);
    let mut name = use_signal(String::new);
    let mut renaming = use_signal(|| None::<(RecordId, String)>);

    use_future({
        let backend = backend.clone();
        let scope = scope.clone();
        move || load_list(ministries, backend.clone(), scope.clone())
    });

    let create = {
        let backend = backend.clone();
        let scope = scope.clone();
        move |_: MouseEvent| {
            let draft = match DeputyMinistryDraft::new(&name.read()) {
                Ok(draft) => draft,
                Err(err) => {
                    notice::alert(&err.to_string());
                    return;
                }
            };
            let backend = backend.clone();
            let scope = scope.clone();
            spawn(async move {
                if create_record(ministries, backend, scope, draft).await {
                    name.set(String::new());
                }
            });
        }
    };

    let rename = use_callback({
        let backend = backend.clone();
        let scope = scope.clone();
        move |_: ()| {
            let Some((id, value)) = renaming.read().clone() else {
                return;
            };
            let patch = match DeputyMinistryDraft::new(&value) {
                Ok(patch) => patch,
                Err(err) => {
                    notice::alert(&err.to_string());
                    return;
                }
            };
            let backend = backend.clone();
            let scope = scope.clone();
            spawn(async move {
                if update_record(ministries, backend, scope, id, patch).await {
                    renaming.set(None);
                }
            });
        }
    });

    let delete = use_callback(move |id: RecordId| {
        delete_record(ministries, backend.clone(), scope.clone(), id, "deputy ministry")
    });

    let list = ministries.read();
    let editing = renaming.read().clone();

    rsx!(
        Title { "Deputy Ministries | Netroster" }
        Page { title: "Deputy Ministries",
            div { class: "flex items-end gap-2 max-w-xl",
                TextField {
                    label: "New Deputy Ministry",
                    value: name(),
                    required: true,
                    oninput: move |value| name.set(value),
                }
                button { class: "btn btn-primary", onclick: create, "Add" }
            }
            if let Some(error) = list.error() {
                div { class: "alert alert-error", "{error}" }
            }
            if list.is_loading() {
                span { class: "loading loading-spinner loading-lg" }
            }
            table { class: "table table-md max-w-3xl",
                thead {
                    tr {
                        th { "Name" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for ministry in list.items().iter().cloned() {
                        tr { key: "{ministry.id}",
                            {match editing.as_ref().filter(|(id, _)| *id == ministry.id) {
                                Some((_, value)) => rsx!(
                                    td {
                                        input {
                                            class: "input input-bordered input-sm w-full",
                                            value: "{value}",
                                            oninput: {
                                                let id = ministry.id.clone();
                                                move |evt: FormEvent| renaming.set(Some((id.clone(), evt.value())))
                                            },
                                        }
                                    }
                                    td { class: "flex gap-1",
                                        button { class: "btn btn-xs btn-primary", onclick: move |_| rename.call(()),
                                            Icon { width: 14, height: 14, icon: FaCheck }
                                        }
                                        button { class: "btn btn-xs btn-ghost", onclick: move |_| renaming.set(None),
                                            Icon { width: 14, height: 14, icon: FaXmark }
                                        }
                                    }
                                ),
                                None => rsx!(
                                    td { "{ministry.name}" }
                                    td { class: "flex gap-1",
                                        button {
                                            class: "btn btn-xs btn-ghost",
                                            title: "Rename",
                                            onclick: {
                                                let ministry = ministry.clone();
                                                move |_| renaming.set(Some((ministry.id.clone(), ministry.name.clone())))
                                            },
                                            Icon { width: 14, height: 14, icon: FaPen }
                                        }
                                        button {
                                            class: "btn btn-xs btn-ghost text-error",
                                            title: "Delete",
                                            onclick: {
                                                let id = ministry.id.clone();
                                                move |_| delete.call(id.clone())
                                            },
                                            Icon { width: 14, height: 14, icon: FaTrash }
                                        }
                                    }
                                ),
                            }}
                        }
                    }
                }
            }
        }
    )
}
