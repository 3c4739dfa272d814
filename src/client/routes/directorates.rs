use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPen, FaTrash, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use netroster::{
    api::Backend,
    console::{directory::Directory, filter, list::ListState},
    model::{
        id::RecordId,
        org::{DeputyMinistry, Directorate, DirectorateDraft},
    },
};

use crate::client::{
    components::{Page, SelectField, TextField},
    util::{
        actions::{create_record, delete_record, load_list, update_record},
        notice,
        options::deputy_ministry_options,
        session::{use_backend, use_request_scope},
    },
};

/// Row being edited inline: id, name, parent ministry id.
type InlineEdit = (RecordId, String, String);

#[component]
pub fn Directorates() -> Element {
    let backend = use_backend();
    let scope = use_request_scope();

    let directorates = use_signal(ListState::<Directorate>::new);
    let mut directory = use_signal(Directory::default);
    let mut search = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut ministry = use_signal(String::new);
    let mut editing = use_signal(|| None::<InlineEdit>);

    use_future({
        let backend = backend.clone();
        let scope = scope.clone();
        move || {
            let backend = backend.clone();
            let scope = scope.clone();
            async move {
                let (_, ministries) = futures::join!(
                    load_list(directorates, backend.clone(), scope.clone()),
                    scope.run(backend.list::<DeputyMinistry>()),
                );
                match ministries {
                    Ok(deputy_ministries) => directory.set(Directory {
                        deputy_ministries,
                        ..Default::default()
                    }),
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => tracing::error!("Error fetching select options: {}", err),
                }
            }
        }
    });

    let create = {
        let backend = backend.clone();
        let scope = scope.clone();
        move |_: MouseEvent| {
            let draft = match DirectorateDraft::new(&name.read(), &RecordId::new(ministry())) {
                Ok(draft) => draft,
                Err(err) => {
                    notice::alert(&err.to_string());
                    return;
                }
            };
            let backend = backend.clone();
            let scope = scope.clone();
            spawn(async move {
                if create_record(directorates, backend, scope, draft).await {
                    name.set(String::new());
                    ministry.set(String::new());
                }
            });
        }
    };

    let save = use_callback({
        let backend = backend.clone();
        let scope = scope.clone();
        move |_: ()| {
            let Some((id, value, parent)) = editing.read().clone() else {
                return;
            };
            let patch = match DirectorateDraft::new(&value, &RecordId::new(parent)) {
                Ok(patch) => patch,
                Err(err) => {
                    notice::alert(&err.to_string());
                    return;
                }
            };
            let backend = backend.clone();
            let scope = scope.clone();
            spawn(async move {
                if update_record(directorates, backend, scope, id, patch).await {
                    editing.set(None);
                }
            });
        }
    });

    let delete = use_callback(move |id: RecordId| {
        delete_record(directorates, backend.clone(), scope.clone(), id, "directorate")
    });

    let list = directorates.read();
    let lookups = directory.read();
    let ministry_options = deputy_ministry_options(&lookups);
    let term = search();
    let visible: Vec<(Directorate, String)> =
        filter::search(list.items(), &term, |item| lookups.directorate_search_fields(item))
            .into_iter()
            .map(|item| {
                let parent = lookups
                    .parent_of(item)
                    .map_or("-".to_string(), |parent| parent.name.clone());
                (item.clone(), parent)
            })
            .collect();
    let current = editing.read().clone();

    rsx!(
        Title { "Directorates | Netroster" }
        Page { title: "Directorates",
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-2 items-end max-w-4xl",
                TextField {
                    label: "New Directorate",
                    value: name(),
                    required: true,
                    oninput: move |value| name.set(value),
                }
                SelectField {
                    label: "Deputy Ministry",
                    value: ministry(),
                    options: ministry_options.clone(),
                    placeholder: "Select deputy ministry",
                    required: true,
                    onchange: move |value| ministry.set(value),
                }
                button { class: "btn btn-primary", onclick: create, "Add" }
            }
            div { class: "max-w-md",
                TextField {
                    label: "Search by directorate or deputy ministry",
                    value: term.clone(),
                    oninput: move |value| search.set(value),
                }
            }
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
                        th { "Deputy Ministry" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for (directorate, parent) in visible {
                        tr { key: "{directorate.id}",
                            {match current.as_ref().filter(|(id, _, _)| *id == directorate.id) {
                                Some((id, value, parent_id)) => {
                                    let id = id.clone();
                                    let parent_id = parent_id.clone();
                                    rsx!(
                                        td {
                                            input {
                                                class: "input input-bordered input-sm w-full",
                                                value: "{value}",
                                                oninput: {
                                                    let id = id.clone();
                                                    let parent_id = parent_id.clone();
                                                    move |evt: FormEvent| {
                                                        editing.set(Some((id.clone(), evt.value(), parent_id.clone())))
                                                    }
                                                },
                                            }
                                        }
                                        td {
                                            select {
                                                class: "select select-bordered select-sm w-full",
                                                onchange: {
                                                    let value = value.clone();
                                                    move |evt: FormEvent| {
                                                        editing.set(Some((id.clone(), value.clone(), evt.value())))
                                                    }
                                                },
                                                for (option_id, option_name) in ministry_options.clone() {
                                                    option {
                                                        key: "{option_id}",
                                                        value: "{option_id}",
                                                        selected: option_id == parent_id,
                                                        "{option_name}"
                                                    }
                                                }
                                            }
                                        }
                                        td { class: "flex gap-1",
                                            button { class: "btn btn-xs btn-primary", onclick: move |_| save.call(()),
                                                Icon { width: 14, height: 14, icon: FaCheck }
                                            }
                                            button { class: "btn btn-xs btn-ghost", onclick: move |_| editing.set(None),
                                                Icon { width: 14, height: 14, icon: FaXmark }
                                            }
                                        }
                                    )
                                }
                                None => rsx!(
                                    td { "{directorate.name}" }
                                    td { "{parent}" }
                                    td { class: "flex gap-1",
                                        button {
                                            class: "btn btn-xs btn-ghost",
                                            title: "Edit",
                                            onclick: {
                                                let directorate = directorate.clone();
                                                move |_| editing.set(Some((
                                                    directorate.id.clone(),
                                                    directorate.name.clone(),
                                                    directorate.deputy_ministry_id.to_string(),
                                                )))
                                            },
                                            Icon { width: 14, height: 14, icon: FaPen }
                                        }
                                        button {
                                            class: "btn btn-xs btn-ghost text-error",
                                            title: "Delete",
                                            onclick: {
                                                let id = directorate.id.clone();
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
