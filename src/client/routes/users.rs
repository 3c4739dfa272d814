use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBan, FaEye, FaPen, FaTrash, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use netroster::{
    api::Backend,
    console::{directory::Directory, filter::UserFilter, index::UserIndex, list::ListState},
    error::ApiError,
    model::{
        id::RecordId,
        user::{InternetUser, InternetUserPatch, RowMarker},
    },
};

use crate::client::{
    components::{Page, UserDetailModal, UserEditModal, UserFilters},
    util::{
        actions::delete_record,
        notice,
        session::{use_backend, use_request_scope},
    },
};

#[component]
pub fn Users() -> Element {
    let backend = use_backend();
    let scope = use_request_scope();

    let mut users = use_signal(ListState::<InternetUser>::new);
    let mut directory = use_signal(Directory::default);
    let filter = use_signal(UserFilter::default);
    let mut viewing = use_signal(|| None::<InternetUser>);
    let mut editing = use_signal(|| None::<InternetUser>);

    // Users and the three lookups are fetched in parallel on mount
    use_future({
        let backend = backend.clone();
        let scope = scope.clone();
        move || {
            let backend = backend.clone();
            let scope = scope.clone();
            async move {
                users.write().begin_load();
                let (result, lookups) = futures::join!(
                    scope.run(backend.list::<InternetUser>()),
                    Directory::load(&backend),
                );
                if scope.is_cancelled() {
                    return;
                }
                let result = result.map(|list| lookups.normalize_users(list));
                users.write().finish_load(result);
                directory.set(lookups);
            }
        }
    });

    // Rebuilt only when the collection changes
    let index = use_memo(move || UserIndex::build(users.read().items()));

    let delete = use_callback({
        let backend = backend.clone();
        let scope = scope.clone();
        move |id: RecordId| delete_record(users, backend.clone(), scope.clone(), id, "user")
    });

    let save = use_callback(move |edited: InternetUser| {
        let Some(original) = editing.read().clone() else {
            return;
        };
        let patch = InternetUserPatch::diff(&original, &edited);
        if let Err(err) = patch.validate() {
            tracing::warn!(id = %original.id, "{}", err);
            notice::alert(&err.to_string());
            return;
        }

        let backend = backend.clone();
        let scope = scope.clone();
        spawn(async move {
            let result = scope
                .run(backend.update::<InternetUser>(&original.id, &patch))
                .await;
            if result.as_ref().is_err_and(ApiError::is_cancelled) {
                return;
            }
            let result = result.map(|user| directory.read().normalize_user(user));
            match users.write().apply_update(result) {
                Ok(()) => {
                    editing.set(None);
                    notice::alert("User updated successfully.");
                }
                Err(err) => notice::alert(&err.user_message()),
            }
        });
    });

    let list = users.read();
    let visible: Vec<InternetUser> = index
        .read()
        .apply(list.items(), &filter.read())
        .into_iter()
        .cloned()
        .collect();
    let lookups = directory.read();

    rsx!(
        Title { "Internet Users | Netroster" }
        Page { title: "Internet Users",
            UserFilters { filter, directory }
            if let Some(error) = list.error() {
                div { class: "alert alert-error", "{error}" }
            }
            if list.is_loading() {
                div { class: "flex justify-center p-6",
                    span { class: "loading loading-spinner loading-lg" }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "" }
                            th { "Name" }
                            th { "Username" }
                            th { "Phone" }
                            th { "Deputy Ministry" }
                            th { "Directorate" }
                            th { "Status" }
                            th { "Violations" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in visible {
                            tr {
                                key: "{user.id}",
                                class: user.violations.marker().row_class(),
                                td {
                                    {match user.violations.marker() {
                                        RowMarker::Plain => rsx!(),
                                        RowMarker::Warning => rsx!(
                                            span { class: "text-warning", title: "Warning",
                                                Icon { width: 16, height: 16, icon: FaTriangleExclamation }
                                            }
                                        ),
                                        RowMarker::Alert => rsx!(
                                            span { class: "text-error", title: "Blocked",
                                                Icon { width: 16, height: 16, icon: FaBan }
                                            }
                                        ),
                                    }}
                                }
                                td { "{user.name}" }
                                td { "{user.username}" }
                                td { "{user.phone}" }
                                td { "{lookups.deputy_ministry_name(&user.deputy_ministry)}" }
                                td { "{lookups.directorate_name(&user.directorate)}" }
                                td { "{user.status.label()}" }
                                td { "{user.violations}" }
                                td {
                                    div { class: "flex gap-1",
                                        button {
                                            class: "btn btn-xs btn-ghost",
                                            title: "View",
                                            onclick: {
                                                let user = user.clone();
                                                move |_| viewing.set(Some(user.clone()))
                                            },
                                            Icon { width: 14, height: 14, icon: FaEye }
                                        }
                                        button {
                                            class: "btn btn-xs btn-ghost",
                                            title: "Edit",
                                            onclick: {
                                                let user = user.clone();
                                                move |_| editing.set(Some(user.clone()))
                                            },
                                            Icon { width: 14, height: 14, icon: FaPen }
                                        }
                                        button {
                                            class: "btn btn-xs btn-ghost text-error",
                                            title: "Delete",
                                            onclick: {
                                                let id = user.id.clone();
                                                move |_| delete.call(id.clone())
                                            },
                                            Icon { width: 14, height: 14, icon: FaTrash }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(user) = viewing() {
                UserDetailModal {
                    user,
                    directory,
                    on_close: move |_| viewing.set(None),
                }
            }
            if let Some(user) = editing() {
                UserEditModal {
                    key: "{user.id}",
                    user,
                    directory,
                    on_close: move |_| editing.set(None),
                    on_save: move |edited| save.call(edited),
                }
            }
        }
    )
}
