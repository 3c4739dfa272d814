//! Request flows shared by the listing views.
//!
//! Each flow runs inside the view's [`RequestScope`], ignores responses that arrive
//! after the view is gone, and reports the outcome through a blocking notice.

use dioxus::prelude::*;
use netroster::{
    api::{Backend, Creatable, Deletable, HttpBackend, Resource, Updatable},
    console::{list::ListState, scope::RequestScope},
    error::ApiError,
    model::id::RecordId,
};

use crate::client::util::notice;

pub async fn load_list<R: Resource>(
    mut list: Signal<ListState<R>>,
    backend: HttpBackend,
    scope: RequestScope,
) {
    list.write().begin_load();
    let result = scope.run(backend.list::<R>()).await;
    if scope.is_cancelled() {
        return;
    }
    list.write().finish_load(result);
}

/// Ask for confirmation, then delete `id` and drop it from `list` once the backend agrees.
pub fn delete_record<R: Deletable>(
    mut list: Signal<ListState<R>>,
    backend: HttpBackend,
    scope: RequestScope,
    id: RecordId,
    noun: &'static str,
) {
    list.write().request_delete(id);
    if !notice::confirm(&format!("Are you sure you want to delete this {}?", noun)) {
        list.write().cancel_delete();
        return;
    }
    let Some(id) = list.write().confirm_delete() else {
        return;
    };

    spawn(async move {
        let result = scope.run(backend.delete::<R>(&id)).await;
        if result.as_ref().is_err_and(ApiError::is_cancelled) {
            return;
        }
        match list.write().apply_delete(&id, result) {
            Ok(()) => notice::alert("Deleted successfully."),
            Err(err) => notice::alert(&err.user_message()),
        }
    });
}

/// Returns `true` once the backend's record has replaced the local row.
pub async fn update_record<R: Updatable>(
    mut list: Signal<ListState<R>>,
    backend: HttpBackend,
    scope: RequestScope,
    id: RecordId,
    patch: R::Patch,
) -> bool {
    let result = scope.run(backend.update::<R>(&id, &patch)).await;
    if result.as_ref().is_err_and(ApiError::is_cancelled) {
        return false;
    }
    match list.write().apply_update(result) {
        Ok(()) => {
            notice::alert("Updated successfully.");
            true
        }
        Err(err) => {
            notice::alert(&err.user_message());
            false
        }
    }
}

/// Returns `true` once the created record has been appended to `list`.
pub async fn create_record<R: Creatable>(
    mut list: Signal<ListState<R>>,
    backend: HttpBackend,
    scope: RequestScope,
    draft: R::Draft,
) -> bool {
    let result = scope.run(backend.create::<R>(&draft)).await;
    if result.as_ref().is_err_and(ApiError::is_cancelled) {
        return false;
    }
    match list.write().apply_create(result) {
        Ok(()) => {
            notice::alert("Created successfully.");
            true
        }
        Err(err) => {
            notice::alert(&err.user_message());
            false
        }
    }
}
