//! In-memory collection behind a listing view.
//!
//! Mutations are applied only after the backend has accepted them. Deletion goes
//! through an explicit confirmation step before any request is issued.

use dioxus_logger::tracing;

use crate::{
    api::{Backend, Creatable, Deletable, Resource, Updatable},
    error::ApiError,
    model::id::RecordId,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R: Resource> {
    items: Vec<R>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<RecordId>,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            pending_delete: None,
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<R>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &RecordId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle a fetch. A cancelled fetch changes nothing.
    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(ApiError::Cancelled) => {}
            Err(err) => {
                tracing::error!(collection = R::PATH, "{}", err);
                self.error = Some(format!(
                    "Failed to fetch {}. Please try again later.",
                    R::PATH.replace('_', " ")
                ));
            }
        }
    }

    pub async fn load<B: Backend>(&mut self, backend: &B) {
        self.begin_load();
        let result = backend.list::<R>().await;
        self.finish_load(result);
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the confirmed id; the caller issues the delete request for it.
    pub fn confirm_delete(&mut self) -> Option<RecordId> {
        self.pending_delete.take()
    }

    /// Remove `id` if the backend accepted its deletion; otherwise leave the list as it was.
    pub fn apply_delete(
        &mut self,
        id: &RecordId,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                tracing::info!(collection = R::PATH, id = %id, "record deleted");
                Ok(())
            }
            Err(err) => {
                tracing::error!(collection = R::PATH, id = %id, "{}", err);
                Err(err)
            }
        }
    }

    /// Replace the row the backend returned.
    pub fn apply_update(&mut self, result: Result<R, ApiError>) -> Result<(), ApiError> {
        let updated = result.inspect_err(|err| tracing::error!(collection = R::PATH, "{}", err))?;
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == updated.id()) {
            *item = updated;
        }
        Ok(())
    }

    /// Append the record the backend created.
    pub fn apply_create(&mut self, result: Result<R, ApiError>) -> Result<(), ApiError> {
        let created = result.inspect_err(|err| tracing::error!(collection = R::PATH, "{}", err))?;
        tracing::info!(collection = R::PATH, id = %created.id(), "record created");
        self.items.push(created);
        Ok(())
    }
}

impl<R: Deletable> ListState<R> {
    /// Delete `id` if `confirmed`, removing it locally only once the backend succeeds.
    ///
    /// Returns `Ok(false)` without issuing a request when the operator declined.
    pub async fn delete<B: Backend>(
        &mut self,
        backend: &B,
        id: &RecordId,
        confirmed: bool,
    ) -> Result<bool, ApiError> {
        if !confirmed {
            return Ok(false);
        }
        let result = backend.delete::<R>(id).await;
        self.apply_delete(id, result).map(|()| true)
    }
}

impl<R: Updatable> ListState<R> {
    pub async fn update<B: Backend>(
        &mut self,
        backend: &B,
        id: &RecordId,
        patch: &R::Patch,
    ) -> Result<(), ApiError> {
        let result = backend.update::<R>(id, patch).await;
        self.apply_update(result)
    }
}

impl<R: Creatable> ListState<R> {
    pub async fn create<B: Backend>(
        &mut self,
        backend: &B,
        draft: &R::Draft,
    ) -> Result<(), ApiError> {
        let result = backend.create::<R>(draft).await;
        self.apply_create(result)
    }
}
