//! Contract with the backend collaborator.
//!
//! The backend is a REST JSON API owned elsewhere; this module states only what the
//! console expects from it. Resource traits bind each entity to its collection path
//! and to the operations the backend offers for it, so an unsupported call (updating
//! a violation, say) does not compile.

#[cfg(feature = "web")]
pub mod http;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::ApiError,
    model::{
        account::{Credentials, NewSystemUser, SessionUser, SystemUser, SystemUserPatch},
        id::RecordId,
        org::{DeputyMinistry, DeputyMinistryDraft, Directorate, DirectorateDraft, EmploymentType},
        user::{InternetUser, InternetUserPatch, NewInternetUser},
        violation::Violation,
    },
};

#[cfg(feature = "web")]
pub use http::HttpBackend;

/// A collection exposed by the backend at `/{PATH}`.
pub trait Resource: DeserializeOwned + Clone + 'static {
    const PATH: &'static str;

    fn id(&self) -> &RecordId;
}

/// Collection accepting `POST /{PATH}`.
pub trait Creatable: Resource {
    type Draft: Serialize;
}

/// Collection accepting `PUT /{PATH}/:id`.
pub trait Updatable: Resource {
    type Patch: Serialize;
}

/// Collection accepting `DELETE /{PATH}/:id`.
pub trait Deletable: Resource {}

/// Requests the console issues against the backend.
///
/// Every privileged operation is re-authorised by the backend; nothing here trusts
/// the client-side guards.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError>;

    async fn get<R: Resource>(&self, id: &RecordId) -> Result<R, ApiError>;

    async fn create<R: Creatable>(&self, draft: &R::Draft) -> Result<R, ApiError>;

    async fn update<R: Updatable>(&self, id: &RecordId, patch: &R::Patch) -> Result<R, ApiError>;

    async fn delete<R: Deletable>(&self, id: &RecordId) -> Result<(), ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<SessionUser, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

impl Resource for InternetUser {
    const PATH: &'static str = "internet_users";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Creatable for InternetUser {
    type Draft = NewInternetUser;
}

impl Updatable for InternetUser {
    type Patch = InternetUserPatch;
}

impl Deletable for InternetUser {}

impl Resource for DeputyMinistry {
    const PATH: &'static str = "deputy_ministries";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Creatable for DeputyMinistry {
    type Draft = DeputyMinistryDraft;
}

impl Updatable for DeputyMinistry {
    type Patch = DeputyMinistryDraft;
}

impl Deletable for DeputyMinistry {}

impl Resource for Directorate {
    const PATH: &'static str = "directorates";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Creatable for Directorate {
    type Draft = DirectorateDraft;
}

impl Updatable for Directorate {
    type Patch = DirectorateDraft;
}

impl Deletable for Directorate {}

impl Resource for EmploymentType {
    const PATH: &'static str = "employment_type";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Resource for Violation {
    const PATH: &'static str = "violations";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Creatable for Violation {
    type Draft = Violation;
}

impl Resource for SystemUser {
    const PATH: &'static str = "users";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Creatable for SystemUser {
    type Draft = NewSystemUser;
}

impl Updatable for SystemUser {
    type Patch = SystemUserPatch;
}

impl Deletable for SystemUser {}
