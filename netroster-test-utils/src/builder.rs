//! Declarative setup of a seeded [`MockBackend`].

use netroster::{
    error::ApiError,
    model::{
        account::{Credentials, SessionUser, SystemUser},
        org::{DeputyMinistry, Directorate, EmploymentType},
        user::InternetUser,
    },
};

use crate::backend::{Method, MockBackend};

/// Builder for a [`MockBackend`] seeded with fixtures.
///
/// # Example
///
/// ```no_run
/// use netroster_test_utils::prelude::*;
///
/// let backend = TestBuilder::new()
///     .with_deputy_ministries(vec![mock_deputy_ministry("1", "Finance")])
///     .with_internet_users(vec![mock_internet_user("5", "Ali", "ali01", "555")])
///     .build();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    internet_users: Vec<InternetUser>,
    deputy_ministries: Vec<DeputyMinistry>,
    directorates: Vec<Directorate>,
    employment_types: Vec<EmploymentType>,
    system_users: Vec<SystemUser>,
    accounts: Vec<(Credentials, SessionUser)>,
    failures: Vec<(Method, String, ApiError)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_internet_users(mut self, users: Vec<InternetUser>) -> Self {
        self.internet_users.extend(users);
        self
    }

    pub fn with_deputy_ministries(mut self, ministries: Vec<DeputyMinistry>) -> Self {
        self.deputy_ministries.extend(ministries);
        self
    }

    pub fn with_directorates(mut self, directorates: Vec<Directorate>) -> Self {
        self.directorates.extend(directorates);
        self
    }

    pub fn with_employment_types(mut self, kinds: Vec<EmploymentType>) -> Self {
        self.employment_types.extend(kinds);
        self
    }

    pub fn with_system_users(mut self, users: Vec<SystemUser>) -> Self {
        self.system_users.extend(users);
        self
    }

    /// Accept `credentials` at login, answering with `user`.
    pub fn with_account(mut self, credentials: Credentials, user: SessionUser) -> Self {
        self.accounts.push((credentials, user));
        self
    }

    /// Fail every `method` request to `path` with `error`.
    pub fn failing(mut self, method: Method, path: &str, error: ApiError) -> Self {
        self.failures.push((method, path.to_string(), error));
        self
    }

    pub fn build(self) -> MockBackend {
        let backend = MockBackend::new();
        backend.insert(&self.internet_users);
        backend.insert(&self.deputy_ministries);
        backend.insert(&self.directorates);
        backend.insert(&self.employment_types);
        backend.insert(&self.system_users);

        for (credentials, user) in self.accounts {
            backend.add_account(credentials, user);
        }
        for (method, path, error) in self.failures {
            backend.fail(method, &path, error);
        }

        backend
    }
}

/// A generic 500 response.
pub fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "Internal server error".to_string(),
    }
}
