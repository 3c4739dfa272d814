//! In-memory [`Backend`] mirroring the REST collections the console talks to.
//!
//! Records are held as JSON values keyed by collection path, so any resource type
//! round-trips through the same serde representation the HTTP backend would use.
//! Failures can be injected per method and path, and every request is logged.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use netroster::{
    api::{Backend, Creatable, Deletable, Resource, Updatable},
    error::ApiError,
    model::{
        account::{Credentials, SessionUser},
        id::RecordId,
    },
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    collections: RefCell<HashMap<&'static str, Vec<Value>>>,
    failures: RefCell<HashMap<(Method, String), ApiError>>,
    accounts: RefCell<Vec<(Credentials, SessionUser)>>,
    requests: RefCell<Vec<RecordedRequest>>,
    next_id: Cell<u64>,
}

fn id_of(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn not_found(path: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("{} not found", path),
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1000),
            ..Default::default()
        }
    }

    /// Seed the collection of `R` with `records`.
    pub fn insert<R: Resource + Serialize>(&self, records: &[R]) {
        let values = records
            .iter()
            .map(|record| serde_json::to_value(record).expect("fixture serializes"))
            .collect::<Vec<_>>();
        self.collections
            .borrow_mut()
            .entry(R::PATH)
            .or_default()
            .extend(values);
    }

    /// Seed raw JSON records, e.g. with legacy or loosely typed fields.
    pub fn insert_raw(&self, path: &'static str, records: Vec<Value>) {
        self.collections
            .borrow_mut()
            .entry(path)
            .or_default()
            .extend(records);
    }

    /// Accept `credentials` at `/login`, answering with `user`.
    pub fn add_account(&self, credentials: Credentials, user: SessionUser) {
        self.accounts.borrow_mut().push((credentials, user));
    }

    /// Fail every `method` request to `path` (e.g. `"internet_users"`, `"login"`) with `error`.
    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.failures
            .borrow_mut()
            .insert((method, path.to_string()), error);
    }

    pub fn clear_failures(&self) {
        self.failures.borrow_mut().clear();
    }

    /// Current records of `R`, decoded.
    pub fn records<R: Resource>(&self) -> Vec<R> {
        self.collections
            .borrow()
            .get(R::PATH)
            .map(|values| {
                values
                    .iter()
                    .cloned()
                    .map(|value| serde_json::from_value(value).expect("stored record decodes"))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    /// Requests issued with `method`, in order.
    pub fn requests_with(&self, method: Method) -> Vec<RecordedRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.method == method)
            .cloned()
            .collect()
    }

    fn record(&self, method: Method, path: String, body: Option<Value>) -> Result<(), ApiError> {
        let collection = path.split('/').next().unwrap_or_default().to_string();
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path,
            body,
        });

        match self.failures.borrow().get(&(method, collection)) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn allocate_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id.to_string()
    }
}

impl Backend for MockBackend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        self.record(Method::Get, R::PATH.to_string(), None)?;
        let values = self
            .collections
            .borrow()
            .get(R::PATH)
            .cloned()
            .unwrap_or_default();
        values.into_iter().map(decode).collect()
    }

    async fn get<R: Resource>(&self, id: &RecordId) -> Result<R, ApiError> {
        let path = format!("{}/{}", R::PATH, id);
        self.record(Method::Get, path.clone(), None)?;
        let value = self
            .collections
            .borrow()
            .get(R::PATH)
            .and_then(|values| values.iter().find(|value| id_of(value) == id.as_str()).cloned())
            .ok_or_else(|| not_found(&path))?;
        decode(value)
    }

    async fn create<R: Creatable>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let mut value = encode(draft)?;
        self.record(Method::Post, R::PATH.to_string(), Some(value.clone()))?;

        if let Value::Object(fields) = &mut value {
            if !fields.get("id").is_some_and(|id| !id.is_null()) {
                fields.insert("id".to_string(), Value::String(self.allocate_id()));
            }
        }
        self.collections
            .borrow_mut()
            .entry(R::PATH)
            .or_default()
            .push(value.clone());

        decode(value)
    }

    async fn update<R: Updatable>(&self, id: &RecordId, patch: &R::Patch) -> Result<R, ApiError> {
        let path = format!("{}/{}", R::PATH, id);
        let patch = encode(patch)?;
        self.record(Method::Put, path.clone(), Some(patch.clone()))?;

        let mut collections = self.collections.borrow_mut();
        let record = collections
            .get_mut(R::PATH)
            .and_then(|values| values.iter_mut().find(|value| id_of(value) == id.as_str()))
            .ok_or_else(|| not_found(&path))?;

        if let (Value::Object(fields), Value::Object(changes)) = (&mut *record, patch) {
            fields.extend(changes);
        }

        decode(record.clone())
    }

    async fn delete<R: Deletable>(&self, id: &RecordId) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::PATH, id);
        self.record(Method::Delete, path.clone(), None)?;

        let mut collections = self.collections.borrow_mut();
        let values = collections
            .get_mut(R::PATH)
            .ok_or_else(|| not_found(&path))?;
        let before = values.len();
        values.retain(|value| id_of(value) != id.as_str());

        if values.len() == before {
            return Err(not_found(&path));
        }
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<SessionUser, ApiError> {
        self.record(Method::Post, "login".to_string(), Some(encode(credentials)?))?;

        self.accounts
            .borrow()
            .iter()
            .find(|(known, _)| known == credentials)
            .map(|(_, user)| user.clone())
            .ok_or(ApiError::Status {
                status: 401,
                message: "Invalid email or password".to_string(),
            })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record(Method::Post, "logout".to_string(), None)
    }
}
