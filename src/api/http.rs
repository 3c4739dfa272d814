//! `reqwasm` implementation of [`Backend`] for the browser build.

use dioxus_logger::tracing;
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::{Backend, Creatable, Deletable, Resource, Updatable},
    config::Config,
    error::ApiError,
    model::{
        account::{Credentials, SessionUser},
        api::ErrorDto,
        id::RecordId,
    },
};

/// Backend reached over HTTP using the browser's fetch API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: Config,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            token: None,
        }
    }

    /// Attach the session's bearer token, if it carries one, to every request.
    pub fn with_session(mut self, session: Option<&SessionUser>) -> Self {
        self.token = session.and_then(|user| user.token.clone());
        self
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url, path)
    }

    fn record_url(&self, path: &str, id: &RecordId) -> String {
        format!("{}/{}/{}", self.config.api_url, path, id)
    }

    fn authorize(&self, request: Request) -> Request {
        let request = request.credentials(RequestCredentials::Include);
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    fn with_json<B: Serialize>(request: Request, body: &B) -> Result<Request, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(request.header("Content-Type", "application/json").body(body))
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if (200..300).contains(&response.status()) {
        Ok(response)
    } else {
        Err(error_from(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorDto>(&body) {
        Ok(error_dto) => error_dto.error,
        Err(_) => body,
    };

    tracing::error!(status = %status, "{}", message);

    ApiError::Status { status, message }
}

impl Backend for HttpBackend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let request = self.authorize(Request::get(&self.collection_url(R::PATH)));
        read_json(send(request).await?).await
    }

    async fn get<R: Resource>(&self, id: &RecordId) -> Result<R, ApiError> {
        let request = self.authorize(Request::get(&self.record_url(R::PATH, id)));
        read_json(send(request).await?).await
    }

    async fn create<R: Creatable>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let request = self.authorize(Request::post(&self.collection_url(R::PATH)));
        let response = send(Self::with_json(request, draft)?).await?;
        read_json(response).await
    }

    async fn update<R: Updatable>(&self, id: &RecordId, patch: &R::Patch) -> Result<R, ApiError> {
        let request = self.authorize(Request::put(&self.record_url(R::PATH, id)));
        let response = send(Self::with_json(request, patch)?).await?;
        read_json(response).await
    }

    async fn delete<R: Deletable>(&self, id: &RecordId) -> Result<(), ApiError> {
        let request = self.authorize(Request::delete(&self.record_url(R::PATH, id)));
        send(request).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<SessionUser, ApiError> {
        let request = Request::post(&format!("{}/login", self.config.auth_url))
            .credentials(RequestCredentials::Include);
        let response = send(Self::with_json(request, credentials)?).await?;
        read_json(response).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let request = self.authorize(Request::post(&format!("{}/logout", self.config.auth_url)));
        send(request).await?;
        Ok(())
    }
}
