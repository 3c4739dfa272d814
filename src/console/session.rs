//! Process-wide session context.
//!
//! The logged-in operator is read from storage once, when the context is restored,
//! and from then on changes only through [`SessionContext::login`] and
//! [`SessionContext::logout`]. Both persist the marker and notify every subscriber,
//! so consumers never re-read storage on their own.

use std::fmt;

use dioxus_logger::tracing;

use crate::{
    api::Backend,
    error::{Error, SessionError},
    model::{
        account::{Credentials, SessionUser},
        id::RecordId,
    },
};

/// Key/value storage holding the serialized session marker.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LoggedIn(SessionUser),
    LoggedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&SessionEvent)>;

pub struct SessionContext<S: SessionStorage> {
    storage: S,
    key: String,
    user: Option<SessionUser>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: SessionStorage> fmt::Debug for SessionContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("key", &self.key)
            .field("user", &self.user)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: SessionStorage> SessionContext<S> {
    /// Restore the session persisted under `key`.
    ///
    /// An absent, unreadable or unparsable marker yields an anonymous session.
    pub fn restore(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = match storage.read(&key) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!("{}", err);
                None
            }
        };

        let user = SessionUser::from_stored(stored.as_deref());
        if stored.is_some() && user.is_none() {
            tracing::warn!(key = %key, "ignoring unparsable session marker");
        }

        Self {
            storage,
            key,
            user,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Record id of the operator, if one is logged in with a usable id.
    pub fn user_id(&self) -> Option<&RecordId> {
        self.user
            .as_ref()
            .map(|user| &user.id)
            .filter(|id| !id.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }

    /// Persist `user` as the session marker and notify subscribers.
    pub fn login(&mut self, user: SessionUser) -> Result<(), SessionError> {
        let value =
            serde_json::to_string(&user).map_err(|e| SessionError::Serialize(e.to_string()))?;
        self.storage.write(&self.key, &value)?;

        tracing::info!(user = %user.name, "operator logged in");
        self.user = Some(user.clone());
        self.notify(&SessionEvent::LoggedIn(user));

        Ok(())
    }

    /// Clear the session marker and notify subscribers.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.remove(&self.key)?;

        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.name, "operator logged out");
        }
        self.notify(&SessionEvent::LoggedOut);

        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SessionEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&self, event: &SessionEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

/// Shared access to a [`SessionContext`] that must not be held across an await,
/// such as one living inside a UI signal.
pub trait SessionHandle {
    type Storage: SessionStorage;

    fn with_context<R>(&mut self, f: impl FnOnce(&mut SessionContext<Self::Storage>) -> R) -> R;
}

impl<S: SessionStorage> SessionHandle for SessionContext<S> {
    type Storage = S;

    fn with_context<R>(&mut self, f: impl FnOnce(&mut SessionContext<S>) -> R) -> R {
        f(self)
    }
}

/// Authenticate against the backend, then persist the returned operator.
///
/// The context is only borrowed after the backend has answered.
pub async fn sign_in<B: Backend, H: SessionHandle>(
    session: &mut H,
    backend: &B,
    credentials: &Credentials,
) -> Result<SessionUser, Error> {
    let user = backend.login(credentials).await?;
    session.with_context(|context| context.login(user.clone()))?;
    Ok(user)
}

/// Notify the backend, then clear the local session regardless of its answer.
pub async fn sign_out<B: Backend, H: SessionHandle>(
    session: &mut H,
    backend: &B,
) -> Result<(), SessionError> {
    if let Err(err) = backend.logout().await {
        tracing::error!("Logout request failed: {}", err);
    }
    session.with_context(|context| context.logout())
}
