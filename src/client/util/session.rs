use dioxus::prelude::*;
use dioxus_logger::tracing;
use netroster::{
    api::HttpBackend,
    config::Config,
    console::{
        scope::RequestScope,
        session::{self, SessionContext, SessionHandle},
    },
    model::account::Credentials,
    Error,
};

use crate::client::util::storage::LocalStorage;

pub type Session = SessionContext<LocalStorage>;

pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Backend authorised with the current session's token.
pub fn use_backend() -> HttpBackend {
    let config = use_context::<Config>();
    let session = use_session();
    let backend = HttpBackend::new(config).with_session(session.read().current_user());
    backend
}

/// Request scope cancelled when the calling component unmounts.
pub fn use_request_scope() -> RequestScope {
    let scope = use_hook(RequestScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });
    scope
}

/// Signal-backed session, written only between awaits.
struct SharedSession(Signal<Session>);

impl SessionHandle for SharedSession {
    type Storage = LocalStorage;

    fn with_context<R>(&mut self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut context = self.0.write();
        f(&mut *context)
    }
}

pub async fn sign_in(
    session: Signal<Session>,
    backend: &HttpBackend,
    credentials: &Credentials,
) -> Result<(), Error> {
    session::sign_in(&mut SharedSession(session), backend, credentials).await?;
    Ok(())
}

/// Best-effort backend logout followed by clearing the local session.
pub async fn sign_out(session: Signal<Session>, backend: &HttpBackend) {
    if let Err(err) = session::sign_out(&mut SharedSession(session), backend).await {
        tracing::error!("{}", err);
    }
}
