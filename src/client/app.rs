use dioxus::prelude::*;
use dioxus_logger::tracing;
use netroster::config::Config;

use crate::client::{
    router::Route,
    util::{session::Session, storage::LocalStorage},
};

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Configuration error, using defaults: {}", err);
            Config::default()
        }
    });

    use_context_provider(|| {
        let mut session = Session::restore(LocalStorage, config.session_key.clone());
        session.subscribe(|event| tracing::debug!(?event, "session changed"));
        Signal::new(session)
    });

    rsx! {
        Router::<Route> {}
    }
}
