use dioxus::prelude::*;
use dioxus_logger::tracing;
use netroster::console::guard::{self, Access, GuardDecision};

use crate::client::{components::Sidebar, router::Route, util::session::use_session};

/// Redirects away from a view the current session may not see.
///
/// Reacts to session changes, so logging out from any view leaves the protected area.
fn use_guard(access: Access) -> GuardDecision {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || match guard::check(session.read().current_user(), access) {
        GuardDecision::Render => {}
        GuardDecision::RedirectToLogin => {
            tracing::debug!(?access, "no session, redirecting to login");
            navigator.replace(Route::Login {});
        }
        GuardDecision::RedirectHome => {
            tracing::debug!(?access, "not an admin, redirecting home");
            navigator.replace(Route::Users {});
        }
    });

    let decision = guard::check(session.read().current_user(), access);
    decision
}

#[component]
pub fn ProtectedLayout() -> Element {
    if use_guard(Access::Authenticated) != GuardDecision::Render {
        return rsx! {};
    }

    rsx! {
        div { class: "flex min-h-screen",
            Sidebar {}
            main { class: "flex-1 overflow-x-auto",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    if use_guard(Access::Admin) != GuardDecision::Render {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
