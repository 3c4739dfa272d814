use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBuilding, FaGear, FaRightFromBracket, FaSitemap, FaTriangleExclamation, FaUserPlus,
    FaUserShield, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::{
    router::Route,
    util::session::{sign_out, use_backend, use_session},
};

#[component]
fn NavItem(to: Route, label: &'static str, children: Element) -> Element {
    rsx!(
        li {
            Link { to, active_class: "menu-active",
                {children}
                "{label}"
            }
        }
    )
}

#[component]
pub fn Sidebar() -> Element {
    let session = use_session();
    let backend = use_backend();
    let navigator = use_navigator();

    let (name, is_admin) = session
        .read()
        .current_user()
        .map(|user| (user.name.clone(), user.is_admin))
        .unwrap_or_default();

    let logout = move |_: MouseEvent| {
        let backend = backend.clone();
        spawn(async move {
            sign_out(session, &backend).await;
            navigator.replace(Route::Login {});
        });
    };

    rsx!(
        aside { class: "w-64 min-h-screen bg-base-200 flex flex-col",
            div { class: "p-4",
                p { class: "text-xl font-semibold", "Netroster" }
                p { class: "text-xs opacity-70", "{name}" }
            }
            ul { class: "menu flex-1 w-full gap-1",
                NavItem { to: Route::Users {}, label: "Internet Users",
                    Icon { width: 18, height: 18, icon: FaUsers }
                }
                NavItem { to: Route::AddUser {}, label: "Add User",
                    Icon { width: 18, height: 18, icon: FaUserPlus }
                }
                NavItem { to: Route::Ministries {}, label: "Deputy Ministries",
                    Icon { width: 18, height: 18, icon: FaBuilding }
                }
                NavItem { to: Route::Directorates {}, label: "Directorates",
                    Icon { width: 18, height: 18, icon: FaSitemap }
                }
                NavItem { to: Route::Violations {}, label: "Violations",
                    Icon { width: 18, height: 18, icon: FaTriangleExclamation }
                }
                NavItem { to: Route::Settings {}, label: "Settings",
                    Icon { width: 18, height: 18, icon: FaGear }
                }
                if is_admin {
                    NavItem { to: Route::SystemUsers {}, label: "System Users",
                        Icon { width: 18, height: 18, icon: FaUserShield }
                    }
                }
            }
            div { class: "p-4",
                button {
                    class: "btn btn-outline w-full flex gap-2",
                    onclick: logout,
                    Icon { width: 18, height: 18, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    )
}
