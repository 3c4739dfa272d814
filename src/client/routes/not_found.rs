use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Netroster" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-6xl font-bold", "404" }
            p { "No page at /{path}" }
            Link { class: "btn btn-primary", to: Route::Users {}, "Back to users" }
        }
    )
}
