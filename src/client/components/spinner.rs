use dioxus::prelude::*;

/// Blocks the page while a submission is in flight.
#[component]
pub fn LoadingOverlay() -> Element {
    rsx!(
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-base-300/60",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
