use dioxus::prelude::*;

#[component]
pub fn Page(title: String, class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen w-full p-6 flex flex-col gap-4 {class}",
            h1 { class: "text-2xl font-semibold",
                "{title}"
            }
            {children}
        }
    )
}
