use dioxus::prelude::*;

use crate::hooks::use_page::use_page;

/// Wraps content that fades in the first time it scrolls into view.
#[component]
pub fn ScrollReveal(id: String, children: Element) -> Element {
    let page = use_page();
    let class = page.reveal.read().class_for(&id);

    rsx! {
        div { id: "{id}", class: "{class}", {children} }
    }
}
