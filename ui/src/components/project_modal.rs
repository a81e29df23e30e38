use dioxus::prelude::*;
use page::modal::{CLOSE_ATTRIBUTE, MODAL_CLASS};
use page::{ElementRef, PageEvent};

use crate::hooks::use_page::use_page;

/// A dialog that closes on its close button, a backdrop click or Escape.
#[component]
pub fn ProjectModal(id: String, title: String, children: Element) -> Element {
    let page = use_page();
    let class = page.modals.read().class_for(&id);
    let backdrop = ElementRef::with_id(&id).class(MODAL_CLASS);
    let close = ElementRef::default().attr(CLOSE_ATTRIBUTE, &id);

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| page.dispatch(PageEvent::click(backdrop.clone())),
            // Clicks inside the content must not reach the backdrop.
            div {
                class: "modal-content",
                onclick: |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    "aria-label": "Close",
                    "data-close-modal": "{id}",
                    onclick: move |_| page.dispatch(PageEvent::click(close.clone())),
                    "×"
                }
                h3 { "{title}" }
                {children}
            }
        }
    }
}
