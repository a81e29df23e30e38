use dioxus::prelude::*;
use page::theme::TOGGLE_ID;
use page::{ElementRef, PageEvent};

use crate::hooks::use_page::use_page;

/// Flips between the light and dark themes.
#[component]
pub fn ThemeToggle() -> Element {
    let page = use_page();
    let theme = (page.theme)();
    let (glyph, next) = (theme.glyph(), theme.toggled());

    rsx! {
        button {
            id: TOGGLE_ID,
            class: "theme-toggle",
            r#type: "button",
            title: "Switch to {next} theme",
            "aria-label": "Switch to {next} theme",
            onclick: move |_| page.dispatch(PageEvent::click(ElementRef::with_id(TOGGLE_ID))),
            "{glyph}"
        }
    }
}
