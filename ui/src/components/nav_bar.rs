use dioxus::prelude::*;
use page::nav::NAV_LINK_CLASS;
use page::{ElementRef, PageEvent};

use crate::components::theme_toggle::ThemeToggle;
use crate::content;
use crate::hooks::use_page::use_page;

/// The fixed header: site name, section links and the theme toggle.
#[component]
pub fn NavBar() -> Element {
    let page = use_page();
    let links: Vec<(String, String)> = {
        let nav = page.nav.read();
        nav.links()
            .iter()
            .map(|href| (href.clone(), nav.class_for(href)))
            .collect()
    };

    rsx! {
        nav {
            class: "navbar",
            span { class: "brand", "{content::OWNER}" }
            ul {
                class: "nav-links",
                {
                    links.into_iter().map(|(href, class)| {
                        let target = ElementRef::default()
                            .class(NAV_LINK_CLASS)
                            .attr("href", &href);
                        rsx! {
                            li {
                                key: "{href}",
                                a {
                                    class: "{class}",
                                    href: "{href}",
                                    onclick: move |event| {
                                        event.prevent_default();
                                        page.dispatch(PageEvent::click(target.clone()));
                                    },
                                    "{content::nav_label(&href)}"
                                }
                            }
                        }
                    })
                }
            }
            ThemeToggle {}
        }
    }
}
