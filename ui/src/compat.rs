//! Platform glue between the page model and the environment it runs in.
//!
//! On wasm32 these talk to the browser through `web-sys`. Elsewhere they are
//! inert stand-ins so the components still render and the page stays usable.

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use dioxus_logger::tracing::warn;
    use futures_channel::mpsc::UnboundedSender;
    use page::modal::Overflow;
    use page::nav::SectionBounds;
    use page::reveal::{IntersectionEntry, RevealOptions};
    use page::theme::THEME_ATTRIBUTE;
    use page::{KeyValueStore, PageEvent, StorageError, Theme};
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
        ScrollLogicalPosition, Storage,
    };

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn js_error(value: JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// `window.localStorage`, if the browser lets us have it.
    pub struct BrowserStore {
        storage: Option<Storage>,
    }

    impl BrowserStore {
        pub fn new() -> Self {
            Self {
                storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
            }
        }

        fn storage(&self) -> Result<&Storage, StorageError> {
            self.storage.as_ref().ok_or(StorageError::Unavailable)
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?
                .get_item(key)
                .map_err(|e| StorageError::Rejected(js_error(e)))
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(js_error(e)))
        }
    }

    /// Mirrors the theme and scroll lock onto `<body>`, which lives outside
    /// the component tree.
    pub fn apply_body(theme: Theme, overflow: Overflow) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        if let Err(e) = body.set_attribute(THEME_ATTRIBUTE, theme.into()) {
            warn!("could not set body theme: {}", js_error(e));
        }
        if let Err(e) = body.style().set_property("overflow", &overflow.to_string()) {
            warn!("could not set body overflow: {}", js_error(e));
        }
    }

    pub fn scroll_into_view(id: &str) {
        let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
            warn!("no element with id {id:?} to scroll to");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Page geometry of every `<section>`, in document order.
    pub fn measure_sections() -> Vec<SectionBounds> {
        let Some(nodes) = document().and_then(|d| d.query_selector_all("section").ok()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|section| {
                SectionBounds::new(
                    &section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    pub fn scroll_y() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default()
    }

    /// Forwards window scrolls and document keydowns into the page. The
    /// listeners live as long as the page does.
    pub fn listen_for_page_events(events: UnboundedSender<PageEvent>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let scroll_events = events.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let _ = scroll_events.unbounded_send(PageEvent::Scroll {
                scroll_y: scroll_y(),
                sections: measure_sections(),
            });
        });
        if let Err(e) =
            window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        {
            warn!("could not listen for scroll: {}", js_error(e));
        }
        on_scroll.forget();

        let Some(document) = window.document() else {
            return;
        };
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |evt: KeyboardEvent| {
            let _ = events.unbounded_send(PageEvent::key(&evt.key()));
        });
        if let Err(e) =
            document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        {
            warn!("could not listen for keydown: {}", js_error(e));
        }
        on_keydown.forget();
    }

    /// Watches `ids` with an `IntersectionObserver` and reports crossings
    /// back as [`PageEvent::Intersect`].
    pub fn observe_visibility(
        ids: &[String],
        options: RevealOptions,
        events: UnboundedSender<PageEvent>,
    ) {
        let Some(document) = document() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry {
                        id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                let _ = events.unbounded_send(PageEvent::Intersect { entries });
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    warn!("IntersectionObserver unavailable: {}", js_error(e));
                    return;
                }
            };
        callback.forget();

        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => observer.observe(&element),
                None => warn!("no reveal element with id {id:?}"),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use dioxus_logger::tracing::debug;
    use futures_channel::mpsc::UnboundedSender;
    use page::modal::Overflow;
    use page::reveal::{IntersectionEntry, RevealOptions};
    use page::{PageEvent, Theme};

    /// No browser storage here; the preference lasts as long as the process.
    pub type BrowserStore = page::MemoryStore;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub fn apply_body(theme: Theme, overflow: Overflow) {
        debug!("body: theme={theme} overflow={overflow}");
    }

    pub fn scroll_into_view(id: &str) {
        debug!("scroll into view: {id}");
    }

    pub fn listen_for_page_events(_events: UnboundedSender<PageEvent>) {}

    /// Without a viewport to measure, every watched element counts as seen.
    pub fn observe_visibility(
        ids: &[String],
        _options: RevealOptions,
        events: UnboundedSender<PageEvent>,
    ) {
        let entries = ids
            .iter()
            .map(|id| IntersectionEntry {
                id: id.clone(),
                is_intersecting: true,
            })
            .collect();
        let _ = events.unbounded_send(PageEvent::Intersect { entries });
    }
}
