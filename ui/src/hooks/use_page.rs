//=============================================================================
// File: src/hooks/use_page.rs
//=============================================================================

use dioxus::prelude::*;
use futures::StreamExt;
use page::contact::ContactState;
use page::modal::ModalState;
use page::nav::NavState;
use page::reveal::{RevealState, WatchQueue};
use page::{Effect, Page, PageConfig, PageEvent, PageLayout, PageState, TaskQueue, Theme};

use crate::compat;

/// The page model as it runs in the app: real storage, with timers and
/// observers queued up for the runtime to start.
pub type BrowserPage = Page<compat::BrowserStore, TaskQueue, WatchQueue>;

/// A handle to the page model, provided as a Dioxus context.
///
/// The model itself is not reactive. After each event the slices that
/// changed are copied into their own signal, so a component only re-renders
/// when the part of the page it reads changes.
#[derive(Clone, Copy)]
pub struct PageHandle {
    page: CopyValue<BrowserPage>,
    events: Coroutine<PageEvent>,
    pub theme: Signal<Theme>,
    pub nav: Signal<NavState>,
    pub modals: Signal<ModalState>,
    pub contact: Signal<ContactState>,
    pub reveal: Signal<RevealState>,
}

fn sync<T: Clone + PartialEq + 'static>(mut signal: Signal<T>, value: &T) {
    if *signal.peek() != *value {
        signal.set(value.clone());
    }
}

impl PageHandle {
    fn publish(&self, state: &PageState) {
        sync(self.theme, &state.theme);
        sync(self.nav, &state.nav);
        sync(self.modals, &state.modals);
        sync(self.contact, &state.contact);
        sync(self.reveal, &state.reveal);
    }

    /// Runs `event` through the page, then performs the effects, timers and
    /// observers the handlers asked for.
    pub fn dispatch(&self, event: PageEvent) {
        let mut page = self.page;
        let (effects, tasks, watch) = {
            let mut page = page.write();
            let effects = page.dispatch(event);
            self.publish(&page.state);
            (effects, page.scheduler.drain(), page.observer.drain())
        };

        for effect in effects {
            match effect {
                Effect::ScrollIntoView { id } => compat::scroll_into_view(&id),
            }
        }

        for (delay, task) in tasks {
            let handle = *self;
            spawn(async move {
                compat::sleep(delay).await;
                handle.dispatch(PageEvent::Timer(task));
            });
        }

        if let Some((ids, options)) = watch {
            compat::observe_visibility(&ids, options, self.events.tx());
        }
    }
}

/// Creates the page model and provides it to every component below.
pub fn use_page_provider(layout: impl FnOnce() -> PageLayout) -> PageHandle {
    let page = use_hook(|| {
        CopyValue::new(Page::new(
            PageConfig::from_env(),
            &layout(),
            compat::BrowserStore::new(),
            TaskQueue::default(),
            WatchQueue::default(),
        ))
    });

    // Browser callbacks run outside the component tree; they send here.
    let events = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| async move {
        while let Some(event) = rx.next().await {
            consume_context::<PageHandle>().dispatch(event);
        }
    });

    let handle = use_context_provider(|| {
        let state = page.read().state.clone();
        PageHandle {
            page,
            events,
            theme: Signal::new(state.theme),
            nav: Signal::new(state.nav),
            modals: Signal::new(state.modals),
            contact: Signal::new(state.contact),
            reveal: Signal::new(state.reveal),
        }
    });

    // Runs once the elements are mounted, so observers can find them.
    use_effect(move || {
        handle.dispatch(PageEvent::Load);
        compat::listen_for_page_events(handle.events.tx());
    });

    use_effect(move || {
        let theme = (handle.theme)();
        let overflow = handle.modals.read().overflow();
        compat::apply_body(theme, overflow);
    });

    handle
}

pub fn use_page() -> PageHandle {
    use_context::<PageHandle>()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    thread_local! {
        static SEEN: RefCell<Vec<(Theme, Option<String>, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn layout() -> PageLayout {
        PageLayout {
            nav_links: vec!["#about".into()],
            sections: vec!["about".into()],
            submit_label: "Send".into(),
            ..PageLayout::default()
        }
    }

    #[allow(non_snake_case)]
    fn Harness() -> Element {
        let page = use_page_provider(layout);
        let theme = (page.theme)();
        let active = page.nav.read().active_href().map(str::to_string);
        let label = page.contact.read().submit.label.clone();
        SEEN.with(|seen| seen.borrow_mut().push((theme, active, label)));
        rsx! { "{theme}" }
    }

    #[test]
    fn test_provider_publishes_initial_slices() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        SEEN.with(|seen| {
            assert_eq!(
                seen.borrow().first(),
                Some(&(Theme::Light, None, "Send".to_string()))
            );
        });
    }
}
