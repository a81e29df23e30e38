use std::time::Duration;

use crate::config::PageConfig;
use crate::contact::ContactState;
use crate::event::{self, PageEvent};
use crate::modal::ModalState;
use crate::nav::NavState;
use crate::reveal::{RevealState, VisibilityObserver};
use crate::scheduler::{ManualScheduler, Scheduler, Task};
use crate::storage::KeyValueStore;
use crate::theme::Theme;

/// The elements the markup provides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    /// hrefs of the `.nav-link` elements, e.g. `"#about"`.
    pub nav_links: Vec<String>,
    /// ids of the `<section>` elements, in document order.
    pub sections: Vec<String>,
    /// ids of the `.modal` elements.
    pub modals: Vec<String>,
    /// ids of the `.scroll-reveal` elements.
    pub reveal_targets: Vec<String>,
    /// Initial label of the contact form's submit button.
    pub submit_label: String,
}

/// Everything the page displays.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub config: PageConfig,
    pub theme: Theme,
    pub nav: NavState,
    pub modals: ModalState,
    pub contact: ContactState,
    pub reveal: RevealState,
}

impl PageState {
    pub fn new(config: PageConfig, layout: &PageLayout) -> Self {
        Self {
            theme: config.default_theme,
            config,
            nav: NavState::new(layout.nav_links.clone(), layout.sections.clone()),
            modals: ModalState::new(layout.modals.clone()),
            contact: ContactState::new(&layout.submit_label),
            reveal: RevealState::new(layout.reveal_targets.clone()),
        }
    }
}

/// Side effects the model cannot perform itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll the element with this id to the top of the viewport.
    ScrollIntoView { id: String },
}

/// What a handler gets to work with.
pub struct PageContext<'a> {
    pub state: &'a mut PageState,
    pub store: &'a mut dyn KeyValueStore,
    pub scheduler: &'a mut dyn Scheduler,
    pub observer: &'a mut dyn VisibilityObserver,
    pub effects: &'a mut Vec<Effect>,
}

impl PageContext<'_> {
    pub fn schedule(&mut self, delay: Duration, task: Task) {
        self.scheduler.schedule(delay, task);
    }

    pub fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

/// A page together with the capabilities its handlers need.
#[derive(Debug)]
pub struct Page<S, C, O> {
    pub state: PageState,
    pub store: S,
    pub scheduler: C,
    pub observer: O,
}

impl<S, C, O> Page<S, C, O>
where
    S: KeyValueStore,
    C: Scheduler,
    O: VisibilityObserver,
{
    pub fn new(config: PageConfig, layout: &PageLayout, store: S, scheduler: C, observer: O) -> Self {
        Self {
            state: PageState::new(config, layout),
            store,
            scheduler,
            observer,
        }
    }

    /// Routes `event` through the subscription table and returns the effects
    /// the handlers asked for.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut ctx = PageContext {
            state: &mut self.state,
            store: &mut self.store,
            scheduler: &mut self.scheduler,
            observer: &mut self.observer,
            effects: &mut effects,
        };
        event::dispatch(&mut ctx, &event);
        effects
    }
}

impl<S, O> Page<S, ManualScheduler, O>
where
    S: KeyValueStore,
    O: VisibilityObserver,
{
    /// Moves the fake clock, dispatching each task at the moment it comes
    /// due so that follow-up tasks are scheduled from the right time.
    pub fn advance(&mut self, by: Duration) -> Vec<Effect> {
        let deadline = self.scheduler.now() + by;
        let mut effects = Vec::new();
        while let Some(due) = self.scheduler.next_due().filter(|due| *due <= deadline) {
            let step = due - self.scheduler.now();
            for task in self.scheduler.advance(step) {
                effects.extend(self.dispatch(PageEvent::Timer(task)));
            }
        }
        let rest = deadline - self.scheduler.now();
        self.scheduler.advance(rest);
        effects
    }
}
