//! Events and the table that routes them to handlers.
//!
//! [`SUBSCRIPTIONS`] is the page's whole wiring: which handler runs for which
//! kind of event on which element. Rendering layers only translate their own
//! events into [`PageEvent`]s and call [`dispatch`].

use dioxus_logger::tracing::debug;

use crate::contact::{self, Field};
use crate::context::PageContext;
use crate::modal;
use crate::nav::{self, SectionBounds};
use crate::reveal::{self, IntersectionEntry};
use crate::scheduler::Task;
use crate::theme;

/// A description of the element an event was fired on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementRef {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
}

impl ElementRef {
    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Load,
    Click,
    Scroll,
    KeyDown,
    Input,
    Submit,
    Intersect,
    Timer,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The page's elements are in place.
    Load,
    Click { target: ElementRef },
    /// The window scrolled. Carries the section geometry measured at the time.
    Scroll {
        scroll_y: f64,
        sections: Vec<SectionBounds>,
    },
    KeyDown { key: String },
    Input { target: ElementRef, value: String },
    Submit { target: ElementRef },
    Intersect { entries: Vec<IntersectionEntry> },
    Timer(Task),
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Load => EventKind::Load,
            PageEvent::Click { .. } => EventKind::Click,
            PageEvent::Scroll { .. } => EventKind::Scroll,
            PageEvent::KeyDown { .. } => EventKind::KeyDown,
            PageEvent::Input { .. } => EventKind::Input,
            PageEvent::Submit { .. } => EventKind::Submit,
            PageEvent::Intersect { .. } => EventKind::Intersect,
            PageEvent::Timer(_) => EventKind::Timer,
        }
    }

    pub fn target(&self) -> Option<&ElementRef> {
        match self {
            PageEvent::Click { target }
            | PageEvent::Input { target, .. }
            | PageEvent::Submit { target } => Some(target),
            _ => None,
        }
    }

    pub fn click(target: ElementRef) -> Self {
        PageEvent::Click { target }
    }

    pub fn input(field: Field, value: impl Into<String>) -> Self {
        PageEvent::Input {
            target: ElementRef::with_id(field.as_ref()),
            value: value.into(),
        }
    }

    pub fn key(key: &str) -> Self {
        PageEvent::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Which elements a subscription listens on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Selector {
    /// The document itself; sees every event of its kind.
    Document,
    Id(&'static str),
    Class(&'static str),
    Attribute(&'static str),
}

impl Selector {
    pub fn matches(&self, target: Option<&ElementRef>) -> bool {
        match (self, target) {
            (Selector::Document, _) => true,
            (Selector::Id(id), Some(t)) => t.id.as_deref() == Some(*id),
            (Selector::Class(class), Some(t)) => t.has_class(class),
            (Selector::Attribute(name), Some(t)) => t.attribute(name).is_some(),
            (_, None) => false,
        }
    }
}

pub type Handler = fn(&mut PageContext<'_>, &PageEvent);

pub struct Subscription {
    pub event: EventKind,
    pub selector: Selector,
    pub handler: Handler,
}

macro_rules! on {
    ($event:ident, $selector:expr, $handler:path) => {
        Subscription {
            event: EventKind::$event,
            selector: $selector,
            handler: $handler,
        }
    };
}

pub static SUBSCRIPTIONS: &[Subscription] = &[
    on!(Load, Selector::Document, theme::on_load),
    on!(Load, Selector::Document, reveal::on_load),
    on!(Click, Selector::Id(theme::TOGGLE_ID), theme::on_toggle),
    on!(Click, Selector::Class(nav::NAV_LINK_CLASS), nav::on_click),
    on!(Scroll, Selector::Document, nav::on_scroll),
    on!(Click, Selector::Attribute(modal::OPEN_ATTRIBUTE), modal::on_open),
    on!(Click, Selector::Attribute(modal::CLOSE_ATTRIBUTE), modal::on_close),
    on!(Click, Selector::Class(modal::MODAL_CLASS), modal::on_backdrop_click),
    on!(KeyDown, Selector::Document, modal::on_keydown),
    on!(Input, Selector::Id("name"), contact::on_input),
    on!(Input, Selector::Id("email"), contact::on_input),
    on!(Input, Selector::Id("message"), contact::on_input),
    on!(Submit, Selector::Id(contact::FORM_ID), contact::on_submit),
    on!(Timer, Selector::Document, contact::on_timer),
    on!(Intersect, Selector::Document, reveal::on_intersect),
];

/// Runs every handler subscribed to `event`, in table order. Returns how
/// many ran.
pub fn dispatch(ctx: &mut PageContext<'_>, event: &PageEvent) -> usize {
    let kind = event.kind();
    let target = event.target();
    let mut handled = 0;
    for subscription in SUBSCRIPTIONS
        .iter()
        .filter(|s| s.event == kind && s.selector.matches(target))
    {
        (subscription.handler)(ctx, event);
        handled += 1;
    }
    if handled == 0 {
        debug!("no handler for {kind} event on {target:?}");
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        let link = ElementRef::default().class("nav-link").attr("href", "#about");
        assert!(Selector::Class("nav-link").matches(Some(&link)));
        assert!(Selector::Attribute("href").matches(Some(&link)));
        assert!(!Selector::Id("themeToggle").matches(Some(&link)));
        assert!(!Selector::Class("modal").matches(None));
        assert!(Selector::Document.matches(None));
    }

    #[test]
    fn test_every_kind_has_a_subscription() {
        for kind in [
            EventKind::Load,
            EventKind::Click,
            EventKind::Scroll,
            EventKind::KeyDown,
            EventKind::Input,
            EventKind::Submit,
            EventKind::Intersect,
            EventKind::Timer,
        ] {
            assert!(SUBSCRIPTIONS.iter().any(|s| s.event == kind), "{kind}");
        }
    }

    #[test]
    fn test_event_targets() {
        let event = PageEvent::input(Field::Email, "ada@example.com");
        assert_eq!(event.kind(), EventKind::Input);
        assert_eq!(event.target().and_then(|t| t.id.as_deref()), Some("email"));
        assert!(PageEvent::key("Escape").target().is_none());
    }
}
