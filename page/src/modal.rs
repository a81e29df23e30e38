use dioxus_logger::tracing::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::context::PageContext;
use crate::event::PageEvent;

pub const MODAL_CLASS: &str = "modal";
pub const ACTIVE_CLASS: &str = "active";
/// Attribute on a trigger naming the modal it opens.
pub const OPEN_ATTRIBUTE: &str = "data-open-modal";
/// Attribute on a trigger naming the modal it closes.
pub const CLOSE_ATTRIBUTE: &str = "data-close-modal";
pub const ESCAPE_KEY: &str = "Escape";

/// The page-wide `overflow` style, locked while a modal is open.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    modals: Vec<(String, bool)>,
    overflow: Overflow,
}

impl ModalState {
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            modals: ids.into_iter().map(|id| (id, false)).collect(),
            overflow: Overflow::Auto,
        }
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.modals.iter().any(|(m, open)| m == id && *open)
    }

    pub fn class_for(&self, id: &str) -> String {
        if self.is_open(id) {
            format!("{MODAL_CLASS} {ACTIVE_CLASS}")
        } else {
            MODAL_CLASS.to_string()
        }
    }

    fn set(&mut self, id: &str, open: bool) -> bool {
        match self.modals.iter_mut().find(|(m, _)| m == id) {
            Some((_, state)) => {
                *state = open;
                true
            }
            None => false,
        }
    }

    /// Shows `id` and locks page scrolling. Unknown ids are ignored.
    pub fn open(&mut self, id: &str) -> bool {
        if !self.set(id, true) {
            return false;
        }
        self.overflow = Overflow::Hidden;
        true
    }

    /// Hides `id` and restores page scrolling.
    pub fn close(&mut self, id: &str) -> bool {
        if !self.set(id, false) {
            return false;
        }
        self.overflow = Overflow::Auto;
        true
    }

    /// Closes every open modal, returning how many were open.
    pub fn close_all(&mut self) -> usize {
        let open: Vec<String> = self
            .modals
            .iter()
            .filter(|(_, open)| *open)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &open {
            self.close(id);
        }
        open.len()
    }
}

pub(crate) fn on_open(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let Some(id) = event.target().and_then(|t| t.attribute(OPEN_ATTRIBUTE)) else {
        return;
    };
    if !ctx.state.modals.open(id) {
        warn!("no modal with id {id:?}");
    }
}

pub(crate) fn on_close(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let Some(id) = event.target().and_then(|t| t.attribute(CLOSE_ATTRIBUTE)) else {
        return;
    };
    if !ctx.state.modals.close(id) {
        warn!("no modal with id {id:?}");
    }
}

/// Clicks whose target is the modal element itself landed on the backdrop.
pub(crate) fn on_backdrop_click(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let Some(id) = event.target().and_then(|t| t.id.as_deref()) else {
        return;
    };
    ctx.state.modals.close(id);
}

pub(crate) fn on_keydown(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let PageEvent::KeyDown { key } = event else {
        return;
    };
    if key == ESCAPE_KEY {
        let closed = ctx.state.modals.close_all();
        debug!("escape closed {closed} modal(s)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modals() -> ModalState {
        ModalState::new(vec!["project-1".into(), "project-2".into()])
    }

    #[test]
    fn test_open_locks_scrolling() {
        let mut state = modals();
        assert!(state.open("project-1"));
        assert!(state.is_open("project-1"));
        assert_eq!(state.class_for("project-1"), "modal active");
        assert_eq!(state.class_for("project-2"), "modal");
        assert_eq!(state.overflow(), Overflow::Hidden);
    }

    #[test]
    fn test_close_restores_scrolling() {
        let mut state = modals();
        state.open("project-1");
        assert!(state.close("project-1"));
        assert!(!state.is_open("project-1"));
        assert_eq!(state.overflow(), Overflow::Auto);
    }

    #[test]
    fn test_unknown_modal_is_ignored() {
        let mut state = modals();
        assert!(!state.open("nope"));
        assert_eq!(state.overflow(), Overflow::Auto);
    }

    #[test]
    fn test_close_all() {
        let mut state = modals();
        state.open("project-1");
        state.open("project-2");
        assert_eq!(state.close_all(), 2);
        assert!(!state.is_open("project-1"));
        assert!(!state.is_open("project-2"));
        assert_eq!(state.overflow(), Overflow::Auto);
        assert_eq!(state.close_all(), 0);
    }

    #[test]
    fn test_overflow_css_value() {
        assert_eq!(Overflow::Hidden.to_string(), "hidden");
        assert_eq!(Overflow::Auto.to_string(), "auto");
    }
}
