//! Navigation highlighting.
//!
//! Exactly zero or one nav link is active. Clicking a link activates it and
//! asks for a smooth scroll to its section; scrolling activates the link of
//! whichever section sits under the scroll position plus a fixed offset.

use dioxus_logger::tracing::warn;

use crate::context::{Effect, PageContext};
use crate::event::PageEvent;

pub const NAV_LINK_CLASS: &str = "nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Document geometry of a `<section>`, in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section id an in-page href points at, e.g. `"#projects"` -> `"projects"`.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    links: Vec<String>,
    sections: Vec<String>,
    active: Option<usize>,
}

impl NavState {
    pub fn new(links: Vec<String>, sections: Vec<String>) -> Self {
        Self {
            links,
            sections,
            active: None,
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn active_href(&self) -> Option<&str> {
        self.active.map(|i| self.links[i].as_str())
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.active_href() == Some(href)
    }

    pub fn class_for(&self, href: &str) -> String {
        if self.is_active(href) {
            format!("{NAV_LINK_CLASS} {ACTIVE_CLASS}")
        } else {
            NAV_LINK_CLASS.to_string()
        }
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    /// Makes `href` the only active link. Unknown hrefs clear every link.
    pub fn activate(&mut self, href: &str) -> bool {
        self.active = self.links.iter().position(|l| l == href);
        self.active.is_some()
    }

    /// Re-derives the active link from a scroll position. Sections are
    /// checked in document order, so the last match wins; when nothing
    /// matches the current highlight is left alone.
    pub fn highlight_for_scroll(&mut self, scroll_y: f64, offset: f64, sections: &[SectionBounds]) {
        let position = scroll_y + offset;
        for section in sections.iter().filter(|s| s.contains(position)) {
            self.activate(&format!("#{}", section.id));
        }
    }
}

pub(crate) fn on_click(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let Some(href) = event.target().and_then(|t| t.attribute("href")) else {
        return;
    };
    ctx.state.nav.activate(href);

    match fragment(href) {
        Some(id) if ctx.state.nav.has_section(id) => ctx.emit(Effect::ScrollIntoView {
            id: id.to_string(),
        }),
        _ => warn!("nav link {href:?} has no matching section"),
    }
}

pub(crate) fn on_scroll(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let PageEvent::Scroll { scroll_y, sections } = event else {
        return;
    };
    let offset = ctx.state.config.scroll_offset;
    ctx.state.nav.highlight_for_scroll(*scroll_y, offset, sections);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavState {
        NavState::new(
            vec!["#home".into(), "#about".into(), "#projects".into()],
            vec!["home".into(), "about".into(), "projects".into(), "contact".into()],
        )
    }

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 500.0),
            SectionBounds::new("projects", 1100.0, 900.0),
            SectionBounds::new("contact", 2000.0, 700.0),
        ]
    }

    #[test]
    fn test_fragment() {
        assert_eq!(fragment("#projects"), Some("projects"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment("/blog"), None);
    }

    #[test]
    fn test_section_span_is_half_open() {
        let about = SectionBounds::new("about", 600.0, 500.0);
        assert!(!about.contains(599.9));
        assert!(about.contains(600.0));
        assert!(about.contains(1099.9));
        assert!(!about.contains(1100.0));
    }

    #[test]
    fn test_activate_is_exclusive() {
        let mut nav = nav();
        assert!(nav.activate("#about"));
        assert!(nav.activate("#projects"));
        assert!(nav.is_active("#projects"));
        assert!(!nav.is_active("#about"));
        assert_eq!(nav.class_for("#projects"), "nav-link active");
        assert_eq!(nav.class_for("#about"), "nav-link");
    }

    #[test]
    fn test_scroll_uses_offset() {
        let mut nav = nav();
        // 520 + 100 lands in "about"
        nav.highlight_for_scroll(520.0, 100.0, &sections());
        assert_eq!(nav.active_href(), Some("#about"));
        // 490 + 100 is still "home"
        nav.highlight_for_scroll(490.0, 100.0, &sections());
        assert_eq!(nav.active_href(), Some("#home"));
    }

    #[test]
    fn test_scroll_into_section_without_link_clears_highlight() {
        let mut nav = nav();
        nav.activate("#projects");
        nav.highlight_for_scroll(2100.0, 100.0, &sections());
        assert_eq!(nav.active_href(), None);
    }

    #[test]
    fn test_scroll_past_every_section_keeps_highlight() {
        let mut nav = nav();
        nav.activate("#about");
        nav.highlight_for_scroll(5000.0, 100.0, &sections());
        assert_eq!(nav.active_href(), Some("#about"));
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let mut nav = nav();
        let overlapping = vec![
            SectionBounds::new("about", 0.0, 1000.0),
            SectionBounds::new("projects", 500.0, 1000.0),
        ];
        nav.highlight_for_scroll(600.0, 100.0, &overlapping);
        assert_eq!(nav.active_href(), Some("#projects"));
    }
}
