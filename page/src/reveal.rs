//! Scroll-triggered reveal.
//!
//! Elements tagged `scroll-reveal` are handed to a [`VisibilityObserver`].
//! The first time one is reported as intersecting it gains `revealed`, and
//! keeps it for the rest of the page's life.

use std::collections::{BTreeSet, HashMap};

use dioxus_logger::tracing::debug;
use serde::{Deserialize, Serialize};

use crate::context::PageContext;
use crate::event::PageEvent;

pub const REVEAL_CLASS: &str = "scroll-reveal";
pub const REVEALED_CLASS: &str = "revealed";

/// Visibility threshold and bottom root margin of the reveal observer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Grows (positive) or shrinks (negative) the viewport's bottom edge.
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: -50.0,
        }
    }
}

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl RevealOptions {
    /// The margin in CSS `rootMargin` syntax.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }

    /// Whether `rect` is visible enough within a viewport of the given height.
    pub fn is_intersecting(&self, rect: ElementRect, viewport_height: f64) -> bool {
        let root_bottom = viewport_height + self.bottom_margin_px;
        let bottom = rect.top + rect.height;
        let visible = bottom.min(root_bottom) - rect.top.max(0.0);
        if rect.height <= 0.0 {
            return rect.top >= 0.0 && rect.top <= root_bottom;
        }
        visible > 0.0 && visible / rect.height >= self.threshold
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
}

/// Notifies when watched elements cross the visibility threshold.
pub trait VisibilityObserver {
    fn observe(&mut self, id: &str, options: RevealOptions);
}

/// Records the elements to watch so a runtime can wire a real observer for
/// them after the handler returns.
#[derive(Debug, Default)]
pub struct WatchQueue {
    ids: Vec<String>,
    options: Option<RevealOptions>,
}

impl WatchQueue {
    /// Takes the queued ids along with the options they were queued with.
    pub fn drain(&mut self) -> Option<(Vec<String>, RevealOptions)> {
        let options = self.options.take()?;
        Some((std::mem::take(&mut self.ids), options))
    }
}

impl VisibilityObserver for WatchQueue {
    fn observe(&mut self, id: &str, options: RevealOptions) {
        self.ids.push(id.to_string());
        self.options = Some(options);
    }
}

/// Computes intersections from element geometry instead of a browser
/// observer.
#[derive(Debug)]
pub struct GeometryObserver {
    viewport_height: f64,
    options: RevealOptions,
    watched: Vec<String>,
    rects: HashMap<String, ElementRect>,
}

impl GeometryObserver {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            options: RevealOptions::default(),
            watched: Vec::new(),
            rects: HashMap::new(),
        }
    }

    /// Positions an element relative to the current viewport top.
    pub fn place(&mut self, id: &str, rect: ElementRect) {
        self.rects.insert(id.to_string(), rect);
    }

    /// Scrolls the viewport down by `dy` pixels.
    pub fn scroll_by(&mut self, dy: f64) {
        for rect in self.rects.values_mut() {
            rect.top -= dy;
        }
    }

    pub fn watched(&self) -> &[String] {
        &self.watched
    }

    /// Entries for every watched element that has a known position.
    pub fn entries(&self) -> Vec<IntersectionEntry> {
        self.watched
            .iter()
            .filter_map(|id| {
                let rect = self.rects.get(id)?;
                Some(IntersectionEntry {
                    id: id.clone(),
                    is_intersecting: self.options.is_intersecting(*rect, self.viewport_height),
                })
            })
            .collect()
    }
}

impl VisibilityObserver for GeometryObserver {
    fn observe(&mut self, id: &str, options: RevealOptions) {
        self.options = options;
        if !self.watched.iter().any(|w| w == id) {
            self.watched.push(id.to_string());
        }
    }
}

/// Which reveal targets exist and which have been revealed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealState {
    targets: Vec<String>,
    revealed: BTreeSet<String>,
}

impl RevealState {
    pub fn new(targets: Vec<String>) -> Self {
        Self {
            targets,
            revealed: BTreeSet::new(),
        }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn class_for(&self, id: &str) -> String {
        if self.is_revealed(id) {
            format!("{REVEAL_CLASS} {REVEALED_CLASS}")
        } else {
            REVEAL_CLASS.to_string()
        }
    }

    /// Marks `id` revealed. Returns false if it already was.
    pub fn reveal(&mut self, id: &str) -> bool {
        self.revealed.insert(id.to_string())
    }
}

pub(crate) fn on_load(ctx: &mut PageContext<'_>, _event: &PageEvent) {
    let options = ctx.state.config.reveal;
    for id in ctx.state.reveal.targets() {
        ctx.observer.observe(id, options);
    }
}

pub(crate) fn on_intersect(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let PageEvent::Intersect { entries } = event else {
        return;
    };
    for entry in entries.iter().filter(|e| e.is_intersecting) {
        if ctx.state.reveal.reveal(&entry.id) {
            debug!("revealed {}", entry.id);
        }
    }
}
