//! Headless model of the portfolio page's behavior.
//!
//! Every feature of the page (theme, navigation, modals, the contact form and
//! scroll reveal) is state plus a handful of handlers that run against a
//! [`PageContext`]. A rendering layer feeds [`PageEvent`]s into [`dispatch`]
//! and reads the resulting [`PageState`] back. Nothing in this crate touches
//! a browser, so the whole page can be driven from plain tests.

pub mod config;
pub mod contact;
pub mod context;
pub mod event;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scheduler;
pub mod storage;
pub mod theme;

pub use config::PageConfig;
pub use context::{Effect, Page, PageContext, PageLayout, PageState};
pub use event::{dispatch, ElementRef, EventKind, PageEvent, Selector, Subscription, SUBSCRIPTIONS};
pub use scheduler::{ManualScheduler, Scheduler, Task, TaskQueue};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use theme::Theme;
