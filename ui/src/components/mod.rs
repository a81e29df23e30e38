//! The page's building blocks. Each one reads its slice of the page state
//! and turns DOM events into page events.
pub mod contact_form;
pub mod nav_bar;
pub mod project_modal;
pub mod scroll_reveal;
pub mod theme_toggle;
