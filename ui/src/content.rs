//! The words and structure of the site. The page model's layout is derived
//! from here so the markup and the model cannot drift apart.

use page::PageLayout;

pub const OWNER: &str = "Alex Morgan";
pub const TAGLINE: &str = "Systems engineer building fast, dependable software.";
pub const SUBMIT_LABEL: &str = "Send Message";

/// Nav entries as (section id, label).
pub const NAV: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

pub const ABOUT: &str = "I design and build backend services, developer tools and the \
occasional web front end. Most of my work lives where performance and correctness both \
matter: storage engines, network services and the glue that keeps them observable.";

pub const SKILLS: [&str; 6] = ["Rust", "Distributed systems", "PostgreSQL", "WebAssembly", "Linux", "Observability"];

pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub tags: &'static [&'static str],
}

impl Project {
    pub fn modal_id(&self) -> String {
        format!("modal-{}", self.slug)
    }

    pub fn card_id(&self) -> String {
        format!("card-{}", self.slug)
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        slug: "ledger",
        title: "Append-only Ledger",
        summary: "A crash-safe log store with checksummed segments.",
        details: "Segments are fsynced in batches and verified on open, so a torn write \
never surfaces as data. Compaction runs in the background without blocking appends.",
        tags: &["Rust", "Storage"],
    },
    Project {
        slug: "relay",
        title: "Event Relay",
        summary: "Fan-out of webhook events with per-subscriber backoff.",
        details: "Each subscriber gets its own retry schedule and dead-letter queue, so one \
slow consumer cannot hold up the rest.",
        tags: &["Rust", "Networking"],
    },
    Project {
        slug: "dash",
        title: "Metrics Dashboard",
        summary: "A WebAssembly dashboard for live service metrics.",
        details: "Charts update from a streaming endpoint and render entirely client-side, \
keeping the server a thin source of numbers.",
        tags: &["WebAssembly", "Dioxus"],
    },
];

pub fn nav_label(href: &str) -> &'static str {
    let id = href.trim_start_matches('#');
    NAV.iter()
        .find(|(section, _)| *section == id)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

pub fn reveal_targets() -> Vec<String> {
    let mut targets = vec!["about-card".to_string(), "skills-card".to_string()];
    targets.extend(PROJECTS.iter().map(Project::card_id));
    targets.push("contact-card".to_string());
    targets
}

pub fn layout() -> PageLayout {
    PageLayout {
        nav_links: NAV.iter().map(|(id, _)| format!("#{id}")).collect(),
        sections: NAV.iter().map(|(id, _)| id.to_string()).collect(),
        modals: PROJECTS.iter().map(Project::modal_id).collect(),
        reveal_targets: reveal_targets(),
        submit_label: SUBMIT_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_link_targets_a_section() {
        let layout = layout();
        for href in &layout.nav_links {
            let id = page::nav::fragment(href).unwrap();
            assert!(layout.sections.iter().any(|s| s == id), "{href}");
        }
    }

    #[test]
    fn test_nav_labels() {
        assert_eq!(nav_label("#projects"), "Projects");
        assert_eq!(nav_label("#missing"), "");
    }

    #[test]
    fn test_ids_are_unique() {
        let layout = layout();
        let mut ids: Vec<&String> = layout
            .sections
            .iter()
            .chain(&layout.modals)
            .chain(&layout.reveal_targets)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
