// The client-side Dioxus application for the portfolio site.

use dioxus::prelude::*;

pub mod compat;
mod components;
mod content;
pub mod hooks;

use components::contact_form::ContactForm;
use components::nav_bar::NavBar;
use components::project_modal::ProjectModal;
use components::scroll_reveal::ScrollReveal;
use content::PROJECTS;
use hooks::use_page::use_page_provider;
use page::modal::OPEN_ATTRIBUTE;
use page::{ElementRef, PageEvent};

#[allow(non_snake_case)]
pub fn App() -> Element {
    let site_css = r#"
    /* --- THEME --- */
    body {
        --bg: #fafafa;
        --surface: #ffffff;
        --text: #1f2328;
        --muted: #59636e;
        --accent: #2f6feb;
        --border: #d8dee4;
        --success: #1a7f37;
        --error: #cf222e;
        margin: 0;
        font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
        background: var(--bg);
        color: var(--text);
        transition: background 0.3s, color 0.3s;
    }

    body[data-theme="dark"] {
        --bg: #0d1117;
        --surface: #161b22;
        --text: #e6edf3;
        --muted: #9198a1;
        --accent: #4493f8;
        --border: #30363d;
        --success: #3fb950;
        --error: #f85149;
    }

    /* --- NAVIGATION --- */
    .site-header {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 10;
        background: var(--surface);
        border-bottom: 1px solid var(--border);
    }

    .navbar {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1100px;
        margin: 0 auto;
        padding: 0.75rem 1.5rem;
    }

    .brand { font-weight: 700; }

    .nav-links { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }

    .nav-link {
        color: var(--muted);
        text-decoration: none;
        border-bottom: 2px solid transparent;
        padding-bottom: 0.25rem;
    }

    .nav-link.active {
        color: var(--accent);
        border-bottom-color: var(--accent);
    }

    .theme-toggle {
        background: none;
        border: 1px solid var(--border);
        border-radius: 50%;
        width: 2.5rem; height: 2.5rem;
        cursor: pointer;
        font-size: 1.1rem;
    }

    /* --- SECTIONS --- */
    section {
        max-width: 1100px;
        margin: 0 auto;
        padding: 6rem 1.5rem 4rem;
        min-height: 60vh;
    }

    .hero { display: flex; flex-direction: column; justify-content: center; min-height: 90vh; }
    .hero h1 { font-size: 3rem; margin: 0 0 1rem; }
    .hero p { color: var(--muted); font-size: 1.25rem; }

    .card {
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 12px;
        padding: 1.5rem;
    }

    .skills { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
    .skills li, .tag {
        border: 1px solid var(--border);
        border-radius: 999px;
        padding: 0.2rem 0.75rem;
        font-size: 0.85rem;
    }

    .project-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
    }

    .btn {
        border: 1px solid var(--accent);
        border-radius: 8px;
        padding: 0.6rem 1.2rem;
        background: none;
        color: var(--accent);
        cursor: pointer;
    }

    .btn-primary { background: var(--accent); color: #fff; }
    .btn:disabled { opacity: 0.6; cursor: wait; }

    /* --- MODAL --- */
    .modal {
        display: none;
        position: fixed;
        inset: 0;
        z-index: 20;
        background: rgba(0, 0, 0, 0.6);
        align-items: center;
        justify-content: center;
    }

    .modal.active { display: flex; }

    .modal-content {
        position: relative;
        max-width: 520px;
        width: calc(100% - 3rem);
        background: var(--surface);
        border-radius: 12px;
        padding: 2rem;
    }

    .modal-close {
        position: absolute;
        top: 0.75rem; right: 0.75rem;
        background: none;
        border: none;
        color: var(--muted);
        font-size: 1.5rem;
        cursor: pointer;
    }

    /* --- CONTACT --- */
    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
    .form-group { display: flex; flex-direction: column; gap: 0.35rem; }
    .form-group input, .form-group textarea {
        font: inherit;
        padding: 0.6rem;
        border: 1px solid var(--border);
        border-radius: 8px;
        background: var(--bg);
        color: var(--text);
    }

    .form-response { margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 8px; }
    .form-response.success { color: var(--success); border: 1px solid var(--success); }
    .form-response.error { color: var(--error); border: 1px solid var(--error); }

    /* --- REVEAL --- */
    .scroll-reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }

    .scroll-reveal.revealed { opacity: 1; transform: none; }

    footer { text-align: center; color: var(--muted); padding: 2rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "{content::OWNER} · Portfolio" }
        style {
            "{site_css}"
        }
        PortfolioPage {}
    }
}

#[component]
fn PortfolioPage() -> Element {
    let page = use_page_provider(content::layout);

    rsx! {
        header {
            class: "site-header",
            NavBar {}
        }
        main {
            section {
                id: "home",
                class: "hero",
                h1 { "Hi, I'm {content::OWNER}" }
                p { "{content::TAGLINE}" }
            }
            section {
                id: "about",
                h2 { "About" }
                ScrollReveal {
                    id: "about-card",
                    div { class: "card", p { "{content::ABOUT}" } }
                }
                ScrollReveal {
                    id: "skills-card",
                    ul {
                        class: "skills",
                        for skill in content::SKILLS {
                            li { "{skill}" }
                        }
                    }
                }
            }
            section {
                id: "projects",
                h2 { "Projects" }
                div {
                    class: "project-grid",
                    {
                        PROJECTS.iter().map(|project| {
                            let trigger = ElementRef::default().attr(OPEN_ATTRIBUTE, &project.modal_id());
                            rsx! {
                                ScrollReveal {
                                    key: "{project.slug}",
                                    id: project.card_id(),
                                    article {
                                        class: "card",
                                        h3 { "{project.title}" }
                                        p { "{project.summary}" }
                                        div {
                                            for tag in project.tags {
                                                span { class: "tag", "{tag}" }
                                            }
                                        }
                                        button {
                                            class: "btn",
                                            r#type: "button",
                                            "data-open-modal": project.modal_id(),
                                            onclick: move |_| page.dispatch(PageEvent::click(trigger.clone())),
                                            "Details"
                                        }
                                    }
                                }
                            }
                        })
                    }
                }
            }
            section {
                id: "contact",
                h2 { "Contact" }
                ScrollReveal {
                    id: "contact-card",
                    div { class: "card", ContactForm {} }
                }
            }
        }
        for project in PROJECTS.iter() {
            ProjectModal {
                key: "{project.slug}",
                id: project.modal_id(),
                title: project.title.to_string(),
                p { "{project.details}" }
            }
        }
        footer { "© {content::OWNER}" }
    }
}
