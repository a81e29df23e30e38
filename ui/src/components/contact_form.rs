use dioxus::prelude::*;
use page::contact::{Field, FORM_ID, RESPONSE_CLASS, RESPONSE_ID};
use page::{ElementRef, PageEvent};

use crate::hooks::use_page::use_page;

const FIELDS: [(Field, &str, &str); 3] = [
    (Field::Name, "Name", "Your name"),
    (Field::Email, "Email", "you@example.com"),
    (Field::Message, "Message", "What would you like to talk about?"),
];

#[component]
fn FormField(field: Field, label: &'static str, placeholder: &'static str, value: String) -> Element {
    let page = use_page();
    let id = field.as_ref();
    let input_type = if field == Field::Email { "email" } else { "text" };

    rsx! {
        div {
            class: "form-group",
            label { r#for: "{id}", "{label}" }
            if field == Field::Message {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    rows: 5,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| page.dispatch(PageEvent::input(field, evt.value())),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{id}",
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| page.dispatch(PageEvent::input(field, evt.value())),
                }
            }
        }
    }
}

/// The contact form and its status line.
#[component]
pub fn ContactForm() -> Element {
    let page = use_page();
    let contact = page.contact.read().clone();

    rsx! {
        form {
            id: FORM_ID,
            class: "contact-form",
            // validation happens in the page model
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                page.dispatch(PageEvent::Submit {
                    target: ElementRef::with_id(FORM_ID),
                });
            },
            for (field, label, placeholder) in FIELDS {
                FormField {
                    key: "{field}",
                    field,
                    label,
                    placeholder,
                    value: contact.fields.get(field).to_string(),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: contact.submit.disabled,
                "{contact.submit.label}"
            }
        }
        match contact.response() {
            Some(response) => rsx! {
                div {
                    id: RESPONSE_ID,
                    class: "{response.class()}",
                    style: "display: block;",
                    "{response.text}"
                }
            },
            None => rsx! {
                div { id: RESPONSE_ID, class: RESPONSE_CLASS, style: "display: none;" }
            },
        }
    }
}
