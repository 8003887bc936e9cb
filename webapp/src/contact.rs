use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, info};

use crate::common::dom;
use storefront::{
    Site,
    contact::{ContactForm, FormStatus},
};

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    fn slot(self, form: &mut ContactForm) -> &mut String {
        match self {
            Field::Name => &mut form.name,
            Field::Email => &mut form.email,
            Field::Company => &mut form.company,
            Field::Message => &mut form.message,
        }
    }
}

fn set_field(mut form: Signal<ContactForm>, field: Field, value: String) {
    form.with_mut(|f| *field.slot(f) = value);
}

// ContactSection
//
// there is no backend: a valid form becomes a mailto link that the browser opens
// after a short pause, so the status line has a chance to be read
#[component]
pub fn ContactSection() -> Element {
    let site = use_context::<Rc<Site>>();

    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(FormStatus::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let url = {
            let fields = form.read();
            match fields.validate() {
                Ok(enquiry) => enquiry.mailto(
                    &site.config.recipient,
                    &site.config.sender,
                ),
                Err(err) => {
                    debug!("rejected contact form: {err}");
                    status.set(FormStatus::Invalid(err));
                    return;
                }
            }
        };

        status.set(FormStatus::Sending);
        info!("handing enquiry off to the mail client");

        // not cancellable; clearing the form afterwards does not stop it
        Timeout::new(site.config.contact.mailto_delay_ms, move || {
            dom::navigate(&url)
        })
        .forget();
    };

    let on_clear = move |_: MouseEvent| {
        form.with_mut(|f| f.clear());
        status.set(FormStatus::Idle);
    };

    let status_text = status.read().text();
    let status_style = match status.read().color() {
        Some(color) => format!("color: {color};"),
        None => String::new(),
    };
    let fields = form.cloned();

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                h2 { class: "section-title", "Contact us" }
                p { class: "product-note",
                    "Tell us what you are looking for and we will get back to you with availability and pricing."
                }

                form {
                    id: "contactForm",
                    class: "contact-form",
                    "novalidate": "true",
                    onsubmit: on_submit,

                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        value: "{fields.name}",
                        oninput: move |evt| set_field(form, Field::Name, evt.value()),
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        value: "{fields.email}",
                        oninput: move |evt| set_field(form, Field::Email, evt.value()),
                    }

                    label { r#for: "company", "Company (optional)" }
                    input {
                        id: "company",
                        name: "company",
                        r#type: "text",
                        value: "{fields.company}",
                        oninput: move |evt| set_field(form, Field::Company, evt.value()),
                    }

                    label { r#for: "message", "Message" }
                    textarea {
                        id: "message",
                        name: "message",
                        rows: "6",
                        value: "{fields.message}",
                        oninput: move |evt| set_field(form, Field::Message, evt.value()),
                    }

                    div { class: "form-actions",
                        button { class: "btn btn-primary", r#type: "submit", "Send enquiry" }
                        button {
                            id: "clearBtn",
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: on_clear,
                            "Clear"
                        }
                    }

                    p {
                        id: "formStatus",
                        class: "form-status",
                        role: "status",
                        style: "{status_style}",
                        "{status_text}"
                    }
                }
            }
        }
    }
}
