use std::rc::Rc;

use dioxus::prelude::*;

use crate::common::current_year;
use storefront::Site;

#[component]
pub fn Footer() -> Element {
    let site = use_context::<Rc<Site>>();
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                "© "
                span { id: "year", "{year}" }
                " {site.config.company}. Imports handled by Bora Mobility LLP."
            }
        }
    }
}
