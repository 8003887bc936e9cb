use std::rc::Rc;

use dioxus::prelude::*;

use storefront::Site;

#[component]
pub fn Hero() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "{site.config.company}" }
                p { class: "hero-subtitle",
                    "Trading and import partner for consumer electronics, together with Bora Mobility LLP."
                }
                a { class: "btn btn-primary", href: "#products", "Explore products" }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                h2 { class: "section-title", "About us" }
                div { class: "about-grid",
                    div {
                        h3 { "Sourcing" }
                        p {
                            "We source mobiles, laptops, tablets and printers from established brands and handle the import paperwork end to end."
                        }
                    }
                    div {
                        h3 { "Distribution" }
                        p {
                            "Retailers and channel partners get warranty-ready stock with documentation for every shipment."
                        }
                    }
                    div {
                        h3 { "Support" }
                        p {
                            "Send us an enquiry and our sales team will follow up with availability, pricing and lead times."
                        }
                    }
                }
            }
        }
    }
}
