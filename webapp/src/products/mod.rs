use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::common::dom;
use storefront::{Site, explorer::Explorer};

mod card;
use card::ProductCard;

mod modal;
use modal::{PRODUCT_MODAL, ProductModalBox};

#[derive(Clone, PartialEq, Props)]
struct ProductTabProps {
    category_key: String,
    title: String,
    explorer: Signal<Explorer>,
}

#[component]
fn ProductTab(props: ProductTabProps) -> Element {
    let mut explorer = props.explorer;
    let category_key = props.category_key;

    let class = explorer.read().tab_class(&category_key);
    let selected = explorer.read().aria_selected(&category_key);
    let select_tab = {
        let key = category_key.clone();
        move |_: MouseEvent| explorer.with_mut(|e| e.select(&key))
    };

    rsx! {
        button {
            class,
            role: "tab",
            aria_selected: selected,
            "data-category": "{category_key}",
            onclick: select_tab,
            "{props.title}"
        }
    }
}

// ProductExplorer
//
// the Bora Mobility product section: one tab per catalog category, the active
// category's cards, and the detail modal they open
#[component]
pub fn ProductExplorer() -> Element {
    let site = use_context::<Rc<Site>>();
    let explorer = use_signal(|| Explorer::new(&site.catalog));

    // Escape closes the modal no matter where focus is
    //
    // the listener runs outside of dioxus, so it holds the resolved signal rather
    // than going through the global
    let _keydown_listener = use_hook(|| {
        let mut modal = PRODUCT_MODAL.resolve();
        dom::document().map(|document| {
            Rc::new(EventListener::new(&document, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|e| e.key() == "Escape");

                if is_escape && modal.peek().is_open() {
                    modal.with_mut(|m| m.close());
                }
            }))
        })
    });

    let current = explorer.read().category(&site.catalog).cloned();
    let active = explorer.read().active().to_owned();

    rsx! {
        section { id: "products", class: "products",
            div { class: "container",
                h2 { class: "section-title", "Bora Mobility LLP" }
                p { class: "product-note",
                    "Import and distribution of mobiles, laptops and printers for retail and channel partners."
                }

                div { class: "product-tabs-bora", role: "tablist",
                    for category in site.catalog.categories.iter() {
                        ProductTab {
                            key: "{category.key}",
                            category_key: category.key.clone(),
                            title: category.title.clone(),
                            explorer,
                        }
                    }
                }

                div { id: "productContentBora", role: "tabpanel",
                    if let Some(current) = current {
                        div { class: "product-note", "{current.note}" }
                        div { class: "subcategory-grid",
                            for (idx, sub) in current.subcategories.into_iter().enumerate() {
                                ProductCard { key: "{active}-{idx}", sub }
                            }
                        }
                    }
                }
            }

            ProductModalBox {}
        }
    }
}
