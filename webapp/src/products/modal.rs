use std::rc::Rc;

use dioxus::prelude::*;

use storefront::explorer::ProductModal;

// the subcategory on display, if any
//
// global so that the document-level Escape listener and every card can reach it
pub static PRODUCT_MODAL: GlobalSignal<ProductModal> = Signal::global(ProductModal::default);

fn close_modal() {
    PRODUCT_MODAL.with_mut(|m| m.close());
}

// ProductModalBox
//
// always mounted; visibility follows the "open" class and aria-hidden
#[component]
pub fn ProductModalBox() -> Element {
    let mut close_button = use_signal(|| None::<Rc<MountedData>>);

    // move focus to the close button whenever the modal opens
    use_effect(move || {
        if !PRODUCT_MODAL.read().is_open() {
            return;
        }
        if let Some(button) = close_button() {
            spawn(async move {
                if let Err(err) = button.set_focus(true).await {
                    tracing::debug!("could not focus modal close button: {err:?}");
                }
            });
        }
    });

    let modal = PRODUCT_MODAL.cloned();
    let (title, desc, types) = match modal.shown() {
        Some(sub) => (sub.brand.clone(), sub.desc.clone(), sub.types.clone()),
        None => (String::new(), String::new(), Vec::new()),
    };

    rsx! {
        div {
            id: "productModalBora",
            class: modal.class(),
            role: "dialog",
            aria_modal: "true",
            aria_hidden: modal.aria_hidden(),
            aria_labelledby: "modalTitleBora",
            div {
                id: "modalBackdropBora",
                class: "modal-backdrop",
                onclick: move |_| close_modal(),
            }
            div { class: "modal-panel",
                button {
                    id: "modalCloseBora",
                    class: "modal-close",
                    aria_label: "Close",
                    onmounted: move |evt| close_button.set(Some(evt.data())),
                    onclick: move |_| close_modal(),
                    "×"
                }
                h3 { id: "modalTitleBora", "{title}" }
                p { id: "modalDescBora", "{desc}" }
                div { id: "modalTypesBora", class: "types",
                    for label in types {
                        span { class: "chip", "{label}" }
                    }
                }
            }
        }
    }
}
