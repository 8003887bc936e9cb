use dioxus::prelude::*;

use super::PRODUCT_MODAL;
use storefront::Subcategory;

fn open_modal(sub: &Subcategory) {
    PRODUCT_MODAL.with_mut(|m| m.open(sub));
}

// cards are focusable, so Enter and Space open them like a click
fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    sub: Subcategory,
}

#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let sub = props.sub;

    let on_click = {
        let sub = sub.clone();
        move |_: MouseEvent| open_modal(&sub)
    };
    let on_key = {
        let sub = sub.clone();
        move |evt: KeyboardEvent| {
            if is_activation_key(&evt.key()) {
                open_modal(&sub)
            }
        }
    };
    let on_details = {
        let sub = sub.clone();
        move |evt: MouseEvent| {
            // the card itself would open the modal a second time
            evt.stop_propagation();
            open_modal(&sub)
        }
    };

    rsx! {
        article {
            class: "subcard",
            tabindex: "0",
            onclick: on_click,
            onkeydown: on_key,
            h4 { "{sub.brand}" }
            p { "{sub.desc}" }
            div { class: "types",
                for label in sub.types.iter() {
                    span { class: "chip", "{label}" }
                }
            }
            div { class: "subcard-actions",
                button { class: "btn btn-outline", onclick: on_details, "View Details" }
            }
        }
    }
}
