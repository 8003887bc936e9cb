#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{Level, error};

use storefront::Site;

mod common;

mod components;
use components::{footer::Footer, navigation::NavBar};

mod contact;
use contact::ContactSection;

mod home;
use home::{About, Hero};

mod products;
use products::ProductExplorer;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the site document is parsed once; if it is broken there is nothing sensible to
// show, so the page is replaced by an error
#[component]
pub fn App() -> Element {
    let site = use_hook(|| match storefront::bundled_site() {
        Ok(site) => Some(Rc::new(site)),
        Err(err) => {
            error!("failed to load site document: {err:#}");
            None
        }
    });

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        match site {
            Some(site) => rsx! {
                Page { site }
            },
            None => rsx! {
                div { class: "load-error",
                    "This page could not be loaded.  Check the browser console for details."
                }
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PageProps {
    site: Rc<Site>,
}

#[component]
fn Page(props: PageProps) -> Element {
    use_context_provider(|| props.site.clone());

    rsx! {
        NavBar {}
        main {
            Hero {}
            About {}
            ProductExplorer {}
            ContactSection {}
        }
        Footer {}
    }
}
