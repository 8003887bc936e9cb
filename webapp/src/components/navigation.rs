use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use tracing::debug;

use crate::common::dom;
use storefront::{Site, config::NavLink, nav::NavMenu, scroll::ScrollSpy};

// recompute the highlighted link from the live section geometry
fn refresh_spy(mut spy: Signal<ScrollSpy>) {
    let Some(scroll_y) = dom::scroll_y() else {
        return;
    };
    let sections = dom::section_bounds();

    // only write (and thus re-render the links) when the highlight moves
    let mut next = ScrollSpy::clone(&spy.peek());
    if next.update(scroll_y, &sections) {
        spy.set(next);
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    link: NavLink,
    spy: Signal<ScrollSpy>,
    menu: Signal<NavMenu>,
    breakpoint: f64,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let spy = props.spy;
    let mut menu = props.menu;
    let breakpoint = props.breakpoint;
    let link = props.link;

    rsx! {
        a {
            class: spy.read().link_class(&link.target),
            href: link.href(),
            onclick: move |_| {
                let Some(width) = dom::viewport_width() else {
                    return;
                };
                if menu.with_mut(|m| m.close_for_link(width, breakpoint)) {
                    debug!("closed mobile nav after link click");
                }
            },
            "{link.label}"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let site = use_context::<Rc<Site>>();
    let nav = &site.config.nav;

    let mut menu = use_signal(NavMenu::default);
    let spy = use_signal(|| {
        ScrollSpy::new(
            nav.scroll_offset,
            nav.links.iter().map(|l| l.target.clone()),
        )
    });

    // the listener is dropped, and thus removed, along with the navbar
    let _scroll_listener = use_hook(|| {
        dom::window().map(|window| {
            Rc::new(EventListener::new(&window, "scroll", move |_| {
                refresh_spy(spy)
            }))
        })
    });

    // once the sections are mounted, highlight whatever is already in view
    use_effect(move || refresh_spy(spy));

    let breakpoint = nav.mobile_breakpoint;
    let is_open = if menu.read().is_open() { "true" } else { "false" };

    rsx! {
        header { class: "site-header",
            div { class: "container nav-container",
                a { class: "logo", href: "#home", "{site.config.company}" }

                button {
                    id: "navToggle",
                    class: menu.read().class("nav-toggle"),
                    aria_label: "Toggle navigation",
                    aria_controls: "nav",
                    aria_expanded: is_open,
                    onclick: move |_| menu.with_mut(|m| m.toggle()),
                    "☰"
                }

                nav { id: "nav", class: menu.read().class("nav"),
                    for link in nav.links.iter() {
                        NavBarLink {
                            key: "{link.target}",
                            link: link.clone(),
                            spy,
                            menu,
                            breakpoint,
                        }
                    }
                }
            }
        }
    }
}
