use log::{debug, warn};
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "Sobre Nós"),
    ("services", "Serviços"),
    ("contact", "Contato"),
];

/// Smoothly scrolls the section with the given id to the top of the page.
pub fn scroll_to_section(id: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("No section with id {}", id);
        return;
    };
    debug!("Scrolling to #{}", id);
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Click handler that scrolls to `id`.
pub fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 20.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let nav_buttons = |class: &'static str| -> Html {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                html! {
                    <button class={class} onclick={nav_to(*id)}>{*label}</button>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <div class="header-logo">
                    <span class="logo-heart">{"♥"}</span>
                    <span class="logo-text">{&config::site().clinic_name}</span>
                </div>

                <nav class="header-nav">
                    { nav_buttons("nav-link") }
                </nav>

                <div class="header-actions">
                    <button class="button-ghost" onclick={nav_to("services")}>{"Serviços"}</button>
                    <button class="button-accent" onclick={nav_to("contact")}>{"Agendar"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <nav class="mobile-menu">
                            { nav_buttons("mobile-link") }
                            <button class="button-accent" onclick={nav_to("contact")}>{"Agendar Consulta"}</button>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
