use stylist::yew::styled_component;
use web_sys::window;
use yew::prelude::*;

use crate::config;

/// Fixed chat button in the bottom-right corner.
#[styled_component(FloatingContact)]
pub fn floating_contact() -> Html {
    let hovered = use_state(|| false);

    let onclick = Callback::from(|_: MouseEvent| {
        let link = config::site().whatsapp_link();
        let Some(window) = window() else {
            gloo_console::error!("No window to open chat link");
            return;
        };
        if let Err(err) = window.open_with_url_and_target(&link, "_blank") {
            gloo_console::error!("Failed to open chat link:", err);
        }
    });

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let button = css!(
        r#"
            position: fixed;
            bottom: 24px;
            right: 24px;
            z-index: 50;
            width: 60px;
            height: 60px;
            border: none;
            border-radius: 50%;
            background: #25D366;
            color: white;
            box-shadow: 0 8px 24px rgba(37, 211, 102, 0.4);
            cursor: pointer;
            transition: transform 0.2s ease;

            &:hover {
                transform: scale(1.1);
            }
        "#
    );
    let tooltip = css!(
        r#"
            position: absolute;
            right: 72px;
            top: 50%;
            transform: translateY(-50%);
            white-space: nowrap;
            padding: 6px 12px;
            border-radius: 8px;
            background: #1e293b;
            color: white;
            font-size: 0.85rem;
        "#
    );

    html! {
        <button class={classes!(button)} {onclick} {onmouseenter} {onmouseleave} aria-label="WhatsApp">
            <svg width="30" height="30" viewBox="0 0 24 24" fill="currentColor">
                <path d="M12 2C6.48 2 2 6.48 2 12c0 1.77.46 3.43 1.27 4.88L2 22l5.24-1.24A9.96 9.96 0 0 0 12 22c5.52 0 10-4.48 10-10S17.52 2 12 2zm5.2 14.1c-.22.62-1.28 1.19-1.77 1.24-.45.05-1.02.07-1.65-.1-.38-.12-.87-.28-1.5-.55-2.64-1.14-4.36-3.8-4.49-3.98-.13-.17-1.07-1.42-1.07-2.72 0-1.3.68-1.93.92-2.2.24-.26.53-.33.7-.33h.5c.16 0 .38-.06.6.46.22.53.75 1.83.82 1.96.07.13.11.29.02.46-.09.17-.13.28-.26.43-.13.15-.27.34-.39.46-.13.13-.26.27-.11.53.15.26.67 1.1 1.44 1.79.99.88 1.82 1.15 2.08 1.28.26.13.41.11.56-.07.15-.17.65-.76.82-1.02.17-.26.35-.22.58-.13.24.09 1.51.71 1.77.84.26.13.43.2.5.3.06.12.06.7-.16 1.35z" />
            </svg>
            {
                if *hovered {
                    html! { <span class={classes!(tooltip)}>{"Fale conosco"}</span> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}
