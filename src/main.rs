use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod motion {
    pub mod error;
    pub mod timer;
    pub mod geometry;
    pub mod viewport;
    pub mod reveal;
    pub mod autoplay;
    pub mod slides;
    pub mod count_up;
    pub mod browser;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod header;
    pub mod decorations;
    pub mod reveal;
    pub mod counter;
    pub mod carousel;
    pub mod floating_contact;
}
mod pages {
    pub mod landing;
}

use components::header::Header;
use pages::landing::{NotFound, VeterinaryLanding};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <VeterinaryLanding /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
