use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod submission;
mod utils {
    pub mod debounce;
    pub mod timer;
    pub mod validation;
}
mod state {
    pub mod form;
    pub mod hover;
    pub mod page;
    pub mod playback;
}
mod components {
    pub mod footer;
    pub mod form_modal;
    pub mod marker;
    pub mod modal_shell;
    pub mod question_form;
    pub mod video_modal;
}
mod pages {
    pub mod home;
}

use config::PageConfig;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tablet")]
    Tablet,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home config={PageConfig::load()} /> }
        }
        Route::Tablet => {
            info!("Rendering Tablet page");
            html! { <Home config={PageConfig::tablet()} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
