#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
pub mod bootstrap;
pub mod state;
#[cfg(any(target_arch = "wasm32", test))]
pub mod timers;
pub mod view;

pub use state::AppState;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    timers::use_presentation_timers(&app_state);

    view::render_app(&app_state)
}
