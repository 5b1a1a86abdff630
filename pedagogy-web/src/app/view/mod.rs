mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::{CardGrid, StrategyModal};
use pedagogy_core::Strategy;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let catalog = &state.catalog.0;
    let machine = &state.modal.0;

    let visible: Vec<Strategy> = catalog.visible().into_iter().cloned().collect();
    let phases: Vec<AttrValue> = catalog
        .phases()
        .into_iter()
        .map(|phase| AttrValue::from(phase.to_string()))
        .collect();

    html! {
        <>
            <Header
                search_term={AttrValue::from(catalog.search_term.clone())}
                phase_value={AttrValue::from(catalog.phase_filter.as_select_value().to_string())}
                phases={phases}
                view={catalog.view}
                favorites_count={catalog.favorites.len()}
                on_search={handlers.search.clone()}
                on_phase={handlers.phase.clone()}
                on_toggle_view={handlers.toggle_view.clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                if state.data_ready() {
                    <CardGrid
                        strategies={visible}
                        favorites={catalog.favorites.clone()}
                        view={catalog.view}
                        on_toggle_favorite={handlers.toggle_favorite.clone()}
                        on_open={handlers.open.clone()}
                        on_show_all={handlers.show_all.clone()}
                    />
                }
            </main>
            <StrategyModal
                phase={machine.phase()}
                context={machine.context().cloned()}
                saved={state.ack.0.is_visible()}
                on_close={handlers.close.clone()}
                on_note_input={handlers.note_input.clone()}
                on_export={handlers.export.clone()}
            />
            <Footer />
        </>
    }
}
