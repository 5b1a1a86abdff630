use crate::i18n::{t, tr};
use pedagogy_core::{ALL_PHASES, View};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub search_term: AttrValue,
    pub phase_value: AttrValue,
    pub phases: Vec<AttrValue>,
    pub view: View,
    pub favorites_count: usize,
    pub on_search: Callback<String>,
    pub on_phase: Callback<String>,
    pub on_toggle_view: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_input = {
        let cb = p.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_change = {
        let cb = p.on_phase.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    let toggle_view = {
        let cb = p.on_toggle_view.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let count = p.favorites_count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    let favorites_only = p.view.is_favorites_only();
    let toggle_label = if favorites_only {
        tr("favorites.showing", Some(&args))
    } else {
        tr("favorites.show", Some(&args))
    };

    html! {
        <header role="banner" class="catalog-header">
            <a href="#main" class="sr-only">{ t("app.skip") }</a>
            <div class="header-content">
                <div class="header-left">
                    <h1 class="app-title">{ t("app.title") }</h1>
                    <p class="app-tagline muted">{ t("app.tagline") }</p>
                </div>
                <div class="header-controls" role="search">
                    <label for="search-bar" class="sr-only">{ t("search.label") }</label>
                    <input
                        id="search-bar"
                        type="search"
                        value={p.search_term.clone()}
                        placeholder={t("search.placeholder")}
                        oninput={on_input}
                    />
                    <label for="phase-filter" class="sr-only">{ t("phase.label") }</label>
                    <select id="phase-filter" onchange={on_change}>
                        <option value={ALL_PHASES} selected={p.phase_value.as_str() == ALL_PHASES}>
                            { t("phase.all") }
                        </option>
                        { for p.phases.iter().map(|phase| html! {
                            <option value={phase.clone()} selected={*phase == p.phase_value}>
                                { phase.clone() }
                            </option>
                        }) }
                    </select>
                    <button
                        id="favorites-toggle"
                        type="button"
                        class={classes!("favorites-toggle", favorites_only.then_some("active"))}
                        aria-pressed={favorites_only.to_string()}
                        onclick={toggle_view}
                    >
                        { toggle_label }
                    </button>
                </div>
            </div>
        </header>
    }
}
