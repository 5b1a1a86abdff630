//! Card grid: a pure projection of the filtered strategies.

use crate::a11y::card_trigger_id;
use crate::i18n::{t, tr};
use pedagogy_core::{Favorites, Strategy, View};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StrategyCardProps {
    pub strategy: Strategy,
    pub favorite: bool,
    pub on_toggle_favorite: Callback<AttrValue>,
    pub on_open: Callback<AttrValue>,
}

#[function_component(StrategyCard)]
pub fn strategy_card(p: &StrategyCardProps) -> Html {
    let id = AttrValue::from(p.strategy.id.clone());
    let toggle = {
        let cb = p.on_toggle_favorite.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let open = {
        let cb = p.on_open.clone();
        let id = id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };

    let mut args = BTreeMap::new();
    args.insert("title", p.strategy.title.as_str());
    let favorite_label = if p.favorite {
        tr("card.favorite_remove", Some(&args))
    } else {
        tr("card.favorite_add", Some(&args))
    };

    html! {
        <article class="strategy-card" data-id={id.clone()}>
            <div class="strategy-card__top">
                <span class="phase-tag">{ p.strategy.phase.clone() }</span>
                <button
                    type="button"
                    class={classes!("favorite-btn", p.favorite.then_some("is-favorite"))}
                    aria-pressed={p.favorite.to_string()}
                    aria-label={favorite_label}
                    onclick={toggle}
                >
                    { if p.favorite { "★" } else { "☆" } }
                </button>
            </div>
            <h3 class="strategy-card__title">{ p.strategy.title.clone() }</h3>
            <p class="strategy-card__body line-clamp-2">{ p.strategy.body().to_string() }</p>
            <ul class="command-tags" aria-label={t("modal.commands")}>
                { for p.strategy.commands.iter().map(|cmd| html! {
                    <li class="command-tag">{ format!("#{cmd}") }</li>
                }) }
            </ul>
            <button
                id={card_trigger_id(&p.strategy.id)}
                type="button"
                class="view-btn"
                data-id={id}
                onclick={open}
            >
                { t("card.view") }
            </button>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardGridProps {
    pub strategies: Vec<Strategy>,
    pub favorites: Favorites,
    pub view: View,
    pub on_toggle_favorite: Callback<AttrValue>,
    pub on_open: Callback<AttrValue>,
    pub on_show_all: Callback<()>,
}

#[function_component(CardGrid)]
pub fn card_grid(p: &CardGridProps) -> Html {
    if p.strategies.is_empty() {
        return empty_state(p.view, &p.on_show_all);
    }

    html! {
        <section id="card-grid" class="card-grid" aria-live="polite">
            { for p.strategies.iter().map(|strategy| html! {
                <StrategyCard
                    key={strategy.id.clone()}
                    strategy={strategy.clone()}
                    favorite={p.favorites.contains(&strategy.id)}
                    on_toggle_favorite={p.on_toggle_favorite.clone()}
                    on_open={p.on_open.clone()}
                />
            }) }
        </section>
    }
}

fn empty_state(view: View, on_show_all: &Callback<()>) -> Html {
    let show_all = {
        let cb = on_show_all.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section id="card-grid" class="card-grid card-grid--empty" aria-live="polite">
            <p class="empty-state muted">
                { if view.is_favorites_only() { t("empty.favorites") } else { t("empty.none") } }
            </p>
            if view.is_favorites_only() {
                <button id="show-all-btn" type="button" class="retro-btn-secondary" onclick={show_all}>
                    { t("empty.show_all") }
                </button>
            }
        </section>
    }
}
