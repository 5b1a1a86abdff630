use crate::a11y::card_trigger_id;
use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use pedagogy_core::{ModalContext, ModalPhase, VideoPanel};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StrategyModalProps {
    pub phase: ModalPhase,
    pub context: Option<ModalContext>,
    /// Whether the "saved" acknowledgment is showing.
    pub saved: bool,
    pub on_close: Callback<()>,
    pub on_note_input: Callback<String>,
    pub on_export: Callback<()>,
}

/// Detail view for the selected strategy with its reflection editor.
#[function_component(StrategyModal)]
pub fn strategy_modal(p: &StrategyModalProps) -> Html {
    let Some(ctx) = p.context.as_ref() else {
        return Html::default();
    };
    let strategy = &ctx.strategy;

    let on_input = {
        let cb = p.on_note_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };
    let on_export = {
        let cb = p.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <Modal
            phase={p.phase}
            title={AttrValue::from(strategy.title.clone())}
            eyebrow={Some(AttrValue::from(strategy.phase.clone()))}
            return_focus_id={Some(AttrValue::from(card_trigger_id(&strategy.id)))}
            on_close={p.on_close.clone()}
        >
            <section class="modal-section">
                <h3>{ t("modal.instructions") }</h3>
                <p id="modal-desc">{ strategy.body().to_string() }</p>
            </section>
            if !strategy.commands.is_empty() {
                <section class="modal-section">
                    <h3>{ t("modal.commands") }</h3>
                    <ul id="modal-commands" class="command-tags">
                        { for strategy.commands.iter().map(|cmd| html! {
                            <li class="command-tag">{ format!("#{cmd}") }</li>
                        }) }
                    </ul>
                </section>
            }
            { video_panel(&strategy.title, &strategy.video_panel()) }
            <section class="modal-section reflection">
                <label for="reflection-input">
                    <h3>{ t("modal.reflection") }</h3>
                </label>
                <p class="muted">{ t("modal.reflection_hint") }</p>
                <textarea
                    id="reflection-input"
                    rows="6"
                    value={ctx.note.clone()}
                    placeholder={t("modal.reflection_placeholder")}
                    oninput={on_input}
                />
                <div class="reflection__footer">
                    <span
                        id="save-status"
                        class={classes!("save-status", p.saved.then_some("is-visible"))}
                        aria-hidden={(!p.saved).to_string()}
                    >
                        { t("modal.saved") }
                    </span>
                    <button id="export-pdf" type="button" class="retro-btn-primary" onclick={on_export}>
                        { t("export.button") }
                    </button>
                </div>
            </section>
        </Modal>
    }
}

fn video_panel(title: &str, panel: &VideoPanel) -> Html {
    match panel {
        VideoPanel::Embed { src, search_url } => {
            let mut args = BTreeMap::new();
            args.insert("title", title);
            html! {
                <section id="video-container" class="modal-section video">
                    <iframe
                        class="video-frame"
                        src={src.clone()}
                        title={tr("modal.video", Some(&args))}
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    />
                    <a class="video-search" href={search_url.clone()} target="_blank" rel="noopener noreferrer">
                        { t("modal.search_more") }
                    </a>
                </section>
            }
        }
        VideoPanel::SearchLink { url } => html! {
            <section id="video-container" class="modal-section video video--search">
                <a class="video-search" href={url.clone()} target="_blank" rel="noopener noreferrer">
                    { t("modal.no_video") }
                </a>
            </section>
        },
    }
}
