use crate::a11y::{focus_by_id, trap_tab};
use crate::i18n::t;
use pedagogy_core::ModalPhase;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: ModalPhase,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog frame with backdrop, header and close control.
///
/// Tab is kept inside the panel while it is shown. Renders nothing while closed; the panel carries the phase as a CSS modifier
/// so opening and closing can animate.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let was_mounted = use_mut_ref(|| false);

    {
        let container_ref = container_ref.clone();
        let return_focus = props.return_focus_id.clone();
        let mounted = props.phase != ModalPhase::Closed;
        use_effect_with(
            (mounted, return_focus),
            move |(mounted, return_focus_id)| {
                let previously = *was_mounted.borrow();
                *was_mounted.borrow_mut() = *mounted;
                if *mounted && !previously {
                    if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                        let _ = el.focus();
                    }
                } else if !*mounted
                    && previously
                    && let Some(id) = return_focus_id.as_ref()
                {
                    focus_by_id(id);
                }
                || {}
            },
        );
    }

    if props.phase == ModalPhase::Closed {
        return Html::default();
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            } else if let Some(panel) = container_ref.cast::<web_sys::Element>() {
                trap_tab(&panel, &e);
            }
        })
    };

    html! {
        <div id="activity-modal" class={classes!("modal-root", props.phase.css_class())}>
            <div id="modal-backdrop" class="modal-backdrop" role="presentation" onclick={on_close.clone()}></div>
            <div
                id="modal-panel"
                class={classes!("modal-panel", props.phase.css_class())}
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                tabindex="-1"
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <div class="modal__header">
                    <div>
                        { props.eyebrow.as_ref().map(|eyebrow| html! {
                            <span id="modal-phase" class="modal__eyebrow">{ eyebrow.clone() }</span>
                        }).unwrap_or_default() }
                        <h2 id="modal-title">{ props.title.clone() }</h2>
                    </div>
                    <button id="close-modal" type="button" class="modal__close" aria-label={t("modal.close")} onclick={on_close}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
