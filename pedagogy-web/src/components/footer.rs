use crate::a11y::LIVE_REGION_ID;
use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="catalog-footer">
            <p class="muted">{ t("footer.copyright") }</p>
            <div id={LIVE_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
        </footer>
    }
}
