// Accessibility helpers

use wasm_bindgen::{JsCast, JsValue};

/// Id of the polite live region rendered by the app shell.
pub const LIVE_REGION_ID: &str = "status-live";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #6366f1;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Replaces the text content of the live region if present.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(LIVE_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move keyboard focus to the element with `id`, if it exists and is focusable.
pub fn focus_by_id(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

const FOCUSABLE: &str = "a[href], button:not([disabled]), textarea, input, select, iframe, [tabindex]:not([tabindex='-1'])";

/// Where Tab should land instead of leaving a trapped region of `count` focusables.
///
/// `current` is the position of the focused element among them, if it is one.
/// `None` means the browser's default move stays inside the region.
#[must_use]
pub fn wrap_focus_index(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) | (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Keep Tab and Shift+Tab cycling through the focusable elements of `container`.
pub fn trap_tab(container: &web_sys::Element, event: &web_sys::KeyboardEvent) {
    if event.key() != "Tab" {
        return;
    }
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return;
    };
    let items: Vec<web_sys::HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect();
    let active: Option<JsValue> = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.active_element())
        .map(JsValue::from);
    let current = active.and_then(|active| {
        items
            .iter()
            .position(|el| AsRef::<JsValue>::as_ref(el) == &active)
    });
    if let Some(target) = wrap_focus_index(items.len(), current, event.shift_key())
        .and_then(|index| items.get(index))
    {
        event.prevent_default();
        let _ = target.focus();
    }
}

/// DOM id of the "view details" button on a strategy card.
///
/// ASCII letters, digits and `-` pass through; every other byte becomes `_xx`
/// hex, so distinct strategy ids never share a DOM id.
#[must_use]
pub fn card_trigger_id(strategy_id: &str) -> String {
    let mut id = String::from("view-");
    for c in strategy_id.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            id.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                id.push_str(&format!("_{byte:02x}"));
            }
        }
    }
    id
}
