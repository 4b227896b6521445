//! DOM focus utilities shared by the overlay and tablist widgets.
//!
//! [`scan_focusable`] is a pure query: container in, ordered element list out,
//! no side effects. The focus helpers swallow browser focus errors the same
//! way the rest of the library tolerates DOM fallibility.

use wasm_bindgen::JsCast;

/// Selector for natively-focusable descendants plus explicit tabindex carriers.
///
/// Candidates are filtered afterwards for `disabled`, `tabindex="-1"`, and a
/// zero layout box. The result keeps document order; explicit positive
/// tabindex values are NOT re-sorted, so the scan approximates browser tab
/// order rather than replicating it exactly.
const FOCUSABLE_SELECTOR: &str =
    "a[href], area[href], button, input, select, textarea, [tabindex]";

/// Returns the current active element as a [`web_sys::HtmlElement`] when possible.
pub fn active_html_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element, ignoring browser focus errors.
pub fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    focus_html_element(&element);
    true
}

/// Enumerates the currently-focusable descendants of `container` in document order.
///
/// Recomputed on demand by callers (never cached) so dynamic content changes
/// inside an open overlay are picked up. An empty result is a valid outcome;
/// callers fall back to focusing the container itself.
pub fn scan_focusable(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if element.has_attribute("disabled") {
            continue;
        }
        if element.get_attribute("aria-disabled").as_deref() == Some("true") {
            continue;
        }
        if element.get_attribute("tabindex").as_deref() == Some("-1") {
            continue;
        }
        if element.offset_width() == 0 && element.offset_height() == 0 {
            continue;
        }
        items.push(element);
    }

    items
}

/// Position of the active element within a scan result, if it is inside.
pub fn active_index(items: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = active_html_element()?;
    items.iter().position(|item| *item == active)
}
