//! Injectable overlay coordination context.
//!
//! Overlay surfaces share one document body, so scroll locking lives in a
//! single manager provided at the application root rather than in ambient
//! globals. Overlapping activations are reference-counted by the
//! [`ScrollLockLedger`]; only the outermost lock reads the prior style value
//! and only the final unlock writes it back.

use leptos::*;
use widget_state::overlay::ScrollLockLedger;

/// Style property suspended while an overlay is active.
const SCROLL_PROPERTY: &str = "overflow";

/// Blocking value applied to the document body while locked.
const SCROLL_BLOCKED: &str = "hidden";

/// Shared coordination handle for overlay surfaces.
#[derive(Clone, Copy)]
pub struct OverlayManager {
    ledger: StoredValue<ScrollLockLedger>,
}

impl OverlayManager {
    fn new() -> Self {
        Self {
            ledger: store_value(ScrollLockLedger::new()),
        }
    }

    /// Whether any overlay currently holds the scroll lock.
    pub fn is_scroll_locked(&self) -> bool {
        self.ledger.with_value(|ledger| ledger.is_locked())
    }

    /// Suspends page scrolling for one overlay activation.
    pub fn lock_scroll(&self) {
        let Some(body) = document_body() else {
            return;
        };
        let style = body.style();
        let current = style
            .get_property_value(SCROLL_PROPERTY)
            .unwrap_or_default();
        let outermost = self.ledger.try_update_value(|ledger| ledger.lock(current));
        if outermost == Some(true) {
            let _ = style.set_property(SCROLL_PROPERTY, SCROLL_BLOCKED);
        }
    }

    /// Releases one overlay activation, restoring the prior style on the last.
    pub fn unlock_scroll(&self) {
        let restored = self.ledger.try_update_value(|ledger| ledger.unlock());
        let Some(Some(previous)) = restored else {
            return;
        };
        let Some(body) = document_body() else {
            return;
        };
        let style = body.style();
        if previous.is_empty() {
            let _ = style.remove_property(SCROLL_PROPERTY);
        } else {
            let _ = style.set_property(SCROLL_PROPERTY, &previous);
        }
    }
}

fn document_body() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
}

/// Installs the shared [`OverlayManager`] into context at the application root.
pub fn provide_overlay_manager() {
    provide_context(OverlayManager::new());
}

/// Resolves the shared [`OverlayManager`].
///
/// A missing context is tolerated: the caller gets a locally owned manager so
/// a bare overlay still works, degraded to single-overlay semantics.
pub fn use_overlay_manager() -> OverlayManager {
    match use_context::<OverlayManager>() {
        Some(manager) => manager,
        None => {
            logging::warn!(
                "no OverlayManager in context; call provide_overlay_manager() at the app root"
            );
            OverlayManager::new()
        }
    }
}
