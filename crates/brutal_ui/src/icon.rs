//! Centralized icon abstraction for the primitive set.
//!
//! Components consume semantic identifiers and a single SVG renderer instead
//! of embedding ad hoc markup. The catalog is deliberately small: these are
//! the glyphs the library's own widgets use (dismiss affordances, sort
//! indicators, alert tones); applications bring their own icon sets.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by the primitives.
pub enum IconName {
    /// Dismiss/close glyph.
    Dismiss,
    /// Checkmark glyph.
    Checkmark,
    /// Collapsed/expand chevron.
    ChevronDown,
    /// Ascending sort arrow.
    ArrowUp,
    /// Descending sort arrow.
    ArrowDown,
    /// Informational tone glyph.
    Info,
    /// Success tone glyph.
    Success,
    /// Warning tone glyph.
    Warning,
    /// Danger tone glyph.
    Danger,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::Checkmark => "checkmark",
            Self::ChevronDown => "chevron-down",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Raw SVG body markup for the glyph (24px grid, stroke-based geometry).
    fn svg_body(self) -> &'static str {
        match self {
            Self::Dismiss => r#"<path d="M5 5l14 14M19 5L5 19"/>"#,
            Self::Checkmark => r#"<path d="M4 13l5 5L20 6"/>"#,
            Self::ChevronDown => r#"<path d="M5 9l7 7 7-7"/>"#,
            Self::ArrowUp => r#"<path d="M12 19V5M5 12l7-7 7 7"/>"#,
            Self::ArrowDown => r#"<path d="M12 5v14M5 12l7 7 7-7"/>"#,
            Self::Info => r#"<rect x="4" y="4" width="16" height="16"/><path d="M12 11v6M12 7v1"/>"#,
            Self::Success => r#"<rect x="4" y="4" width="16" height="16"/><path d="M8 12l3 3 5-6"/>"#,
            Self::Warning => r#"<path d="M12 3L2 21h20z"/><path d="M12 10v5M12 17v1"/>"#,
            Self::Danger => r#"<rect x="4" y="4" width="16" height="16"/><path d="M9 9l6 6M15 9l-6 6"/>"#,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Extra small (12px).
    Xs,
    /// Small (16px).
    Sm,
    /// Default (20px).
    Md,
    /// Large (24px).
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    /// Stable token for the `data-ui-size` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    const fn pixels(self) -> &'static str {
        match self {
            Self::Xs => "12",
            Self::Sm => "16",
            Self::Md => "20",
            Self::Lg => "24",
        }
    }
}

#[component]
/// Renders one semantic icon as inline SVG.
pub fn Icon(
    /// Which glyph to render.
    icon: IconName,
    /// Sizing token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 24 24"
            width=size.pixels()
            height=size.pixels()
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="square"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            inner_html=icon.svg_body()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_tokens_are_unique() {
        let names = [
            IconName::Dismiss,
            IconName::Checkmark,
            IconName::ChevronDown,
            IconName::ArrowUp,
            IconName::ArrowDown,
            IconName::Info,
            IconName::Success,
            IconName::Warning,
            IconName::Danger,
        ];
        let mut tokens: Vec<_> = names.iter().map(|name| name.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), names.len());
    }
}
