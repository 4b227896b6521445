//! Shared control, data-display, navigation, overlay, table, and typography
//! primitives, plus the token vocabulary of the `data-ui-*` DOM contract.
//!
//! Every primitive renders `data-ui-primitive="true"`, a `data-ui-kind`
//! discriminator, and token-valued attributes (`data-ui-variant`,
//! `data-ui-shadow`, `data-ui-frame`, ...) that the brutalist CSS layers key
//! their borders, offset shadows, and geometric decorations off. Components
//! never emit style rules themselves.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navigation;
mod overlays;
mod table;
mod typography;

pub use controls::{
    Button, CheckboxField, FieldGroup, IconButton, SelectField, Switch, TextArea, TextField,
};
pub use data_display::{Alert, Badge, Card, CardFooter, CardHeader};
pub use navigation::{TabPanel, Tabs};
pub use overlays::{Modal, ModalSize};
pub use table::{Table, TableColumn};
pub use typography::{Heading, HeadingLevel, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Accent/emphasized button.
    Accent,
    /// Danger/destructive button.
    Danger,
    /// Quiet/toggle style button.
    Quiet,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Danger => "danger",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Offset drop-shadow tokens for raised surfaces.
pub enum Shadow {
    /// No shadow.
    None,
    /// Standard hard offset shadow.
    Hard,
    /// Oversized shadow for dominant surfaces.
    Heavy,
    /// Collapsed shadow for pressed/active states.
    Pressed,
}

impl Default for Shadow {
    fn default() -> Self {
        Self::Hard
    }
}

impl Shadow {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hard => "hard",
            Self::Heavy => "heavy",
            Self::Pressed => "pressed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Border-weight tokens.
pub enum Frame {
    /// Hairline border.
    Thin,
    /// Default bold border.
    Bold,
    /// Double-ruled border.
    Double,
}

impl Default for Frame {
    fn default() -> Self {
        Self::Bold
    }
}

impl Frame {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Bold => "bold",
            Self::Double => "double",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic tone tokens for alerts, badges, and text.
pub enum Tone {
    /// Neutral tone.
    Neutral,
    /// Informational tone.
    Info,
    /// Success tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl Default for Tone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl Tone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub(crate) fn alert_icon(self) -> IconName {
        match self {
            Self::Neutral | Self::Info => IconName::Info,
            Self::Success => IconName::Success,
            Self::Warning => IconName::Warning,
            Self::Danger => IconName::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Oversized display text.
    Display,
    /// Title text.
    Title,
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Monospace/code text.
    Code,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Title => "title",
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared input-field variants.
pub enum FieldVariant {
    /// Standard input.
    Standard,
    /// Inset/editor input.
    Inset,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inset => "inset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_classes_merge_only_when_nonempty() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("toolbar-slot")),
            "ui-button toolbar-slot"
        );
    }

    #[test]
    fn tone_tokens_are_stable_css_hooks() {
        assert_eq!(Tone::Neutral.token(), "neutral");
        assert_eq!(Tone::Danger.token(), "danger");
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
