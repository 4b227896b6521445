//! Brutalist UI primitive library for Leptos applications.
//!
//! The crate owns a set of declarative component primitives (buttons, alerts,
//! badges, cards, form fields, modal, table, tabs, typography), a centralized
//! icon API, and the stable `data-ui-*` DOM contract consumed by the CSS
//! layers. Components map props to markup and tokens; the stateful widgets
//! (modal focus containment, table sort/selection, tab roving) delegate their
//! transitions to the headless [`widget_state`] crate.
//!
//! Applications should call [`provide_overlay_manager`] once at the root so
//! overlay surfaces share a single scroll-lock ledger.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod binding;
pub mod dom;
mod icon;
mod overlay_manager;
mod primitives;

pub use binding::StateBinding;
pub use icon::{Icon, IconName, IconSize};
pub use overlay_manager::{provide_overlay_manager, use_overlay_manager, OverlayManager};
pub use primitives::{
    Alert, Badge, Button, ButtonSize, ButtonVariant, Card, CardFooter, CardHeader, CheckboxField,
    FieldGroup, FieldVariant, Frame, Heading, HeadingLevel, IconButton, LayoutJustify,
    LayoutPadding, Modal, ModalSize, SelectField, Shadow, Switch, Table, TableColumn, TabPanel,
    Tabs, Text, TextArea, TextField, TextRole, Tone,
};
pub use widget_state::sort::{ColumnSort, SortDirection, SortState};
pub use widget_state::tabs::TabItem;

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        provide_overlay_manager, Alert, Badge, Button, ButtonSize, ButtonVariant, Card, CardFooter,
        CardHeader, CheckboxField, ColumnSort, FieldGroup, FieldVariant, Frame, Heading,
        HeadingLevel, Icon, IconButton, IconName, IconSize, LayoutJustify, LayoutPadding, Modal,
        ModalSize, SelectField, Shadow, SortDirection, SortState, StateBinding, Switch, TabItem,
        TabPanel, Table, TableColumn, Tabs, Text, TextArea, TextField, TextRole, Tone,
    };
}
