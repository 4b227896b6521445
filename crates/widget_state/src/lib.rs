//! Headless state machines for the brutalist UI component library.
//!
//! Everything here is DOM-free. Widget behavior with real sequencing concerns
//! (focus trapping, scroll locking, table sort and selection, tab roving) is
//! expressed as plain state plus reducer-style transitions so it can be
//! exercised natively by `cargo test`. The `brutal_ui` crate owns the
//! Leptos/DOM side and executes the commands these machines emit.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod focus;
pub mod overlay;
pub mod selection;
pub mod sort;
pub mod tabs;
