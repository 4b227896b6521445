//! Roving-tabindex math for the tablist widget.
//!
//! Only the selected tab is reachable by Tab; arrow keys move a roving index
//! among enabled siblings, wrapping at both ends and skipping disabled tabs.

use serde::{Deserialize, Serialize};

/// One tab descriptor consumed by the tablist widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    /// Stable id used for selection state and DOM id derivation.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Disabled tabs render but are skipped by roving navigation.
    pub disabled: bool,
}

impl TabItem {
    /// A new enabled tab.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the tab disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Keyboard movement within a tablist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMove {
    /// One tab to the right, wrapping.
    Next,
    /// One tab to the left, wrapping.
    Prev,
    /// First enabled tab.
    First,
    /// Last enabled tab.
    Last,
}

/// Maps a keydown `key` value to a roving movement, if it is one.
pub fn tab_move_for_key(key: &str) -> Option<TabMove> {
    match key {
        "ArrowRight" => Some(TabMove::Next),
        "ArrowLeft" => Some(TabMove::Prev),
        "Home" => Some(TabMove::First),
        "End" => Some(TabMove::Last),
        _ => None,
    }
}

/// Index of the first enabled entry.
pub fn first_enabled(enabled: &[bool]) -> Option<usize> {
    enabled.iter().position(|&on| on)
}

/// Moves the roving index, wrapping and skipping disabled entries.
///
/// Returns `None` when no entry is enabled.
pub fn move_index(current: usize, movement: TabMove, enabled: &[bool]) -> Option<usize> {
    if enabled.is_empty() {
        return None;
    }
    match movement {
        TabMove::First => first_enabled(enabled),
        TabMove::Last => enabled.iter().rposition(|&on| on),
        TabMove::Next | TabMove::Prev => {
            let delta: i32 = if matches!(movement, TabMove::Next) { 1 } else { -1 };
            let len = enabled.len() as i32;
            let mut index = current as i32;
            for _ in 0..enabled.len() {
                index = (index + delta).rem_euclid(len);
                if enabled[index as usize] {
                    return Some(index as usize);
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn arrow_keys_wrap_at_both_ends() {
        let enabled = [true, true, true];
        assert_eq!(move_index(2, TabMove::Next, &enabled), Some(0));
        assert_eq!(move_index(0, TabMove::Prev, &enabled), Some(2));
        assert_eq!(move_index(1, TabMove::Next, &enabled), Some(2));
    }

    #[test]
    fn disabled_tabs_are_skipped_in_both_directions() {
        let enabled = [true, false, true];
        assert_eq!(move_index(0, TabMove::Next, &enabled), Some(2));
        assert_eq!(move_index(2, TabMove::Prev, &enabled), Some(0));
    }

    #[test]
    fn home_and_end_land_on_the_enabled_edges() {
        let enabled = [false, true, true, false];
        assert_eq!(move_index(2, TabMove::First, &enabled), Some(1));
        assert_eq!(move_index(1, TabMove::Last, &enabled), Some(2));
    }

    #[test]
    fn a_fully_disabled_tablist_has_no_target() {
        let enabled = [false, false];
        assert_eq!(move_index(0, TabMove::Next, &enabled), None);
        assert_eq!(move_index(0, TabMove::First, &enabled), None);
        assert_eq!(first_enabled(&enabled), None);
    }

    #[test]
    fn only_roving_keys_map_to_movements() {
        assert_eq!(tab_move_for_key("ArrowRight"), Some(TabMove::Next));
        assert_eq!(tab_move_for_key("ArrowLeft"), Some(TabMove::Prev));
        assert_eq!(tab_move_for_key("Home"), Some(TabMove::First));
        assert_eq!(tab_move_for_key("End"), Some(TabMove::Last));
        assert_eq!(tab_move_for_key("Tab"), None);
        assert_eq!(tab_move_for_key("Enter"), None);
    }
}
