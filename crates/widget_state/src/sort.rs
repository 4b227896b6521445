//! Table sort state and the header-activation cycle.

use serde::{Deserialize, Serialize};

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Stable token for `data-ui-sort` CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Value for the `aria-sort` attribute on the sorted header cell.
    pub const fn aria_sort(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// An active sort: which column, which way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    /// Key of the sorted column.
    pub column: String,
    /// Direction applied to that column.
    pub direction: SortDirection,
}

/// Table sort state; `None` presents the data source order as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState(pub Option<ColumnSort>);

impl SortState {
    /// No active sort.
    pub fn unsorted() -> Self {
        Self(None)
    }

    /// Ascending sort on `column`.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self(Some(ColumnSort {
            column: column.into(),
            direction: SortDirection::Ascending,
        }))
    }

    /// Descending sort on `column`.
    pub fn descending(column: impl Into<String>) -> Self {
        Self(Some(ColumnSort {
            column: column.into(),
            direction: SortDirection::Descending,
        }))
    }

    /// The direction applied to `column`, if it is the sorted one.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.0
            .as_ref()
            .filter(|active| active.column == column)
            .map(|active| active.direction)
    }

    /// Advances the cycle for a header activation.
    ///
    /// Repeated activations of the same column walk none → asc → desc → none;
    /// activating any other column restarts at ascending on that column.
    pub fn cycle(&self, column: &str) -> Self {
        match self.direction_for(column) {
            None => Self::ascending(column),
            Some(SortDirection::Ascending) => Self::descending(column),
            Some(SortDirection::Descending) => Self::unsorted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn three_activations_of_one_column_walk_the_full_cycle() {
        let first = SortState::unsorted().cycle("name");
        let second = first.cycle("name");
        let third = second.cycle("name");

        assert_eq!(first, SortState::ascending("name"));
        assert_eq!(second, SortState::descending("name"));
        assert_eq!(third, SortState::unsorted());
    }

    #[test]
    fn activating_a_different_column_restarts_at_ascending() {
        let state = SortState::descending("name");
        assert_eq!(state.cycle("age"), SortState::ascending("age"));

        let state = SortState::ascending("name");
        assert_eq!(state.cycle("age"), SortState::ascending("age"));
    }

    #[test]
    fn direction_lookup_only_matches_the_sorted_column() {
        let state = SortState::ascending("name");
        assert_eq!(state.direction_for("name"), Some(SortDirection::Ascending));
        assert_eq!(state.direction_for("age"), None);
        assert_eq!(SortState::unsorted().direction_for("name"), None);
    }
}
