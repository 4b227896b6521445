//! Ordered row-selection operations for the data table.
//!
//! Selections are plain key vectors. Every operation normalizes its result to
//! data-source order and drops keys that no longer exist in the data, so a
//! selection can never hold stale rows or drift out of presentation order.

/// Toggles one key's membership.
pub fn toggle(selected: &[String], key: &str, data_keys: &[String]) -> Vec<String> {
    let was_selected = selected.iter().any(|candidate| candidate == key);
    data_keys
        .iter()
        .filter(|candidate| {
            if candidate.as_str() == key {
                !was_selected
            } else {
                selected.contains(candidate)
            }
        })
        .cloned()
        .collect()
}

/// Selects every row, in data-source order.
pub fn select_all(data_keys: &[String]) -> Vec<String> {
    data_keys.to_vec()
}

/// Clears the selection.
pub fn clear() -> Vec<String> {
    Vec::new()
}

/// Whether every data row is selected (false for empty data).
pub fn is_all_selected(selected: &[String], data_keys: &[String]) -> bool {
    !data_keys.is_empty() && data_keys.iter().all(|key| selected.contains(key))
}

/// Whether some, but not all, data rows are selected.
pub fn is_partially_selected(selected: &[String], data_keys: &[String]) -> bool {
    let selected_known = data_keys.iter().filter(|key| selected.contains(key)).count();
    selected_known > 0 && selected_known < data_keys.len()
}

/// Drops keys no longer present in the data, preserving data-source order.
pub fn retain_known(selected: &[String], data_keys: &[String]) -> Vec<String> {
    data_keys
        .iter()
        .filter(|key| selected.contains(key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|key| key.to_string()).collect()
    }

    #[test]
    fn select_all_yields_exactly_the_data_keys_in_source_order() {
        let data = keys(&["a", "b", "c"]);
        assert_eq!(select_all(&data), data);
        assert!(is_all_selected(&select_all(&data), &data));
    }

    #[test]
    fn select_all_on_empty_data_is_never_all_selected() {
        let data: Vec<String> = Vec::new();
        assert_eq!(select_all(&data), Vec::<String>::new());
        assert!(!is_all_selected(&select_all(&data), &data));
    }

    #[test]
    fn toggling_adds_then_removes_a_key() {
        let data = keys(&["a", "b", "c"]);
        let selected = toggle(&[], "b", &data);
        assert_eq!(selected, keys(&["b"]));
        assert_eq!(toggle(&selected, "b", &data), Vec::<String>::new());
    }

    #[test]
    fn toggle_results_follow_data_order_not_click_order() {
        let data = keys(&["a", "b", "c"]);
        let selected = toggle(&[], "c", &data);
        let selected = toggle(&selected, "a", &data);
        assert_eq!(selected, keys(&["a", "c"]));
    }

    #[test]
    fn stale_keys_are_dropped_on_every_operation() {
        let data = keys(&["a", "c"]);
        let selected = keys(&["a", "b"]);
        assert_eq!(retain_known(&selected, &data), keys(&["a"]));
        assert_eq!(toggle(&selected, "c", &data), keys(&["a", "c"]));
    }

    #[test]
    fn partial_selection_is_neither_empty_nor_full() {
        let data = keys(&["a", "b", "c"]);
        assert!(!is_partially_selected(&[], &data));
        assert!(is_partially_selected(&keys(&["b"]), &data));
        assert!(!is_partially_selected(&select_all(&data), &data));
    }

    #[test]
    fn clear_empties_the_selection() {
        assert_eq!(clear(), Vec::<String>::new());
    }
}
