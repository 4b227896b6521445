use std::cmp::Ordering;
use std::rc::Rc;

use widget_state::selection;
use widget_state::sort::{SortDirection, SortState};

use super::*;
use crate::StateBinding;

/// Column descriptor for [`Table`].
pub struct TableColumn<T: 'static> {
    key: String,
    label: String,
    render: Rc<dyn Fn(&T) -> View>,
    compare: Option<Rc<dyn Fn(&T, &T) -> Ordering>>,
}

impl<T> TableColumn<T> {
    /// A plain (unsortable) column rendering cells with `render`.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        render: impl Fn(&T) -> View + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: Rc::new(render),
            compare: None,
        }
    }

    /// Makes the column header sortable with this row comparator.
    pub fn sortable(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Rc::new(compare));
        self
    }

    /// Stable column key used by [`SortState`].
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            render: Rc::clone(&self.render),
            compare: self.compare.clone(),
        }
    }
}

#[component]
/// Data table with client-side sorting and row selection.
///
/// Sorting cycles none → ascending → descending → none on repeated header
/// activations and restarts at ascending when a different sortable column is
/// activated. Selection keys come from `row_key` (row index when absent) and
/// selection vectors always follow data-source order. Sort and selection are
/// each controlled when the caller supplies the matching state signal,
/// otherwise owned internally; change callbacks fire in both modes.
pub fn Table<T: Clone + 'static>(
    /// Row data, in source order.
    #[prop(into)]
    rows: MaybeSignal<Vec<T>>,
    /// Column descriptors, in presentation order.
    columns: Vec<TableColumn<T>>,
    /// Derives a stable selection key per row; defaults to the row index.
    #[prop(optional)]
    row_key: Option<Rc<dyn Fn(&T) -> String>>,
    /// Render row checkboxes and the select-all header checkbox.
    #[prop(default = false)]
    selectable: bool,
    /// Caller-owned selection (controlled mode), in data-source order.
    #[prop(optional, into)]
    selection: Option<Signal<Vec<String>>>,
    /// Notified with the new selection on every change.
    #[prop(optional)]
    on_selection_change: Option<Callback<Vec<String>>>,
    /// Caller-owned sort state (controlled mode).
    #[prop(optional, into)]
    sort: Option<Signal<SortState>>,
    /// Notified with the new sort state on each header activation.
    #[prop(optional)]
    on_sort_change: Option<Callback<SortState>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = Frame::Bold)] frame: Frame,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let rows = Signal::derive(move || rows.get());
    let columns = store_value(columns);
    let sort_state = StateBinding::from_props(sort, SortState::unsorted(), on_sort_change);
    let selected = StateBinding::from_props(selection, Vec::new(), on_selection_change);
    let key_for = store_value(row_key);

    // Rows keyed in data-source order; selection ordering follows this, not
    // the presented (possibly sorted) order.
    let keyed = Signal::derive(move || {
        let key_for = key_for.get_value();
        rows.with(|rows| {
            rows.iter()
                .cloned()
                .enumerate()
                .map(|(index, row)| {
                    let key = match key_for.as_ref() {
                        Some(key_for) => key_for(&row),
                        None => index.to_string(),
                    };
                    (key, row)
                })
                .collect::<Vec<_>>()
        })
    });
    let data_keys = Signal::derive(move || {
        keyed.with(|entries| entries.iter().map(|(key, _)| key.clone()).collect::<Vec<_>>())
    });

    let presented = Signal::derive(move || {
        let mut entries = keyed.get();
        if let SortState(Some(active)) = sort_state.read() {
            let compare = columns.with_value(|columns| {
                columns
                    .iter()
                    .find(|column| column.key == active.column)
                    .and_then(|column| column.compare.clone())
            });
            if let Some(compare) = compare {
                entries.sort_by(|a, b| {
                    let ordering = compare(&a.1, &b.1);
                    match active.direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                });
            }
        }
        entries
    });

    let all_selected = Signal::derive(move || {
        data_keys.with(|keys| selection::is_all_selected(&selected.read(), keys))
    });
    let partially_selected = Signal::derive(move || {
        data_keys.with(|keys| selection::is_partially_selected(&selected.read(), keys))
    });
    let toggle_all = move |_| {
        let keys = data_keys.get_untracked();
        let next = if selection::is_all_selected(&selected.read_untracked(), &keys) {
            selection::clear()
        } else {
            selection::select_all(&keys)
        };
        selected.write(next);
    };

    let header_cells = columns.with_value(|columns| {
        columns
            .iter()
            .map(|column| {
                let label = column.label.clone();
                if column.compare.is_none() {
                    return view! {
                        <th scope="col" role="columnheader" data-ui-slot="header-cell">
                            {label}
                        </th>
                    }
                    .into_view();
                }
                let sort_key = column.key.clone();
                let aria_key = column.key.clone();
                let token_key = column.key.clone();
                let icon_key = column.key.clone();
                view! {
                    <th
                        scope="col"
                        role="columnheader"
                        aria-sort=move || {
                            sort_state
                                .read()
                                .direction_for(&aria_key)
                                .map(|direction| direction.aria_sort())
                                .unwrap_or("none")
                        }
                        data-ui-slot="header-cell"
                        data-ui-sortable="true"
                        data-ui-sort=move || {
                            sort_state
                                .read()
                                .direction_for(&token_key)
                                .map(|direction| direction.token())
                                .unwrap_or("none")
                        }
                    >
                        <Button
                            variant=ButtonVariant::Quiet
                            shadow=Shadow::None
                            ui_slot="sort"
                            on_click=Callback::new(move |_| {
                                sort_state.write(sort_state.read_untracked().cycle(&sort_key));
                            })
                        >
                            {label}
                            {move || match sort_state.read().direction_for(&icon_key) {
                                Some(SortDirection::Ascending) => {
                                    view! { <Icon icon=IconName::ArrowUp size=IconSize::Sm /> }
                                        .into_view()
                                }
                                Some(SortDirection::Descending) => {
                                    view! { <Icon icon=IconName::ArrowDown size=IconSize::Sm /> }
                                        .into_view()
                                }
                                None => ().into_view(),
                            }}
                        </Button>
                    </th>
                }
                .into_view()
            })
            .collect_view()
    });

    view! {
        <table
            class=merge_layout_class("ui-table", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="table"
            data-ui-frame=frame.token()
            data-ui-selectable=bool_token(selectable)
        >
            <thead data-ui-slot="head">
                <tr role="row">
                    {selectable.then(|| {
                        view! {
                            <th scope="col" data-ui-slot="select-cell">
                                <CheckboxField
                                    checked=all_selected
                                    indeterminate=partially_selected
                                    aria_label="Select all rows".to_string()
                                    on_change=Callback::new(toggle_all)
                                />
                            </th>
                        }
                    })}
                    {header_cells}
                </tr>
            </thead>
            <tbody data-ui-slot="body">
                <For each=move || presented.get() key=|(key, _)| key.clone() let:entry>
                    {
                        let (row_id, row) = entry;
                        let row_selected = Signal::derive({
                            let row_id = row_id.clone();
                            move || selected.read().iter().any(|key| key == &row_id)
                        });
                        let toggle_row = {
                            let row_id = row_id.clone();
                            move |_| {
                                let keys = data_keys.get_untracked();
                                let next =
                                    selection::toggle(&selected.read_untracked(), &row_id, &keys);
                                selected.write(next);
                            }
                        };
                        let cells = columns.with_value(|columns| {
                            columns
                                .iter()
                                .map(|column| {
                                    let content = (column.render)(&row);
                                    view! { <td role="cell" data-ui-slot="cell">{content}</td> }
                                })
                                .collect_view()
                        });
                        view! {
                            <tr role="row" data-ui-selected=move || bool_token(row_selected.get())>
                                {selectable.then(|| {
                                    view! {
                                        <td data-ui-slot="select-cell">
                                            <CheckboxField
                                                checked=row_selected
                                                aria_label="Select row".to_string()
                                                on_change=Callback::new(toggle_row)
                                            />
                                        </td>
                                    }
                                })}
                                {cells}
                            </tr>
                        }
                    }
                </For>
            </tbody>
        </table>
    }
}
