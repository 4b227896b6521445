use widget_state::tabs::{first_enabled, move_index, tab_move_for_key, TabItem};

use super::*;
use crate::dom;
use crate::StateBinding;

/// Shared wiring between a [`Tabs`] strip and its [`TabPanel`] regions.
#[derive(Clone, Copy)]
struct TabsContext {
    base: StoredValue<String>,
    selection: StateBinding<String>,
}

fn tab_dom_id(base: &str, tab: &str) -> String {
    format!("{base}-tab-{tab}")
}

fn panel_dom_id(base: &str, tab: &str) -> String {
    format!("{base}-panel-{tab}")
}

#[component]
/// Tab strip with roving tabindex keyboard navigation.
///
/// Only the tab holding the roving index is reachable by Tab; ArrowLeft/
/// ArrowRight/Home/End move among enabled siblings (wrapping, disabled tabs
/// skipped) and selection follows focus. Selection is controlled when the
/// `selected` signal is supplied, otherwise owned internally starting from
/// `default_selected` (or the first enabled tab).
///
/// [`TabPanel`] children resolve their visibility and ARIA wiring from this
/// component's context.
pub fn Tabs(
    /// Base for the deterministic `{id}-tab-*` / `{id}-panel-*` DOM ids.
    #[prop(into)]
    id: String,
    /// Tab descriptors, in presentation order.
    #[prop(into)]
    items: MaybeSignal<Vec<TabItem>>,
    /// Caller-owned selected tab id (controlled mode).
    #[prop(optional, into)]
    selected: Option<Signal<String>>,
    /// Initial selection for uncontrolled mode.
    #[prop(optional, into)]
    default_selected: Option<String>,
    /// Notified with the tab id on every selection change.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let items = Signal::derive(move || items.get());
    let initial = default_selected
        .or_else(|| {
            items.with_untracked(|items| {
                items
                    .iter()
                    .find(|item| !item.disabled)
                    .map(|item| item.id.clone())
            })
        })
        .unwrap_or_default();
    let selection = StateBinding::from_props(selected, initial, on_change);
    let base = store_value(id);

    provide_context(TabsContext { base, selection });

    // The roving index lives on the selected tab when it is usable, else on
    // the first enabled tab so the strip stays keyboard-reachable.
    let roving_id = create_memo(move |_| {
        let current = selection.read();
        items.with(|items| {
            if items
                .iter()
                .any(|item| item.id == current && !item.disabled)
            {
                current
            } else {
                let enabled: Vec<bool> = items.iter().map(|item| !item.disabled).collect();
                first_enabled(&enabled)
                    .map(|index| items[index].id.clone())
                    .unwrap_or_default()
            }
        })
    });

    let on_tablist_keydown = move |ev: KeyboardEvent| {
        let Some(movement) = tab_move_for_key(&ev.key()) else {
            return;
        };
        let items = items.get_untracked();
        let enabled: Vec<bool> = items.iter().map(|item| !item.disabled).collect();
        let current = roving_id.get_untracked();
        let current_index = items
            .iter()
            .position(|item| item.id == current)
            .unwrap_or(0);
        let Some(target) = move_index(current_index, movement, &enabled) else {
            return;
        };
        ev.prevent_default();
        let target_id = items[target].id.clone();
        selection.write(target_id.clone());
        let _ = dom::focus_element_by_id(&tab_dom_id(&base.get_value(), &target_id));
    };

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
        >
            <div
                id=base.get_value()
                class="ui-tab-list"
                role="tablist"
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="tab-list"
                on:keydown=on_tablist_keydown
            >
                <For each=move || items.get() key=|item| item.id.clone() let:item>
                    {
                        let tab_id = item.id.clone();
                        let label = item.label.clone();
                        let is_disabled = item.disabled;
                        let dom_id = tab_dom_id(&base.get_value(), &tab_id);
                        let panel_id = panel_dom_id(&base.get_value(), &tab_id);
                        let is_selected = Signal::derive({
                            let tab_id = tab_id.clone();
                            move || selection.read() == tab_id
                        });
                        let holds_roving = Signal::derive({
                            let tab_id = tab_id.clone();
                            move || roving_id.get() == tab_id
                        });
                        let activate = move || {
                            if !is_disabled {
                                selection.write(tab_id.clone());
                            }
                        };
                        view! {
                            <button
                                type="button"
                                class="ui-tab"
                                id=dom_id
                                role="tab"
                                aria-controls=panel_id
                                aria-selected=move || is_selected.get().to_string()
                                tabindex=move || if holds_roving.get() { 0 } else { -1 }
                                disabled=is_disabled
                                data-ui-primitive="true"
                                data-ui-kind="tab"
                                data-ui-selected=move || bool_token(is_selected.get())
                                data-ui-disabled=bool_token(is_disabled)
                                on:click=move |_| activate()
                            >
                                {label}
                            </button>
                        }
                    }
                </For>
            </div>
            {children()}
        </div>
    }
}

#[component]
/// Panel region for one tab id, shown only while that tab is selected.
///
/// Must be rendered inside [`Tabs`]; outside one it renders nothing and logs
/// a warning instead of panicking.
pub fn TabPanel(
    /// Id of the tab this panel belongs to.
    #[prop(into)]
    tab: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(context) = use_context::<TabsContext>() else {
        logging::warn!("TabPanel rendered outside of a Tabs component");
        return ().into_view();
    };

    let dom_id = panel_dom_id(&context.base.get_value(), &tab);
    let labelled_by = tab_dom_id(&context.base.get_value(), &tab);
    let selection = context.selection;
    let is_selected = Signal::derive(move || selection.read() == tab);

    view! {
        <div
            class=merge_layout_class("ui-tab-panel", layout_class)
            id=dom_id
            role="tabpanel"
            aria-labelledby=labelled_by
            tabindex="0"
            data-ui-primitive="true"
            data-ui-kind="tab-panel"
            data-ui-selected=move || bool_token(is_selected.get())
        >
            <Show when=move || is_selected.get() fallback=|| ()>
                {children()}
            </Show>
        </div>
    }
    .into_view()
}
