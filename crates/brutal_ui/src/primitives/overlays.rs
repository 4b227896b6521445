use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use wasm_bindgen::JsCast;
use widget_state::focus::{FocusTrap, TrapCommand, TrapEvent};

use super::*;
use crate::dom;
use crate::use_overlay_manager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Modal surface sizing tokens.
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Default dialog.
    Md,
    /// Wide dialog.
    Lg,
    /// Near-viewport dialog.
    Full,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ModalSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }
}

#[component]
/// Modal dialog overlay.
///
/// `open` gates everything: while false nothing renders and no controller is
/// active. The mounted surface suspends page scrolling, traps keyboard focus
/// inside the dialog (when `trap_focus` is set), and offers three dismissal
/// paths (Escape, backdrop click, the explicit close button), each invoking
/// `on_close`. The modal never closes itself; the caller owns `open` and
/// flips it from the callback. A missing `on_close` makes every trigger a
/// tolerated no-op.
///
/// The overlay mounts into `container` when supplied, otherwise into the
/// document body.
pub fn Modal(
    /// Whether the dialog is shown.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked (with no arguments) by each dismissal trigger.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Escape keydown requests dismissal.
    #[prop(default = true)]
    close_on_escape: bool,
    /// Clicking the backdrop itself (not dialog content) requests dismissal.
    #[prop(default = true)]
    close_on_backdrop_click: bool,
    /// Contain keyboard focus inside the dialog while open.
    #[prop(default = true)]
    trap_focus: bool,
    /// Render the explicit dismiss affordance in the header.
    #[prop(default = true)]
    show_close_button: bool,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(default = Shadow::Heavy)] shadow: Shadow,
    #[prop(default = Frame::Bold)] frame: Frame,
    /// Dialog title rendered in the header and used as the accessible label.
    #[prop(optional, into)]
    title: Option<String>,
    /// Custom header content rendered in place of the default title row.
    #[prop(optional)]
    header: Option<ViewFn>,
    /// Optional footer content (action rows and the like).
    #[prop(optional)]
    footer: Option<ViewFn>,
    /// Alternate mount point for the overlay; defaults to the document body.
    #[prop(optional)]
    container: Option<web_sys::Element>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let header = store_value(header);
    let footer = store_value(footer);
    let container = store_value(container);
    let children = store_value(children);

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <Portal mount=container
                .get_value()
                .unwrap_or_else(|| {
                    document().body().expect("body to exist").unchecked_into()
                })>
                <ModalSurface
                    on_close=on_close
                    close_on_escape=close_on_escape
                    close_on_backdrop_click=close_on_backdrop_click
                    trap_focus=trap_focus
                    show_close_button=show_close_button
                    size=size
                    shadow=shadow
                    frame=frame
                    title=title.get_value()
                    header=header.get_value()
                    footer=footer.get_value()
                    layout_class=layout_class
                >
                    {children.with_value(|children| children())}
                </ModalSurface>
            </Portal>
        </Show>
    }
}

#[component]
/// The mounted modal surface. Exists only while the modal is open, so its
/// setup/cleanup brackets exactly one activation cycle.
fn ModalSurface(
    on_close: Option<Callback<()>>,
    close_on_escape: bool,
    close_on_backdrop_click: bool,
    trap_focus: bool,
    show_close_button: bool,
    size: ModalSize,
    shadow: Shadow,
    frame: Frame,
    title: Option<String>,
    header: Option<ViewFn>,
    footer: Option<ViewFn>,
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlays = use_overlay_manager();
    let dialog_ref: NodeRef<html::Div> = create_node_ref();
    let trap = store_value(FocusTrap::<web_sys::HtmlElement>::new());
    let activation = store_value(Vec::<TrapCommand<web_sys::HtmlElement>>::new());
    let initial_focus_tick = store_value(None::<TimeoutHandle>);

    let request_close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    // Activation order is load-bearing: the scroll lock and the focus
    // snapshot exist before either key listener below is attached, so no
    // keystroke can reach the trap ahead of the snapshot.
    overlays.lock_scroll();
    if trap_focus {
        let outcome = trap.try_update_value(|trap| {
            trap.handle(TrapEvent::Activate {
                prior_focus: dom::active_html_element(),
            })
        });
        match outcome {
            Some(Ok(commands)) => activation.set_value(commands),
            Some(Err(err)) => logging::warn!("modal focus trap activation: {err}"),
            None => {}
        }
    }

    // The activation commands need the mounted dialog node; they run once the
    // node ref resolves. The content focus itself is deferred one tick so
    // freshly committed children are scannable, and the tick is cancelled on
    // teardown.
    create_effect(move |_| {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        let commands = match activation.try_update_value(std::mem::take) {
            Some(commands) if !commands.is_empty() => commands,
            _ => return,
        };
        let container: web_sys::HtmlElement =
            dialog.unchecked_ref::<web_sys::HtmlElement>().clone();
        for command in commands {
            match command {
                TrapCommand::FocusContainer => dom::focus_html_element(&container),
                TrapCommand::ScheduleInitialFocus => {
                    let target = container.clone();
                    let scheduled = set_timeout_with_handle(
                        move || {
                            let items = dom::scan_focusable(&target);
                            match items.first() {
                                Some(first) => dom::focus_html_element(first),
                                None => dom::focus_html_element(&target),
                            }
                        },
                        Duration::ZERO,
                    );
                    match scheduled {
                        Ok(handle) => initial_focus_tick.set_value(Some(handle)),
                        Err(err) => {
                            logging::warn!("modal initial-focus tick not scheduled: {err:?}")
                        }
                    }
                }
                TrapCommand::FocusItem(_) | TrapCommand::RestoreFocus(_) => {}
            }
        }
    });

    if trap_focus {
        let tab_listener = window_event_listener(ev::keydown, move |ev| {
            if ev.key() != "Tab" {
                return;
            }
            let Some(dialog) = dialog_ref.get_untracked() else {
                return;
            };
            let container: &web_sys::HtmlElement = dialog.unchecked_ref();
            // Re-scanned on every keystroke so content changes while open are
            // picked up; never cached.
            let items = dom::scan_focusable(container);
            let event = TrapEvent::TabKey {
                backward: ev.shift_key(),
                focus_index: dom::active_index(&items),
                focusable_count: items.len(),
            };
            let commands = match trap.try_update_value(|trap| trap.handle(event)) {
                Some(Ok(commands)) => commands,
                Some(Err(err)) => {
                    logging::warn!("modal focus trap: {err}");
                    return;
                }
                None => return,
            };
            if commands.is_empty() {
                return;
            }
            ev.prevent_default();
            for command in commands {
                match command {
                    TrapCommand::FocusItem(index) => {
                        if let Some(item) = items.get(index) {
                            dom::focus_html_element(item);
                        }
                    }
                    TrapCommand::FocusContainer => dom::focus_html_element(container),
                    TrapCommand::ScheduleInitialFocus | TrapCommand::RestoreFocus(_) => {}
                }
            }
        });
        on_cleanup(move || tab_listener.remove());
    }

    if close_on_escape {
        let escape_listener = window_event_listener(ev::keydown, move |ev| {
            if ev.default_prevented() || ev.key() != "Escape" {
                return;
            }
            ev.prevent_default();
            request_close();
        });
        on_cleanup(move || escape_listener.remove());
    }

    on_cleanup(move || {
        if let Some(handle) = initial_focus_tick.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        let outcome = trap.try_update_value(|trap| trap.handle(TrapEvent::Deactivate));
        if let Some(Ok(commands)) = outcome {
            for command in commands {
                if let TrapCommand::RestoreFocus(element) = command {
                    // The trigger may have left the document while we were open.
                    if element.is_connected() {
                        dom::focus_html_element(&element);
                    }
                }
            }
        }
        overlays.unlock_scroll();
    });

    let aria_label = title.clone();
    let has_header = title.is_some() || header.is_some() || show_close_button;

    view! {
        <div
            class=merge_layout_class("ui-modal-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |ev| {
                if !close_on_backdrop_click {
                    return;
                }
                let (Some(target), Some(current)) = (ev.target(), ev.current_target()) else {
                    return;
                };
                // Clicks inside the dialog bubble up with a different target;
                // only a direct backdrop hit dismisses.
                if target == current {
                    request_close();
                }
            }
        >
            <div
                class="ui-modal"
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                tabindex="-1"
                node_ref=dialog_ref
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-size=size.token()
                data-ui-shadow=shadow.token()
                data-ui-frame=frame.token()
            >
                {has_header.then(|| {
                    view! {
                        <header data-ui-slot="header">
                            {match header {
                                Some(header) => header.run(),
                                None => title
                                    .map(|title| {
                                        view! {
                                            <Heading level=HeadingLevel::H2 role=TextRole::Title>
                                                {title}
                                            </Heading>
                                        }
                                        .into_view()
                                    })
                                    .into_view(),
                            }}
                            {show_close_button.then(|| {
                                view! {
                                    <IconButton
                                        icon=IconName::Dismiss
                                        ui_slot="dismiss"
                                        aria_label="Close dialog".to_string()
                                        on_click=Callback::new(move |_| request_close())
                                    />
                                }
                            })}
                        </header>
                    }
                })}
                <div data-ui-slot="body">{children()}</div>
                {footer.map(|footer| {
                    view! { <footer data-ui-slot="footer">{footer.run()}</footer> }
                })}
            </div>
        </div>
    }
}
