use super::*;

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(default = Frame::Thin)] frame: Frame,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
            data-ui-frame=frame.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Card surface for option tiles, summaries, and document-like regions.
pub fn Card(
    #[prop(default = Shadow::Hard)] shadow: Shadow,
    #[prop(default = Frame::Bold)] frame: Frame,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-shadow=shadow.token()
            data-ui-frame=frame.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Card header row with title, optional meta copy, and an action slot.
pub fn CardHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let title_signal = Signal::derive(move || title.get());
    let meta_signal = Signal::derive(move || meta.get());
    view! {
        <header
            class=merge_layout_class("ui-card-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-header"
        >
            <div data-ui-slot="copy">
                <Show when=move || !title_signal.get().is_empty() fallback=|| ()>
                    <div data-ui-slot="title">{move || title_signal.get()}</div>
                </Show>
                <Show when=move || !meta_signal.get().is_empty() fallback=|| ()>
                    <div data-ui-slot="meta">{move || meta_signal.get()}</div>
                </Show>
            </div>
            <div data-ui-slot="actions">{children()}</div>
        </header>
    }
}

#[component]
/// Card footer row for trailing actions.
pub fn CardFooter(
    #[prop(default = LayoutJustify::End)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-card-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-footer"
            data-ui-justify=justify.token()
        >
            {children()}
        </footer>
    }
}

#[component]
/// Inline alert banner with tone semantics and an optional dismiss affordance.
///
/// Danger and warning tones announce assertively via `role="alert"`; the rest
/// use the polite `role="status"`. A dismissible alert without an `on_dismiss`
/// callback is tolerated: the affordance renders and the trigger is a no-op.
pub fn Alert(
    #[prop(default = Tone::Info)] tone: Tone,
    #[prop(default = Shadow::Hard)] shadow: Shadow,
    #[prop(default = Frame::Bold)] frame: Frame,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = false)] dismissible: bool,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let role = match tone {
        Tone::Warning | Tone::Danger => "alert",
        Tone::Neutral | Tone::Info | Tone::Success => "status",
    };

    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role=role
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-tone=tone.token()
            data-ui-shadow=shadow.token()
            data-ui-frame=frame.token()
        >
            <span data-ui-slot="glyph" aria-hidden="true">
                <Icon icon=tone.alert_icon() size=IconSize::Md />
            </span>
            <div data-ui-slot="copy">
                {title.map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                <div data-ui-slot="body">{children()}</div>
            </div>
            {dismissible.then(|| {
                view! {
                    <IconButton
                        icon=IconName::Dismiss
                        ui_slot="dismiss"
                        aria_label="Dismiss".to_string()
                        on_click=Callback::new(move |_| {
                            if let Some(on_dismiss) = on_dismiss.as_ref() {
                                on_dismiss.call(());
                            }
                        })
                    />
                }
            })}
        </div>
    }
}
