use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic heading levels mapped to `h1`–`h6` elements.
pub enum HeadingLevel {
    /// Page-level heading.
    H1,
    /// Section heading.
    H2,
    /// Subsection heading.
    H3,
    /// Minor heading.
    H4,
    /// Dense heading.
    H5,
    /// Smallest heading.
    H6,
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive rendering a semantic heading element.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let body = children();
    let attrs = move |node: HtmlElement<html::AnyElement>| {
        node.attr("class", class.clone())
            .attr("data-ui-primitive", "true")
            .attr("data-ui-kind", "heading")
            .attr("data-ui-variant", role.token())
            .attr("data-ui-tone", tone.token())
    };

    match level {
        HeadingLevel::H1 => attrs(html::h1().into_any()).child(body).into_view(),
        HeadingLevel::H2 => attrs(html::h2().into_any()).child(body).into_view(),
        HeadingLevel::H3 => attrs(html::h3().into_any()).child(body).into_view(),
        HeadingLevel::H4 => attrs(html::h4().into_any()).child(body).into_view(),
        HeadingLevel::H5 => attrs(html::h5().into_any()).child(body).into_view(),
        HeadingLevel::H6 => attrs(html::h6().into_any()).child(body).into_view(),
    }
}
