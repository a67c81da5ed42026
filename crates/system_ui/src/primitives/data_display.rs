use super::*;

#[component]
/// Shared card surface for dialogs, summaries, and document-like regions.
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
///
/// `id` lets dialogs point `aria-labelledby` at the heading.
pub fn Heading(#[prop(optional, into)] id: Option<String>, children: Children) -> impl IntoView {
    view! {
        <h2
            class="ui-heading"
            id=id
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=TextRole::Title.token()
            data-ui-tone=TextTone::Primary.token()
        >
            {children()}
        </h2>
    }
}
