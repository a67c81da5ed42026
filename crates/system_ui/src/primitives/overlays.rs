use super::*;

#[component]
/// Full-viewport blocking modal: a translucent backdrop with a centered dialog card.
///
/// The backdrop swallows pointer input so nothing underneath stays interactive. There is no
/// implicit close affordance; callers render their own actions inside `children`.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            data-ui-slot=ui_slot
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-labelledby=aria_labelledby
                aria-describedby=aria_describedby
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-elevation=Elevation::Overlay.token()
            >
                {children()}
            </div>
        </div>
    }
}
