//! Leptos surface for the guard.

use leptos::ev::MouseEvent;
use leptos::*;
use platform_host::HostServices;
use system_ui::prelude::*;

use crate::{GuardConfig, GuardCopy, GuardSession};

const TITLE_ID: &str = "telegram-guard-title";
const BODY_ID: &str = "telegram-guard-body";

#[component]
/// Wraps page content and covers it with an "open in your browser" prompt when the page runs
/// inside Telegram's in-app browser.
///
/// Detection runs once, synchronously, when the component is created. `services` defaults to the
/// browser adapters and `config` to the built-in manifest.
pub fn InAppBrowserGuard(
    #[prop(optional)] services: Option<HostServices>,
    #[prop(optional)] config: Option<GuardConfig>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = GuardSession::mount(
        services.unwrap_or_else(platform_host_web::build_host_services),
        config.unwrap_or_default(),
    );
    let copy = store_value(session.config().copy.clone());
    let blocking = create_rw_signal(session.is_blocking());
    let session = store_value(session);

    let on_dismiss = Callback::new(move |_: MouseEvent| {
        session.update_value(|session| {
            if let Err(err) = session.dismiss() {
                logging::warn!("telegram guard dismiss rejected: {err}");
            }
        });
        blocking.set(session.with_value(GuardSession::is_blocking));
    });

    let on_open = Callback::new(move |_: MouseEvent| {
        let task = match session.try_update_value(GuardSession::open_externally) {
            Some(Ok(Some(task))) => task,
            Some(Ok(None)) | None => return,
            Some(Err(err)) => {
                logging::warn!("telegram guard open rejected: {err}");
                return;
            }
        };
        spawn_local(async move {
            match task.await {
                Ok(route) => logging::log!("telegram guard opened externally via {}", route.as_str()),
                Err(err) => logging::warn!("telegram guard external open failed: {err}"),
            }
        });
    });

    view! {
        <Show when=move || blocking.get() fallback=move || children()>
            <GuardOverlay copy=copy.get_value() on_open=on_open on_dismiss=on_dismiss />
        </Show>
    }
}

#[component]
fn GuardOverlay(
    copy: GuardCopy,
    on_open: Callback<MouseEvent>,
    on_dismiss: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <Modal
            layout_class="telegram-guard"
            aria_labelledby=TITLE_ID
            aria_describedby=BODY_ID
            ui_slot="telegram-guard"
        >
            <Card elevation=Elevation::Overlay padding=LayoutPadding::Lg layout_class="telegram-guard-card">
                <Stack gap=LayoutGap::Md align=LayoutAlign::Center>
                    <span class="telegram-guard-badge">
                        <Icon icon=IconName::Info size=IconSize::Lg />
                    </span>
                    <Heading id=TITLE_ID>{copy.headline}</Heading>
                    <p id=BODY_ID>
                        <Text tone=TextTone::Secondary>{copy.body}</Text>
                    </p>
                </Stack>
                <Stack gap=LayoutGap::Sm>
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Lg
                        leading_icon=IconName::ExternalLink
                        ui_slot="open-external"
                        on_click=on_open
                    >
                        {copy.open_button}
                    </Button>
                    <div class="telegram-guard-manual" data-ui-slot="manual-steps">
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {copy.manual_heading}
                        </Text>
                        <dl>
                            <dt><Text role=TextRole::Label>{copy.mobile_label}</Text></dt>
                            <dd><Text role=TextRole::Caption>{copy.mobile_steps}</Text></dd>
                            <dt><Text role=TextRole::Label>{copy.desktop_label}</Text></dt>
                            <dd><Text role=TextRole::Caption>{copy.desktop_steps}</Text></dd>
                        </dl>
                    </div>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        ui_slot="dismiss"
                        on_click=on_dismiss
                    >
                        {copy.dismiss_button}
                    </Button>
                </Stack>
            </Card>
        </Modal>
    }
}
