use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;
use telegram_guard::InAppBrowserGuard;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Play" />
        <Meta name="description" content="Browser game lobby." />

        <InAppBrowserGuard>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=HomePage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </Router>
        </InAppBrowserGuard>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Card layout_class="site-lobby">
            <Stack gap=LayoutGap::Md>
                <Heading>"Game Lobby"</Heading>
                <Text tone=TextTone::Secondary>
                    "Pick a table to start playing. Fullscreen, audio, and saved progress need a regular browser."
                </Text>
            </Stack>
        </Card>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="canonical-content">
            <Heading>"Not found"</Heading>
            <A href="/">"Back to the lobby"</A>
        </section>
    }
}
