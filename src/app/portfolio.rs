use leptos::prelude::*;

use super::about::AboutSection;
use super::footer::IntegratedFooter;
use super::hero::HeroSection;
use super::loading::LoadingScreen;
use super::motion::provide_ticker;
use super::nav::Navigation;
use super::projects::ProjectsSection;
use super::scroll::provide_scroll_sync;
use super::toast::{provide_toaster, Toasts};

/// The whole page: the loading screen first, then every section.
#[component]
pub fn Portfolio() -> impl IntoView {
    provide_ticker();
    provide_scroll_sync();
    provide_toaster();

    let (is_loading, set_is_loading) = signal(true);

    // The page must not scroll under the loading screen.
    Effect::new(move |_| {
        let overflow = if is_loading.get() { "hidden" } else { "auto" };
        let Some(body) = document().body() else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            log::warn!("could not set body overflow: {e:?}");
        }
    });

    view! {
        <div class="relative">
            <Show
                when=move || !is_loading.get()
                fallback=move || {
                    view! {
                        <LoadingScreen on_complete=Callback::new(move |_| {
                            log::debug!("loading finished");
                            set_is_loading(false)
                        }) />
                    }
                }
            >
                <Navigation />
                <main>
                    <HeroSection />
                    <AboutSection />
                    <ProjectsSection />
                    <IntegratedFooter />
                </main>
            </Show>
            <Toasts />
        </div>
    }
}
