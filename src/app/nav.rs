use leptos::{html, prelude::*};

use crate::content::SiteContent;
use crate::motion::{Ease, Position, Style, Timeline, Tween};

use super::motion::{children, node, use_timeline};
use super::scroll::use_scroll_sync;

/// Scroll offset past which the bar gets its glass background.
const SCROLLED_AT: f64 = 50.0;

#[component]
pub fn Navigation() -> impl IntoView {
    let content = SiteContent::get();
    let sync = use_scroll_sync();
    let (menu_open, set_menu_open) = signal(false);
    let scrolled = Memo::new(move |_| sync.y.get() > SCROLLED_AT);

    let go_to = move |section: String| {
        sync.scroll_to_section(&section);
        set_menu_open(false);
    };

    let desktop_links = content
        .nav
        .iter()
        .map(|item| {
            let section = item.section.clone();
            view! {
                <button
                    on:click=move |_| go_to(section.clone())
                    class="text-foreground/80 hover:text-primary transition-colors duration-300 relative group"
                >
                    {item.label.clone()}
                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-primary to-secondary transition-all duration-300 group-hover:w-full"></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-40 transition-all duration-300 glass backdrop-blur-xl border-b border-border/50"
            } else {
                "fixed top-0 left-0 right-0 z-40 transition-all duration-300"
            }
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="text-2xl font-bold text-gradient">{content.name.clone()}</div>
                    <div class="hidden md:flex items-center space-x-8">
                        {desktop_links} <div class="flex items-center space-x-4 ml-8">
                            <SocialIcons class="p-2 rounded-lg glass hover:glow-cyan transition-all duration-300 hover:scale-110" />
                        </div>
                    </div>
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="md:hidden p-2 rounded-lg glass hover:glow-cyan transition-all duration-300 text-2xl leading-none"
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>
        <Show when=move || menu_open.get()>
            <MobileMenu go_to />
        </Show>
    }
}

#[component]
fn SocialIcons(class: &'static str) -> impl IntoView {
    SiteContent::get()
        .socials
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=class
                    aria-label=social.label.clone()
                >
                    <i class=social.icon.clone()></i>
                </a>
            }
        })
        .collect_view()
}

const PANEL: usize = 0;
const ITEMS: usize = 1;

fn menu_timeline(viewport_w: f64) -> Timeline {
    Timeline::new()
        .add(
            Tween::from_to(
                PANEL,
                Style::new().x(viewport_w).opacity(0.0),
                Style::new().x(0.0).opacity(1.0),
            )
            .duration(0.5)
            .ease(Ease::Power2Out),
        )
        .add_at(
            Tween::from_to(
                ITEMS,
                Style::new().x(50.0).opacity(0.0),
                Style::new().x(0.0).opacity(1.0),
            )
            .duration(0.3)
            .stagger(0.1)
            .delay(0.2),
            Position::At(0.0),
        )
}

/// Full-screen menu for small viewports; slides in from the right whenever
/// it is mounted.
#[component]
fn MobileMenu<F>(go_to: F) -> impl IntoView
where
    F: Fn(String) + Copy + Send + Sync + 'static,
{
    let panel_ref = NodeRef::<html::Div>::new();
    let items_ref = NodeRef::<html::Div>::new();
    let viewport_w = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    use_timeline(
        menu_timeline(viewport_w),
        vec![node(panel_ref), children(items_ref)],
        true,
    );

    let items = SiteContent::get()
        .nav
        .iter()
        .map(|item| {
            let section = item.section.clone();
            view! {
                <button
                    on:click=move |_| go_to(section.clone())
                    class="text-2xl font-medium text-foreground hover:text-primary transition-colors duration-300"
                >
                    {item.label.clone()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div node_ref=panel_ref class="fixed inset-0 z-30 md:hidden">
            <div class="absolute inset-0 bg-background/95 backdrop-blur-xl"></div>
            <div
                node_ref=items_ref
                class="relative h-full flex flex-col items-center justify-center space-y-8"
            >
                {items}
                <div class="flex items-center space-x-6 mt-8">
                    <SocialIcons class="p-3 rounded-lg glass hover:glow-cyan transition-all duration-300" />
                </div>
            </div>
        </div>
    }
}
