use leptos::{html, prelude::*};

use crate::content::SiteContent;
use crate::motion::{Ease, Style, Timeline, Tween};

use super::motion::{group, node, use_timeline};

const TEXT: usize = 0;
const FILL: usize = 1;
const CONTAINER: usize = 2;

fn loading_timeline() -> Timeline {
    Timeline::new()
        .set(TEXT, hidden())
        .add(
            Tween::to(TEXT, Style::new().opacity(1.0).y(0.0))
                .duration(0.8)
                .stagger(0.2)
                .ease(Ease::Power2Out),
        )
        .add(
            Tween::to(FILL, Style::new().width(100.0))
                .duration(2.5)
                .ease(Ease::Power2Out),
        )
        .add(
            Tween::to(TEXT, Style::new().opacity(0.0).y(-30.0))
                .duration(0.6)
                .stagger(0.1),
        )
        .add(
            Tween::to(CONTAINER, Style::new().opacity(0.0).scale(0.9))
                .duration(1.0)
                .ease(Ease::Power2InOut),
        )
}

fn hidden() -> Style {
    Style::new().opacity(0.0).y(30.0)
}

/// Full-screen intro: name and progress bar fade in, the bar fills, then the
/// whole screen fades away and `on_complete` fires.
#[component]
pub fn LoadingScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let content = SiteContent::get();
    let container_ref = NodeRef::<html::Div>::new();
    let text_ref = NodeRef::<html::Div>::new();
    let progress_ref = NodeRef::<html::Div>::new();
    let fill_ref = NodeRef::<html::Div>::new();

    use_timeline(
        loading_timeline(),
        vec![
            group(vec![node(text_ref), node(progress_ref)]),
            node(fill_ref),
            node(container_ref),
        ],
        true,
    )
    .on_complete(on_complete);

    view! {
        <div
            node_ref=container_ref
            class="fixed inset-0 z-50 flex items-center justify-center bg-background"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="floating-orb w-64 h-64 bg-primary/20 -top-32 -left-32"></div>
                <div class="floating-orb w-48 h-48 bg-secondary/20 -bottom-24 -right-24"></div>
                <div class="floating-orb w-32 h-32 bg-accent/20 top-1/4 right-1/4"></div>
            </div>
            <div class="text-center space-y-8">
                <div node_ref=text_ref class="space-y-4" style=hidden().inline()>
                    <h1 class="text-6xl md:text-8xl font-bold text-gradient">
                        {content.name.clone()}
                    </h1>
                    <p class="text-muted-foreground text-lg tracking-wide">
                        "Loading Portfolio..."
                    </p>
                </div>
                <div node_ref=progress_ref class="w-80 mx-auto" style=hidden().inline()>
                    <div class="relative h-1 bg-muted/30 rounded-full overflow-hidden">
                        <div
                            node_ref=fill_ref
                            class="absolute top-0 left-0 h-full w-0 bg-gradient-to-r from-primary to-secondary rounded-full shadow-lg glow-cyan"
                        ></div>
                    </div>
                    <div class="flex justify-between mt-2 text-xs text-muted-foreground">
                        <span>"0%"</span>
                        <span>"100%"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_timeline_length() {
        // 0.8 + 0.2 stagger, 2.5 fill, 0.6 + 0.1 stagger, 1.0 fade
        let r = loading_timeline().resolve(&[2, 1, 1]);
        assert!((r.duration() - 5.2).abs() < 1e-9);
    }
}
