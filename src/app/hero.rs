use leptos::{html, prelude::*};

use crate::content::SiteContent;
use crate::motion::{Ease, Oscillation, Position, Style, Timeline, Tween};

use super::motion::{children, node, use_float, use_hover, use_timeline};
use super::scroll::use_scroll_sync;

const TITLE: usize = 0;
const SUBTITLE: usize = 1;
const CTA: usize = 2;
const VISUAL: usize = 3;

fn hidden() -> Style {
    Style::new().opacity(0.0).y(50.0).blur(10.0)
}

fn shown() -> Style {
    Style::new().opacity(1.0).y(0.0).blur(0.0)
}

fn hero_timeline() -> Timeline {
    Timeline::new()
        .delay(0.5)
        .set(TITLE, hidden())
        .set(SUBTITLE, hidden())
        .set(CTA, hidden())
        .set(VISUAL, Style::new().opacity(0.0).x(100.0))
        .add(Tween::to(TITLE, shown()).duration(1.2).ease(Ease::Power2Out))
        .add_at(
            Tween::to(SUBTITLE, shown()).duration(1.0).ease(Ease::Power2Out),
            Position::Offset(-0.8),
        )
        .add_at(
            Tween::to(CTA, shown()).duration(1.0).ease(Ease::Power2Out),
            Position::Offset(-0.6),
        )
        .add_at(
            Tween::to(VISUAL, Style::new().opacity(1.0).x(0.0))
                .duration(1.5)
                .ease(Ease::Power2Out),
            Position::Offset(-1.0),
        )
}

/// Background orbs drift on their own periods: 20px over 3s, 15px over 4s
/// from 1s, 25px over 5s from 2s.
fn orb_float(i: usize) -> Oscillation {
    let (dy, period) = [(-20.0, 3.0), (-15.0, 4.0), (-25.0, 5.0)][i % 3];
    Oscillation::new(Style::new().y(dy), period).delay(i as f64)
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let content = SiteContent::get();
    let sync = use_scroll_sync();
    let orbs_ref = NodeRef::<html::Div>::new();
    let title_ref = NodeRef::<html::H1>::new();
    let subtitle_ref = NodeRef::<html::P>::new();
    let cta_ref = NodeRef::<html::Div>::new();
    let visual_ref = NodeRef::<html::Div>::new();
    let hire_ref = NodeRef::<html::Button>::new();

    use_timeline(
        hero_timeline(),
        vec![
            node(title_ref),
            node(subtitle_ref),
            node(cta_ref),
            node(visual_ref),
        ],
        true,
    );
    use_float(children(orbs_ref), orb_float);
    let hire_hover = use_hover(
        node(hire_ref),
        Style::new().scale(1.05),
        Style::new().scale(1.0),
        0.3,
        Ease::Power2Out,
    );

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div node_ref=orbs_ref class="absolute inset-0">
                <div class="absolute w-96 h-96 bg-primary/10 rounded-full blur-3xl -top-48 -left-48"></div>
                <div class="absolute w-64 h-64 bg-secondary/15 rounded-full blur-2xl top-1/4 right-1/4"></div>
                <div class="absolute w-80 h-80 bg-accent/10 rounded-full blur-3xl -bottom-40 -right-40"></div>
            </div>
            <div class="container mx-auto px-6 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left space-y-8">
                        <h1
                            node_ref=title_ref
                            class="text-4xl md:text-6xl lg:text-7xl font-bold leading-tight"
                            style=hidden().inline()
                        >
                            <span class="block text-foreground">"Hi, I'm"</span>
                            <span class="block text-gradient">{content.name.clone()}</span>
                            <span class="block text-foreground text-3xl md:text-4xl lg:text-5xl mt-2">
                                {content.role.clone()}
                            </span>
                        </h1>
                        <p
                            node_ref=subtitle_ref
                            class="text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto lg:mx-0"
                            style=hidden().inline()
                        >
                            {content.tagline.clone()}
                        </p>
                        <div
                            node_ref=cta_ref
                            class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start"
                            style=hidden().inline()
                        >
                            <button
                                node_ref=hire_ref
                                class="btn-glow rounded-md bg-gradient-to-r from-primary to-secondary hover:glow-cyan text-primary-foreground font-medium px-8 py-4 text-lg"
                                on:mouseenter=move |_| hire_hover.enter()
                                on:mouseleave=move |_| hire_hover.leave()
                                on:click=move |_| sync.scroll_to_section("contact")
                            >
                                "Hire Me"
                            </button>
                            <button
                                class="glass rounded-md border border-primary/50 hover:bg-primary/10 hover:border-primary text-foreground font-medium px-8 py-4 text-lg"
                                on:click=move |_| sync.scroll_to_section("projects")
                            >
                                "View Work"
                            </button>
                        </div>
                    </div>
                    <div
                        node_ref=visual_ref
                        class="relative flex items-center justify-center"
                        style="opacity: 0;"
                    >
                        <div class="relative w-full h-96 lg:h-[600px] flex items-center justify-center">
                            <div class="relative">
                                <div class="w-64 h-64 lg:w-80 lg:h-80 bg-gradient-to-r from-primary/30 to-secondary/30 rounded-full blur-3xl animate-pulse"></div>
                                <div class="absolute inset-0 w-64 h-64 lg:w-80 lg:h-80 bg-gradient-to-r from-accent/20 to-primary/20 rounded-full blur-2xl animate-glow"></div>
                                <div class="absolute -top-8 -right-8 w-4 h-4 bg-primary rounded-full animate-bounce"></div>
                                <div
                                    class="absolute -bottom-6 -left-6 w-3 h-3 bg-secondary rounded-full animate-bounce"
                                    style="animation-delay: 0.5s;"
                                ></div>
                                <div
                                    class="absolute top-1/2 -left-12 w-2 h-2 bg-accent rounded-full animate-bounce"
                                    style="animation-delay: 1s;"
                                ></div>
                                <div
                                    class="absolute -top-4 left-1/2 w-3 h-3 bg-primary rounded-full animate-bounce"
                                    style="animation-delay: 1.5s;"
                                ></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                <div class="w-6 h-10 border-2 border-primary/50 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-primary rounded-full mt-2 animate-pulse"></div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_timeline_overlaps() {
        // title 1.2, subtitle at 0.4 ends 1.4, cta at 0.8 ends 1.8,
        // visual at 0.8 ends 2.3, plus the 0.5 delay
        let r = hero_timeline().resolve(&[1, 1, 1, 1]);
        assert!((r.duration() - 2.8).abs() < 1e-9);
        let start = r.sample(0.0);
        assert_eq!(start[TITLE][0], hidden());
        assert_eq!(start[VISUAL][0].x, Some(100.0));
    }

    #[test]
    fn test_orbs_float_out_of_phase() {
        assert_eq!(orb_float(0).sample(0.0).y, Some(0.0));
        assert!((orb_float(0).sample(3.0).y.unwrap() + 20.0).abs() < 1e-9);
        assert_eq!(orb_float(2).sample(1.5).y, Some(0.0));
    }
}
