use leptos::{html, prelude::*};

use crate::content::{Project, SiteContent};
use crate::motion::{Ease, Oscillation, Style, Timeline, Tween};

use super::motion::{children, node, use_float, use_hover, use_scroll_trigger, use_timeline};

fn title_timeline() -> Timeline {
    Timeline::new().add(
        Tween::from_to(
            0,
            Style::new().opacity(0.3).y(20.0),
            Style::new().opacity(1.0).y(0.0),
        )
        .duration(0.8)
        .ease(Ease::Power1Out),
    )
}

/// Cards start mostly visible and settle in, later cards slightly later.
fn card_timeline(index: usize) -> Timeline {
    Timeline::new()
        .set(0, Style::new().opacity(0.7).y(20.0).scale(0.98))
        .add(
            Tween::to(0, Style::new().opacity(1.0).y(0.0).scale(1.0))
                .duration(0.6)
                .delay(index as f64 * 0.1)
                .ease(Ease::Power1Out),
        )
}

const HOVER: f64 = 0.3;
const LIFT_EASE: Ease = Ease::Power2Out;
/// The glow fades on the default curve, softer than the lift.
const GLOW_EASE: Ease = Ease::Power1Out;

/// Alternate cards bob in opposite directions with slowly growing periods.
fn card_float(index: usize) -> Oscillation {
    let dy = if index % 2 == 0 { -3.0 } else { 3.0 };
    Oscillation::new(Style::new().y(dy), 4.0 + index as f64 * 0.2).delay(index as f64 * 0.3)
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let title_ref = NodeRef::<html::Div>::new();
    let grid_ref = NodeRef::<html::Div>::new();

    let title = use_timeline(title_timeline(), vec![node(title_ref)], false);
    use_scroll_trigger(
        title,
        node(title_ref),
        "top 95%",
        "bottom 5%",
        "play none none none",
    );
    use_float(children(grid_ref), card_float);

    let cards = SiteContent::get()
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| view! { <ProjectCard index project=project.clone() /> })
        .collect_view();

    view! {
        <section id="projects" class="py-20 lg:py-32 relative overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute w-96 h-96 bg-secondary/5 rounded-full blur-3xl top-40 left-20"></div>
                <div class="absolute w-64 h-64 bg-accent/10 rounded-full blur-2xl bottom-40 right-20"></div>
            </div>
            <div class="container mx-auto px-6 relative z-10">
                <div node_ref=title_ref class="text-center mb-16">
                    <h2 class="text-4xl lg:text-6xl font-bold mb-6">
                        <span class="text-foreground">"Featured"</span>
                        <span class="text-gradient ml-3">"Projects"</span>
                    </h2>
                    <div class="w-20 h-1 bg-gradient-to-r from-primary to-secondary rounded-full mx-auto mb-6"></div>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "A showcase of my latest work, featuring cutting-edge technologies and innovative solutions."
                    </p>
                </div>
                <div node_ref=grid_ref class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {cards}
                </div>
            </div>
        </section>
    }
}

/// One project. Three nested layers keep the float, the scroll entrance and
/// the hover lift from writing the same `transform`.
#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let entrance_ref = NodeRef::<html::Div>::new();
    let lift_ref = NodeRef::<html::Div>::new();
    let glow_ref = NodeRef::<html::Div>::new();

    let entrance = use_timeline(card_timeline(index), vec![node(entrance_ref)], false);
    use_scroll_trigger(
        entrance,
        node(entrance_ref),
        "top 90%",
        "bottom 10%",
        "play none none none",
    );
    let lift = use_hover(
        node(lift_ref),
        Style::new().y(-10.0).scale(1.02),
        Style::new().y(0.0).scale(1.0),
        HOVER,
        LIFT_EASE,
    );
    let glow = use_hover(
        node(glow_ref),
        Style::new().opacity(1.0),
        Style::new().opacity(0.0),
        HOVER,
        GLOW_EASE,
    );

    let tech = project
        .tech
        .iter()
        .map(|t| {
            view! {
                <span class="px-3 py-1 bg-muted/50 rounded-full text-xs font-medium text-muted-foreground">
                    {t.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div>
            <div node_ref=entrance_ref style="opacity: 0.7;">
                <div
                    node_ref=lift_ref
                    class="relative group cursor-pointer"
                    on:mouseenter=move |_| {
                        lift.enter();
                        glow.enter();
                    }
                    on:mouseleave=move |_| {
                        lift.leave();
                        glow.leave();
                    }
                >
                    <div
                        node_ref=glow_ref
                        class="absolute inset-0 bg-gradient-to-r from-primary/20 to-secondary/20 rounded-2xl blur-xl"
                        style="opacity: 0;"
                    ></div>
                    <div class="relative glass rounded-2xl overflow-hidden border border-border/50 hover:border-primary/50 transition-colors duration-300">
                        <div class="relative h-48 overflow-hidden">
                            <img
                                src=project.image.clone()
                                alt=project.title.clone()
                                class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-background/60 to-transparent"></div>
                            {project
                                .featured
                                .then(|| {
                                    view! {
                                        <div class="absolute top-4 right-4 px-3 py-1 bg-primary/20 backdrop-blur-sm rounded-full text-primary text-xs font-medium border border-primary/30">
                                            "Featured"
                                        </div>
                                    }
                                })}
                        </div>
                        <div class="p-6 space-y-4">
                            <h3 class="text-xl font-bold text-foreground group-hover:text-primary transition-colors duration-300">
                                {project.title.clone()}
                            </h3>
                            <p class="text-muted-foreground text-sm leading-relaxed">
                                {project.description.clone()}
                            </p>
                            <div class="flex flex-wrap gap-2">{tech}</div>
                            <div class="flex gap-3 pt-2">
                                <a
                                    href=project.code.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center px-3 py-1.5 rounded-md text-sm glass border border-primary/30 hover:bg-primary/10 text-primary"
                                >
                                    <i class="devicon-github-plain mr-2"></i>
                                    "Code"
                                </a>
                                <a
                                    href=project.live.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center px-3 py-1.5 rounded-md text-sm bg-gradient-to-r from-primary to-secondary hover:glow-cyan text-primary-foreground"
                                >
                                    <span class="mr-2">"↗"</span>
                                    "Live Demo"
                                </a>
                            </div>
                        </div>
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
    fn test_card_delay_grows_with_index() {
        assert!((card_timeline(0).resolve(&[1]).duration() - 0.6).abs() < 1e-9);
        assert!((card_timeline(2).resolve(&[1]).duration() - 0.8).abs() < 1e-9);
        let r = card_timeline(2).resolve(&[1]);
        // still at the resting state during the delay
        assert_eq!(r.sample(0.1)[0][0].opacity, Some(0.7));
    }

    #[test]
    fn test_glow_fades_on_softer_curve_than_lift() {
        use crate::motion::Tweener;

        let mut glow = Tweener::new(Style::new().opacity(0.0));
        glow.retarget(Style::new().opacity(1.0), HOVER, GLOW_EASE);
        let half = glow.tick(HOVER / 2.0).opacity.unwrap();
        assert!((half - 0.75).abs() < 1e-9);

        let mut lift = Tweener::new(Style::new().y(0.0));
        lift.retarget(Style::new().y(-10.0), HOVER, LIFT_EASE);
        let half = lift.tick(HOVER / 2.0).y.unwrap();
        assert!((half + 8.75).abs() < 1e-9);
    }

    #[test]
    fn test_cards_float_in_opposite_directions() {
        let a = card_float(0).sample(4.0).y.unwrap();
        let b = card_float(1).sample(0.3 + 4.2).y.unwrap();
        assert!((a + 3.0).abs() < 1e-9);
        assert!((b - 3.0).abs() < 1e-9);
    }
}
