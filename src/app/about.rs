use leptos::{html, prelude::*};

use crate::content::SiteContent;
use crate::motion::{Ease, Position, Style, Timeline, Tween};

use super::motion::{children, node, use_hover, use_scroll_trigger, use_timeline};

const SECTION: usize = 0;
const IMAGE: usize = 1;
const CONTENT: usize = 2;
const SKILLS: usize = 3;

fn about_timeline() -> Timeline {
    Timeline::new()
        .add(
            Tween::from_to(
                SECTION,
                Style::new().opacity(0.0).blur(10.0),
                Style::new().opacity(1.0).blur(0.0),
            )
            .duration(1.0)
            .ease(Ease::Power2Out),
        )
        .add_at(
            Tween::from_to(
                IMAGE,
                Style::new().x(-100.0).opacity(0.0).scale(0.8),
                Style::new().x(0.0).opacity(1.0).scale(1.0),
            )
            .duration(1.0)
            .ease(Ease::Power2Out),
            Position::Offset(-0.5),
        )
        .add_at(
            Tween::from_to(
                CONTENT,
                Style::new().y(50.0).opacity(0.0),
                Style::new().y(0.0).opacity(1.0),
            )
            .duration(0.8)
            .stagger(0.2)
            .ease(Ease::Power2Out),
            Position::Offset(-0.8),
        )
        .add_at(
            Tween::from_to(
                SKILLS,
                Style::new().y(30.0).opacity(0.0).scale(0.8),
                Style::new().y(0.0).opacity(1.0).scale(1.0),
            )
            .duration(0.6)
            .stagger(0.1)
            .ease(Ease::BackOut(1.7)),
            Position::Offset(-0.4),
        )
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let content = SiteContent::get();
    let section_ref = NodeRef::<html::Section>::new();
    let image_ref = NodeRef::<html::Div>::new();
    let portrait_ref = NodeRef::<html::Div>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let skills_ref = NodeRef::<html::Div>::new();

    let scene = use_timeline(
        about_timeline(),
        vec![
            node(section_ref),
            node(image_ref),
            children(content_ref),
            children(skills_ref),
        ],
        false,
    );
    use_scroll_trigger(
        scene,
        node(section_ref),
        "top 80%",
        "bottom 20%",
        "play none none reverse",
    );
    let portrait_hover = use_hover(
        node(portrait_ref),
        Style::new().scale(1.05).rotate_y(5.0),
        Style::new().scale(1.0).rotate_y(0.0),
        0.3,
        Ease::Power2Out,
    );

    let paragraphs = content
        .about
        .iter()
        .map(|segments| {
            let segments = segments
                .iter()
                .map(|seg| match seg.accent {
                    Some(accent) => view! {
                        <span class=format!("{} font-medium", accent.text_class())>
                            {seg.text.clone()}
                        </span>
                    }
                    .into_any(),
                    None => seg.text.clone().into_any(),
                })
                .collect_view();
            view! { <p>{segments}</p> }
        })
        .collect_view();

    let skills = content
        .skills
        .iter()
        .map(|skill| {
            view! {
                <div class="glass p-4 rounded-xl hover:glow-cyan transition-all duration-300 group cursor-pointer">
                    <div class="flex flex-col items-center space-y-2">
                        <span class=format!(
                            "{} text-3xl group-hover:scale-110 transition-transform duration-300",
                            skill.accent.text_class(),
                        )>{skill.icon.clone()}</span>
                        <span class="font-medium text-foreground">{skill.name.clone()}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="py-20 lg:py-32 relative overflow-hidden"
            style="opacity: 0;"
        >
            <div class="absolute inset-0">
                <div class="absolute w-96 h-96 bg-primary/5 rounded-full blur-3xl top-20 right-20"></div>
                <div class="absolute w-64 h-64 bg-secondary/10 rounded-full blur-2xl bottom-20 left-20"></div>
            </div>
            <div class="container mx-auto px-6 relative z-10">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div node_ref=image_ref class="flex justify-center lg:justify-start perspective">
                        <div
                            node_ref=portrait_ref
                            class="relative group"
                            on:mouseenter=move |_| portrait_hover.enter()
                            on:mouseleave=move |_| portrait_hover.leave()
                        >
                            <div class="absolute inset-0 bg-gradient-to-r from-primary via-secondary to-accent rounded-full blur-lg opacity-75 group-hover:opacity-100 transition-opacity duration-300"></div>
                            <div class="relative w-80 h-80 rounded-full overflow-hidden glass border-2 border-primary/30">
                                <img
                                    src=content.profile_image.clone()
                                    alt=format!("{} - {}", content.name, content.role)
                                    class="w-full h-full object-cover"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-background/20 via-transparent to-transparent"></div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-8 h-8 bg-primary rounded-full animate-pulse"></div>
                            <div class="absolute -bottom-4 -left-4 w-6 h-6 bg-secondary rounded-full animate-pulse delay-500"></div>
                            <div class="absolute top-1/2 -right-6 w-4 h-4 bg-accent rounded-full animate-pulse delay-1000"></div>
                        </div>
                    </div>
                    <div node_ref=content_ref class="space-y-8">
                        <div class="space-y-4">
                            <h2 class="text-4xl lg:text-5xl font-bold">
                                <span class="text-foreground">"About"</span>
                                <span class="text-gradient ml-3">"Me"</span>
                            </h2>
                            <div class="w-20 h-1 bg-gradient-to-r from-primary to-secondary rounded-full"></div>
                        </div>
                        <div class="space-y-6 text-muted-foreground text-lg leading-relaxed">
                            {paragraphs}
                        </div>
                        <div node_ref=skills_ref class="grid grid-cols-2 md:grid-cols-3 gap-4 mt-12">
                            {skills}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_timeline_hides_everything_before_play() {
        let r = about_timeline().resolve(&[1, 1, 3, 6]);
        let frame = r.sample(0.0);
        assert_eq!(frame[SECTION][0].opacity, Some(0.0));
        assert_eq!(frame[IMAGE][0].x, Some(-100.0));
        assert!(frame[CONTENT].iter().all(|s| s.opacity == Some(0.0)));
        assert!(frame[SKILLS].iter().all(|s| s.scale == Some(0.8)));
        let end = r.sample(r.duration() + 1.0);
        assert!(end[SKILLS].iter().all(|s| s.opacity == Some(1.0)));
    }
}
