use leptos::{html, prelude::*};

use crate::content::SiteContent;
use crate::motion::{scatter, shuffle, Oscillation, Style, Timeline, Tween};

use super::contact::ContactSection;
use super::motion::{children, node, use_float, use_scroll_trigger, use_timeline};
use super::scroll::use_scroll_sync;

const PARTICLES: usize = 25;

fn content_timeline() -> Timeline {
    Timeline::new().add(
        Tween::from_to(
            0,
            Style::new().opacity(0.5).y(20.0),
            Style::new().opacity(1.0).y(0.0),
        )
        .duration(0.6),
    )
}

/// Each particle bobs 8px over 4s, starting 0.8s apart in shuffled order.
fn particle_float(slot: usize) -> Oscillation {
    Oscillation::new(Style::new().y(-8.0), 4.0).delay(slot as f64 * 0.8)
}

/// Year of the build, for the copyright line.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// Contact section and footer sharing one backdrop.
#[component]
pub fn IntegratedFooter() -> impl IntoView {
    let particles_ref = NodeRef::<html::Div>::new();
    let slots = shuffle(PARTICLES, 2);
    use_float(children(particles_ref), move |i| {
        particle_float(slots.get(i).copied().unwrap_or(i))
    });

    let particles = (0..PARTICLES)
        .map(|i| {
            let style = format!(
                "left: {:.2}%; top: {:.2}%;",
                scatter(i, 0) * 100.0,
                scatter(i, 1) * 100.0
            );
            view! { <div class="absolute w-1 h-1 bg-primary/30 rounded-full" style=style></div> }
        })
        .collect_view();

    view! {
        <section id="contact" class="relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-background via-background/95 to-background"></div>
            <div class="absolute inset-0">
                <div class="absolute w-96 h-96 bg-primary/5 rounded-full blur-3xl top-20 right-20"></div>
                <div class="absolute w-80 h-80 bg-secondary/5 rounded-full blur-3xl bottom-40 left-20"></div>
            </div>
            <div node_ref=particles_ref class="absolute inset-0 pointer-events-none">
                {particles}
            </div>
            <div class="container mx-auto px-6 relative z-10 pt-20 lg:pt-32">
                <ContactSection />
                <Footer />
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = SiteContent::get();
    let sync = use_scroll_sync();
    let footer_ref = NodeRef::<html::Footer>::new();

    let entrance = use_timeline(content_timeline(), vec![node(footer_ref)], false);
    use_scroll_trigger(
        entrance,
        node(footer_ref),
        "top 95%",
        "bottom 5%",
        "play none none none",
    );

    let quick_links = content
        .quick_links()
        .map(|item| {
            let section = item.section.clone();
            view! {
                <li>
                    <button
                        class="text-muted-foreground hover:text-primary transition-colors duration-300"
                        on:click=move |_| sync.scroll_to_section(&section)
                    >
                        {item.label.clone()}
                    </button>
                </li>
            }
        })
        .collect_view();

    let socials = content
        .socials
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=social.label.clone()
                    class="p-2 glass rounded-lg text-foreground hover:text-primary hover:glow-cyan transition-all duration-300"
                >
                    <i class=social.icon.clone()></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <footer node_ref=footer_ref class="border-t border-border/30 py-12">
            <div class="grid md:grid-cols-4 gap-8 mb-8">
                <div class="md:col-span-2 space-y-4">
                    <h3 class="text-2xl font-bold text-gradient">{content.name.clone()}</h3>
                    <p class="text-muted-foreground max-w-md">{content.tagline.clone()}</p>
                    <div class="flex gap-3">{socials}</div>
                </div>
                <div>
                    <h4 class="text-foreground font-semibold mb-4">"Quick Links"</h4>
                    <ul class="space-y-2">{quick_links}</ul>
                </div>
                <div>
                    <h4 class="text-foreground font-semibold mb-4">"Contact"</h4>
                    <ul class="space-y-2 text-muted-foreground">
                        <li>{content.contact.email.clone()}</li>
                        <li>{content.contact.phone.clone()}</li>
                        <li>{content.contact.location.clone()}</li>
                    </ul>
                </div>
            </div>
            <div class="flex flex-col md:flex-row justify-between items-center gap-4 pt-8 border-t border-border/20">
                <p class="text-muted-foreground text-sm">
                    {format!("© {BUILD_YEAR} {}. Made with ♥ using Rust & Leptos.", content.name)}
                </p>
                <button
                    class="px-4 py-2 glass rounded-lg text-sm text-foreground hover:text-primary hover:glow-cyan transition-all duration-300"
                    on:click=move |_| sync.scroll_to_top()
                >
                    "↑ Back to top"
                </button>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_is_a_year() {
        assert!(BUILD_YEAR.parse::<i32>().is_ok_and(|y| y >= 2024));
    }

    #[test]
    fn test_particle_delays_are_distinct() {
        let mut delays = shuffle(PARTICLES, 2)
            .into_iter()
            .map(|slot| particle_float(slot).delay)
            .collect::<Vec<_>>();
        delays.sort_by(f64::total_cmp);
        delays.dedup();
        assert_eq!(delays.len(), PARTICLES);
        assert!((delays[PARTICLES - 1] - 19.2).abs() < 1e-9);
        for slot in 0..PARTICLES {
            assert_eq!(particle_float(slot).sample(0.0).y, Some(0.0));
        }
    }
}
