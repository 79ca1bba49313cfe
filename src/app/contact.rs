use leptos::{html, prelude::*};

use crate::contact::{ContactForm, Field};
use crate::content::{SiteContent, SocialLink};
use crate::motion::{Ease, Style, Timeline, Tween};

use super::motion::{children, node, use_hover, use_scroll_trigger, use_timeline};
use super::toast::use_toaster;

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border glass border-border/50 focus:border-primary focus:glow-cyan focus:outline-none bg-background/50 backdrop-blur-sm";

fn title_timeline() -> Timeline {
    Timeline::new().add(
        Tween::from_to(
            0,
            Style::new().opacity(0.4).y(15.0),
            Style::new().opacity(1.0).y(0.0),
        )
        .duration(0.6),
    )
}

fn form_timeline() -> Timeline {
    Timeline::new()
        .set(0, Style::new().opacity(0.6).x(-20.0))
        .add(
            Tween::to(0, Style::new().opacity(1.0).x(0.0))
                .duration(0.5)
                .stagger(0.05),
        )
}

fn socials_timeline() -> Timeline {
    Timeline::new()
        .set(0, Style::new().opacity(0.7).scale(0.95))
        .add(
            Tween::to(0, Style::new().opacity(1.0).scale(1.0))
                .duration(0.4)
                .stagger(0.05),
        )
}

/// Quick squeeze of the submit button.
fn press_timeline() -> Timeline {
    Timeline::new()
        .add(Tween::to(0, Style::new().scale(0.95)).duration(0.1))
        .add(Tween::to(0, Style::new().scale(1.0)).duration(0.1))
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let content = SiteContent::get();
    let title_ref = NodeRef::<html::Div>::new();
    let socials_ref = NodeRef::<html::Div>::new();

    let title = use_timeline(title_timeline(), vec![node(title_ref)], false);
    use_scroll_trigger(
        title,
        node(title_ref),
        "top 95%",
        "bottom 5%",
        "play none none none",
    );
    let socials = use_timeline(socials_timeline(), vec![children(socials_ref)], false);
    use_scroll_trigger(
        socials,
        node(socials_ref),
        "top 90%",
        "bottom 10%",
        "play none none none",
    );

    let social_links = content
        .socials
        .iter()
        .map(|social| view! { <SocialButton social=social.clone() /> })
        .collect_view();

    view! {
        <div class="mb-20">
            <div node_ref=title_ref class="text-center mb-16">
                <h2 class="text-4xl lg:text-6xl font-bold mb-6">
                    <span class="text-foreground">"Get In"</span>
                    <span class="text-gradient ml-3">"Touch"</span>
                </h2>
                <div class="w-20 h-1 bg-gradient-to-r from-primary to-secondary rounded-full mx-auto mb-6"></div>
                <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                    "Have a project in mind or just want to say hello? Drop me a message and let's create something amazing together."
                </p>
            </div>
            <div class="max-w-4xl mx-auto grid lg:grid-cols-2 gap-16 items-start">
                <ContactFormView />
                <div class="space-y-8">
                    <div class="glass p-8 rounded-2xl space-y-6">
                        <h3 class="text-2xl font-bold text-foreground mb-4">"Contact Information"</h3>
                        <div class="space-y-4">
                            <InfoRow label="Email" value=content.contact.email.clone() />
                            <InfoRow label="Phone" value=content.contact.phone.clone() />
                            <InfoRow label="Location" value=content.contact.location.clone() />
                        </div>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold text-foreground mb-6">"Connect With Me"</h3>
                        <div node_ref=socials_ref class="flex gap-4">
                            {social_links}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-muted-foreground text-sm uppercase tracking-wide">{label}</p>
            <p class="text-foreground font-medium">{value}</p>
        </div>
    }
}

/// Social icon that lifts on hover. The wrapper takes the stagger-in, the
/// link itself the hover, so the two never fight over `transform`.
#[component]
fn SocialButton(social: SocialLink) -> impl IntoView {
    let link_ref = NodeRef::<html::A>::new();
    let hover = use_hover(
        node(link_ref),
        Style::new().scale(1.1).y(-5.0),
        Style::new().scale(1.0).y(0.0),
        0.3,
        Ease::Power2Out,
    );
    view! {
        <div>
            <a
                node_ref=link_ref
                href=social.href
                target="_blank"
                rel="noopener noreferrer"
                aria-label=social.label
                class="block p-4 glass rounded-xl hover:glow-cyan transition-shadow duration-300 text-2xl text-foreground"
                on:mouseenter=move |_| hover.enter()
                on:mouseleave=move |_| hover.leave()
            >
                <i class=social.icon></i>
            </a>
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let toaster = use_toaster();
    let form = RwSignal::new(ContactForm::default());
    let form_ref = NodeRef::<html::Form>::new();
    let submit_ref = NodeRef::<html::Button>::new();

    let entrance = use_timeline(form_timeline(), vec![children(form_ref)], false);
    use_scroll_trigger(
        entrance,
        node(form_ref),
        "top 90%",
        "bottom 10%",
        "play none none none",
    );
    let press = use_timeline(press_timeline(), vec![node(submit_ref)], false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(toast)) => {
                log::info!("contact form submitted");
                press.restart();
                toaster.push(toast);
            }
            Some(Err(toast)) => toaster.push(toast),
            None => {}
        }
    };

    let value = move |field: Field| form.with(|f| f.get(field).to_string());

    view! {
        <form node_ref=form_ref on:submit=on_submit class="space-y-6">
            <div class="space-y-4">
                <div>
                    <label for="name" class="block text-sm font-medium text-foreground mb-2">
                        {Field::Name.label()}
                    </label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        placeholder="John Doe"
                        class=INPUT_CLASS
                        prop:value=move || value(Field::Name)
                        on:input=move |ev| form.update(|f| f.set(Field::Name, event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="email" class="block text-sm font-medium text-foreground mb-2">
                        {Field::Email.label()}
                    </label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="john@example.com"
                        class=INPUT_CLASS
                        prop:value=move || value(Field::Email)
                        on:input=move |ev| form.update(|f| f.set(Field::Email, event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="message" class="block text-sm font-medium text-foreground mb-2">
                        {Field::Message.label()}
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        rows=6
                        placeholder="Tell me about your project..."
                        class=format!("{INPUT_CLASS} resize-none")
                        prop:value=move || value(Field::Message)
                        on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    ></textarea>
                </div>
            </div>
            <div>
                <button
                    node_ref=submit_ref
                    type="submit"
                    class="w-full btn-glow rounded-md bg-gradient-to-r from-primary to-secondary hover:glow-cyan text-primary-foreground font-medium py-4"
                >
                    <span class="mr-2">"✈"</span>
                    "Send Message"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_returns_to_rest() {
        let r = press_timeline().resolve(&[1]);
        assert!((r.duration() - 0.2).abs() < 1e-9);
        assert!((r.sample(1.0)[0][0].scale.unwrap() - 1.0).abs() < 1e-9);
        assert!(r.sample(0.1)[0][0].scale.unwrap() < 0.951);
    }
}
