//! Binds the `motion` engine to DOM elements and animation frames.
//!
//! One [`Ticker`] per page runs a single `requestAnimationFrame` loop and fans
//! each frame out to every live scene, hover and float. Scenes are created in
//! effects, so they only ever exist in the browser.

use std::sync::Arc;

use leptos::{prelude::*, tachys::html::element::ElementType};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::motion::{
    Action, Ease, Oscillation, Player, PlayerEvent, ScrollTrigger, Style, Timeline,
    ToggleActions, TriggerBounds, Tweener,
};

use super::scroll::ScrollSync;

/// Longest step fed to animations, so a tab coming back from the background
/// does not jump everything to its end.
const MAX_FRAME: f64 = 0.1;

/// Lazily resolves animation targets to elements.
pub type Resolve = Arc<dyn Fn() -> Vec<HtmlElement> + Send + Sync>;

type Subscriber = Arc<dyn Fn(f64) + Send + Sync>;

pub fn node<E>(node_ref: NodeRef<E>) -> Resolve
where
    E: ElementType + Send + Sync + 'static,
    E::Output: JsCast + Clone + 'static,
{
    Arc::new(move || {
        node_ref
            .get_untracked()
            .map(|el| vec![el.unchecked_into::<HtmlElement>()])
            .unwrap_or_default()
    })
}

/// The element's children, e.g. for staggering the rows of a form.
pub fn children<E>(node_ref: NodeRef<E>) -> Resolve
where
    E: ElementType + Send + Sync + 'static,
    E::Output: JsCast + Clone + 'static,
{
    Arc::new(move || {
        let Some(el) = node_ref.get_untracked() else {
            return Vec::new();
        };
        let el = el.unchecked_into::<HtmlElement>();
        let children = el.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|c| c.dyn_into::<HtmlElement>().ok())
            .collect()
    })
}

/// Several targets animated as one staggered group.
pub fn group(targets: Vec<Resolve>) -> Resolve {
    Arc::new(move || targets.iter().flat_map(|t| t()).collect())
}

fn apply(el: &HtmlElement, style: &Style) {
    let decl = el.style();
    for (prop, value) in style.css() {
        if let Err(e) = decl.set_property(prop, &value) {
            log::warn!("couldn't set {prop}: {e:?}");
        }
    }
}

#[derive(Clone, Copy)]
pub struct Ticker {
    subscribers: StoredValue<Vec<(u64, Subscriber)>>,
    next_id: StoredValue<u64>,
}

impl Ticker {
    fn add(&self, f: impl Fn(f64) + Send + Sync + 'static) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.subscribers.update_value(|subs| subs.push((id, Arc::new(f))));
        id
    }

    fn remove(&self, id: u64) {
        self.subscribers
            .try_update_value(|subs| subs.retain(|(i, _)| *i != id));
    }

    fn dispatch(&self, dt: f64) {
        // snapshot, so subscribers may unmount components while we iterate
        let Some(subs) = self
            .subscribers
            .try_with_value(|subs| subs.iter().map(|(_, f)| f.clone()).collect::<Vec<_>>())
        else {
            return;
        };
        for f in subs {
            f(dt);
        }
    }
}

pub fn provide_ticker() {
    let ticker = Ticker {
        subscribers: StoredValue::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(ticker);
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        ticker.dispatch((args.delta / 1000.0).clamp(0.0, MAX_FRAME));
    });
}

/// Calls `f` with the frame delta in seconds until the current owner is
/// cleaned up.
pub fn use_ticker(f: impl Fn(f64) + Send + Sync + 'static) {
    let ticker = expect_context::<Ticker>();
    let id = ticker.add(f);
    on_cleanup(move || ticker.remove(id));
}

struct Scene {
    player: Player,
    slots: Vec<Vec<HtmlElement>>,
}

impl Scene {
    fn mount(timeline: &Timeline, targets: &[Resolve]) -> Self {
        let slots = targets.iter().map(|t| t()).collect::<Vec<_>>();
        let counts = slots.iter().map(Vec::len).collect::<Vec<_>>();
        if counts.iter().any(|c| *c == 0) {
            log::warn!("timeline mounted with missing targets: {counts:?}");
        }
        let scene = Self {
            player: Player::new(timeline.resolve(&counts)),
            slots,
        };
        scene.render();
        scene
    }

    fn render(&self) {
        for (els, styles) in self.slots.iter().zip(self.player.frame()) {
            for (el, style) in els.iter().zip(styles.iter()) {
                apply(el, style);
            }
        }
    }

    fn command(&mut self, action: Action) {
        match action {
            Action::Play => self.player.play(),
            Action::Pause => self.player.pause(),
            Action::Resume => self.player.resume(),
            Action::Reverse => self.player.reverse(),
            Action::Restart => self.player.restart(),
            Action::Reset => self.player.reset(),
            Action::Complete => self.player.complete(),
            Action::None => return,
        }
        self.render();
    }

    fn tick(&mut self, dt: f64) -> Option<PlayerEvent> {
        if !self.player.is_active() {
            return None;
        }
        let event = self.player.tick(dt);
        self.render();
        if let Some(event) = event {
            log::debug!("timeline {event:?} at {:.2}s", self.player.time());
        }
        event
    }
}

/// A timeline mounted on the page. Commands sent before the scene exists are
/// dropped; scroll triggers wait for [`SceneHandle::is_ready`].
#[derive(Clone, Copy)]
pub struct SceneHandle {
    scene: StoredValue<Option<StoredValue<Scene, LocalStorage>>>,
    on_complete: StoredValue<Option<Callback<()>>>,
    ready: RwSignal<bool>,
}

impl SceneHandle {
    pub fn command(&self, action: Action) {
        if let Some(Some(scene)) = self.scene.try_get_value() {
            scene.try_update_value(|s| s.command(action));
        }
    }

    pub fn play(&self) {
        self.command(Action::Play);
    }

    pub fn restart(&self) {
        self.command(Action::Restart);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Runs `cb` each time the timeline reaches its end playing forward.
    pub fn on_complete(self, cb: Callback<()>) -> Self {
        self.on_complete.set_value(Some(cb));
        self
    }

    fn tick(&self, dt: f64) {
        let Some(Some(scene)) = self.scene.try_get_value() else {
            return;
        };
        let event = scene.try_update_value(|s| s.tick(dt)).flatten();
        if event == Some(PlayerEvent::Completed) {
            if let Some(Some(cb)) = self.on_complete.try_get_value() {
                cb.run(());
            }
        }
    }
}

/// Mounts `timeline` on `targets` (one resolver per slot) once the view is in
/// the DOM. With `autoplay` the timeline starts immediately.
pub fn use_timeline(timeline: Timeline, targets: Vec<Resolve>, autoplay: bool) -> SceneHandle {
    let handle = SceneHandle {
        scene: StoredValue::new(None),
        on_complete: StoredValue::new(None),
        ready: RwSignal::new(false),
    };
    let ticker = expect_context::<Ticker>();
    Effect::new(move |_| {
        let scene = StoredValue::new_local(Scene::mount(&timeline, &targets));
        if autoplay {
            scene.update_value(|s| s.command(Action::Play));
        }
        handle.scene.set_value(Some(scene));
        let id = ticker.add(move |dt| handle.tick(dt));
        on_cleanup(move || ticker.remove(id));
        handle.ready.set(true);
    });
    handle
}

/// Drives `handle` from the scroll position of the first `trigger` element.
/// Bad bounds or toggle strings are logged and the trigger is skipped.
pub fn use_scroll_trigger(
    handle: SceneHandle,
    trigger: Resolve,
    start: &str,
    end: &str,
    toggle_actions: &str,
) {
    let parsed = TriggerBounds::new(start, end)
        .and_then(|b| toggle_actions.parse::<ToggleActions>().map(|a| (b, a)));
    let (bounds, actions) = match parsed {
        Ok(p) => p,
        Err(e) => {
            log::error!("scroll trigger skipped: {e}");
            return;
        }
    };
    let sync = expect_context::<ScrollSync>();
    let state = StoredValue::new(ScrollTrigger::new(bounds, actions));
    Effect::new(move |_| {
        sync.y.track();
        let viewport_h = sync.viewport_h.get();
        if !handle.is_ready() {
            return;
        }
        let Some(el) = trigger().into_iter().next() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let action = state
            .try_update_value(|t| t.update(rect.top(), rect.height(), viewport_h))
            .flatten();
        if let Some(action) = action {
            log::debug!("scroll trigger {}: {action:?}", el.id());
            handle.command(action);
        }
    });
}

/// Hover micro-interaction: tweens towards `enter` on mouse enter and back to
/// `leave` on mouse leave, from wherever the element currently is.
#[derive(Clone, Copy)]
pub struct Hover {
    tweener: StoredValue<Tweener>,
    enter: Style,
    leave: Style,
    duration: f64,
    ease: Ease,
}

impl Hover {
    pub fn enter(&self) {
        self.tweener
            .update_value(|t| t.retarget(self.enter, self.duration, self.ease));
    }

    pub fn leave(&self) {
        self.tweener
            .update_value(|t| t.retarget(self.leave, self.duration, self.ease));
    }
}

pub fn use_hover(target: Resolve, enter: Style, leave: Style, duration: f64, ease: Ease) -> Hover {
    let hover = Hover {
        tweener: StoredValue::new(Tweener::new(leave)),
        enter,
        leave,
        duration,
        ease,
    };
    use_ticker(move |dt| {
        let Some(style) = hover
            .tweener
            .try_update_value(|t| (!t.is_settled()).then(|| t.tick(dt)))
            .flatten()
        else {
            return;
        };
        for el in target() {
            apply(&el, &style);
        }
    });
    hover
}

/// Endless floating motion. `oscillation` is asked for each target index, so
/// elements can drift out of phase.
pub fn use_float(
    targets: Resolve,
    oscillation: impl Fn(usize) -> Oscillation + Send + Sync + 'static,
) {
    let elapsed = StoredValue::new(0.0_f64);
    use_ticker(move |dt| {
        let Some(t) = elapsed.try_update_value(|e| {
            *e += dt;
            *e
        }) else {
            return;
        };
        for (i, el) in targets().iter().enumerate() {
            apply(el, &oscillation(i).sample(t));
        }
    });
}
