use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::motion::SmoothScroll;

use super::motion::use_ticker;

/// The single source of scroll position for the page. Native scrolls and the
/// smooth scroller both land in `y`, which scroll triggers subscribe to.
#[derive(Clone, Copy)]
pub struct ScrollSync {
    pub y: RwSignal<f64>,
    pub viewport_h: RwSignal<f64>,
    smooth: StoredValue<SmoothScroll>,
}

impl ScrollSync {
    fn native_y() -> f64 {
        window().scroll_y().unwrap_or(0.0)
    }

    /// Re-measures the viewport and document. Called on mount and resize.
    pub fn refresh(&self) {
        let win = window();
        let viewport_h = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let doc_h = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(viewport_h);
        self.smooth
            .update_value(|s| s.set_limit(doc_h - viewport_h));
        self.viewport_h.set(viewport_h);
        self.y.set(Self::native_y());
    }

    fn on_native_scroll(&self) {
        let y = Self::native_y();
        self.smooth.update_value(|s| s.sync(y));
        self.y.set(y);
    }

    /// The user took over (wheel, touch, keys or the scrollbar), so stop
    /// steering.
    fn interrupt(&self) {
        let y = Self::native_y();
        self.smooth.try_update_value(|s| {
            if s.is_animating() {
                s.interrupt(y);
                log::debug!("smooth scroll interrupted at {}", s.current());
            }
        });
    }

    fn step(&self, dt: f64) {
        let Some(Some((y, settled))) = self
            .smooth
            .try_update_value(|s| s.step(dt).map(|y| (y, s.is_settled())))
        else {
            return;
        };
        window().scroll_to_with_x_and_y(0.0, y);
        if settled {
            log::debug!("smooth scroll settled at {y}");
        }
    }

    pub fn scroll_to(&self, y: f64) {
        self.refresh();
        let current = Self::native_y();
        self.smooth.update_value(|s| s.scroll_to(current, y));
    }

    pub fn scroll_to_section(&self, id: &str) {
        let Some(el) = document().get_element_by_id(id) else {
            log::warn!("no section with id {id}");
            return;
        };
        let top = el.get_bounding_client_rect().top() + Self::native_y();
        log::debug!("scrolling to #{id} at {top}");
        self.scroll_to(top);
    }

    pub fn scroll_to_top(&self) {
        self.scroll_to(0.0);
    }
}

pub fn provide_scroll_sync() -> ScrollSync {
    let sync = ScrollSync {
        y: RwSignal::new(0.0),
        viewport_h: RwSignal::new(0.0),
        smooth: StoredValue::new(SmoothScroll::default()),
    };
    provide_context(sync);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| sync.on_native_scroll());
    let _ = use_event_listener(use_window(), ev::resize, move |_| sync.refresh());
    let _ = use_event_listener(use_window(), ev::wheel, move |_| sync.interrupt());
    let _ = use_event_listener(use_window(), ev::touchstart, move |_| sync.interrupt());
    let _ = use_event_listener(use_window(), ev::keydown, move |_| sync.interrupt());
    let _ = use_event_listener(use_window(), ev::pointerdown, move |_| sync.interrupt());
    use_ticker(move |dt| sync.step(dt));
    Effect::new(move |_| sync.refresh());

    sync
}

pub fn use_scroll_sync() -> ScrollSync {
    expect_context::<ScrollSync>()
}
