/// Default per-frame interpolation factor at 60fps.
pub const DEFAULT_LERP: f64 = 0.1;

/// Distance in px under which the scroller snaps to its target.
const SNAP: f64 = 0.5;

/// Lerp-based scroll position. Only programmatic scrolls are animated: the
/// view layer writes [`SmoothScroll::step`]'s output to the window while a
/// scroll is in flight, and native scrolling is adopted through
/// [`SmoothScroll::sync`] without being scaled or smoothed.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    lerp: f64,
    limit: f64,
    animating: bool,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_LERP)
    }
}

impl SmoothScroll {
    pub fn new(lerp: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            lerp: lerp.clamp(0.01, 1.0),
            limit: f64::INFINITY,
            animating: false,
        }
    }

    /// Maximum scroll offset (document height minus viewport height).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.min(self.limit);
        self.current = self.current.min(self.limit);
    }

    /// Starts animating from `from` towards `target`.
    pub fn scroll_to(&mut self, from: f64, target: f64) {
        self.current = from.clamp(0.0, self.limit);
        self.target = target.clamp(0.0, self.limit);
        self.animating = true;
    }

    /// Adopts a position reached outside the scroller, e.g. a wheel scroll.
    /// Ignored while a programmatic scroll is in flight, whose own writes
    /// come back as native scroll events.
    pub fn sync(&mut self, y: f64) {
        if !self.animating {
            self.jump(y);
        }
    }

    /// The user took over: stop animating and stay where the page is.
    pub fn interrupt(&mut self, y: f64) {
        self.animating = false;
        self.jump(y);
    }

    fn jump(&mut self, y: f64) {
        let y = y.clamp(0.0, self.limit);
        self.current = y;
        self.target = y;
    }

    /// Moves towards the target by `dt` seconds and returns the new position,
    /// or `None` when no scroll is in flight.
    pub fn step(&mut self, dt: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }
        let factor = 1.0 - (1.0 - self.lerp).powf((dt * 60.0).max(0.0));
        self.current += (self.target - self.current) * factor;
        if (self.target - self.current).abs() < SNAP {
            self.current = self.target;
            self.animating = false;
        }
        Some(self.current)
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_to_target() {
        let mut s = SmoothScroll::default();
        s.scroll_to(0.0, 1200.0);
        assert!(!s.is_settled());
        let first = s.step(1.0 / 60.0).unwrap();
        assert!((first - 120.0).abs() < 1e-6);
        let mut frames = 1;
        while !s.is_settled() {
            s.step(1.0 / 60.0);
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(s.current(), 1200.0);
        assert!(!s.is_animating());
        assert_eq!(s.step(1.0 / 60.0), None);
    }

    #[test]
    fn test_frame_rate_independent() {
        let mut a = SmoothScroll::default();
        let mut b = SmoothScroll::default();
        a.scroll_to(0.0, 1000.0);
        b.scroll_to(0.0, 1000.0);
        a.step(1.0 / 30.0);
        b.step(1.0 / 60.0);
        b.step(1.0 / 60.0);
        assert!((a.current() - b.current()).abs() < 1e-6);
    }

    #[test]
    fn test_limit_and_sync() {
        let mut s = SmoothScroll::default();
        s.set_limit(500.0);
        s.scroll_to(0.0, 900.0);
        while s.step(1.0).is_some() {}
        assert_eq!(s.current(), 500.0);
        s.scroll_to(500.0, -10.0);
        while s.step(1.0).is_some() {}
        assert_eq!(s.current(), 0.0);
        s.sync(320.0);
        assert!(s.is_settled());
        assert_eq!(s.current(), 320.0);
    }

    #[test]
    fn test_sync_ignored_while_animating() {
        let mut s = SmoothScroll::default();
        s.scroll_to(0.0, 1000.0);
        let y = s.step(1.0 / 60.0).unwrap();
        s.sync(y);
        assert!(s.is_animating());
        assert!(s.step(1.0 / 60.0).unwrap() > y);
    }

    #[test]
    fn test_interrupt_stops_pulling() {
        let mut s = SmoothScroll::default();
        s.scroll_to(0.0, 1000.0);
        s.step(1.0 / 60.0);
        // e.g. a key press or scrollbar drag moved the page to 400
        s.interrupt(400.0);
        assert!(!s.is_animating());
        assert_eq!(s.step(1.0 / 60.0), None);
        assert_eq!(s.current(), 400.0);
    }
}
