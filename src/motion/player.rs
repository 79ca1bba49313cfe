use super::{Ease, ResolvedTimeline, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The playhead reached the end while playing forward.
    Completed,
    /// The playhead reached the start while playing in reverse.
    ReverseCompleted,
}

/// Drives a resolved timeline in real time. Call [`Player::tick`] once per
/// animation frame with the elapsed seconds.
#[derive(Debug, Clone)]
pub struct Player {
    timeline: ResolvedTimeline,
    time: f64,
    reversed: bool,
    paused: bool,
}

impl Player {
    /// A paused player with its playhead at 0.
    pub fn new(timeline: ResolvedTimeline) -> Self {
        Self {
            timeline,
            time: 0.0,
            reversed: false,
            paused: true,
        }
    }

    pub fn play(&mut self) {
        self.reversed = false;
        self.paused = false;
    }

    pub fn reverse(&mut self) {
        self.reversed = true;
        self.paused = false;
    }

    pub fn restart(&mut self) {
        self.time = 0.0;
        self.play();
    }

    /// Back to the start and paused.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.reversed = false;
        self.paused = true;
    }

    /// Jump to the end and stay there.
    pub fn complete(&mut self) {
        self.time = self.timeline.duration();
        self.reversed = false;
        self.paused = true;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_active(&self) -> bool {
        !self.paused
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advances the playhead and reports when an end is reached. Each arrival
    /// is reported once; the player pauses at the end it arrived at.
    pub fn tick(&mut self, dt: f64) -> Option<PlayerEvent> {
        if self.paused {
            return None;
        }
        let duration = self.timeline.duration();
        if self.reversed {
            self.time = (self.time - dt).max(0.0);
            if self.time <= 0.0 {
                self.paused = true;
                return Some(PlayerEvent::ReverseCompleted);
            }
        } else {
            self.time = (self.time + dt).min(duration);
            if self.time >= duration {
                self.paused = true;
                return Some(PlayerEvent::Completed);
            }
        }
        None
    }

    /// Styles of every element at the current playhead.
    pub fn frame(&self) -> Vec<Vec<Style>> {
        self.timeline.sample(self.time)
    }
}

/// A retargetable single-element tween for hover micro-interactions. A new
/// target always starts from wherever the element currently is.
#[derive(Debug, Clone)]
pub struct Tweener {
    current: Style,
    origin: Style,
    target: Style,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl Tweener {
    pub fn new(initial: Style) -> Self {
        Self {
            current: initial,
            origin: initial,
            target: initial,
            elapsed: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn retarget(&mut self, to: Style, duration: f64, ease: Ease) {
        self.origin = self.current;
        self.target = self.current.merge(&to);
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
        self.ease = ease;
    }

    pub fn tick(&mut self, dt: f64) -> Style {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let p = if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        };
        self.current = self.origin.lerp(&self.target, self.ease.apply(p));
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Timeline, Tween};

    fn player() -> Player {
        let tl = Timeline::new().add(
            Tween::from_to(0, Style::new().opacity(0.0), Style::new().opacity(1.0))
                .duration(1.0)
                .ease(Ease::Linear),
        );
        Player::new(tl.resolve(&[1]))
    }

    #[test]
    fn test_new_player_is_paused() {
        let mut p = player();
        assert!(!p.is_active());
        assert_eq!(p.tick(0.5), None);
        assert_eq!(p.time(), 0.0);
        assert_eq!(p.frame()[0][0].opacity, Some(0.0));
    }

    #[test]
    fn test_play_completes_once() {
        let mut p = player();
        p.play();
        assert_eq!(p.tick(0.6), None);
        assert_eq!(p.tick(0.6), Some(PlayerEvent::Completed));
        assert_eq!(p.tick(0.6), None);
        assert_eq!(p.time(), 1.0);
        assert_eq!(p.frame()[0][0].opacity, Some(1.0));
    }

    #[test]
    fn test_reverse_from_middle() {
        let mut p = player();
        p.play();
        p.tick(0.5);
        p.reverse();
        assert_eq!(p.tick(0.25), None);
        assert!((p.time() - 0.25).abs() < 1e-9);
        assert_eq!(p.tick(0.5), Some(PlayerEvent::ReverseCompleted));
        assert_eq!(p.time(), 0.0);
    }

    #[test]
    fn test_reset_complete_restart() {
        let mut p = player();
        p.complete();
        assert_eq!(p.time(), 1.0);
        assert!(!p.is_active());
        p.reset();
        assert_eq!(p.time(), 0.0);
        assert!(!p.is_active());
        p.play();
        p.tick(0.3);
        p.restart();
        assert_eq!(p.time(), 0.0);
        assert!(p.is_active());
        p.pause();
        assert_eq!(p.tick(1.0), None);
        p.resume();
        assert_eq!(p.tick(1.0), Some(PlayerEvent::Completed));
    }

    #[test]
    fn test_tweener_retargets_from_current() {
        let mut t = Tweener::new(Style::new().scale(1.0));
        t.retarget(Style::new().scale(1.1), 0.3, Ease::Linear);
        let s = t.tick(0.15);
        assert!((s.scale.unwrap() - 1.05).abs() < 1e-9);
        assert!(!t.is_settled());
        t.retarget(Style::new().scale(1.0), 0.3, Ease::Linear);
        let s = t.tick(0.3);
        assert!((s.scale.unwrap() - 1.0).abs() < 1e-9);
        assert!(t.is_settled());
    }
}
