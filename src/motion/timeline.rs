use std::str::FromStr;

use super::{Ease, MotionError, Style};

/// Where a tween is placed on its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// At the current end of the timeline.
    #[default]
    End,
    /// Relative to the current end of the timeline, e.g. `-=0.8`.
    Offset(f64),
    /// Absolute time in seconds.
    At(f64),
}

impl Position {
    fn resolve(&self, end: f64) -> f64 {
        match *self {
            Position::End => end,
            Position::Offset(o) => (end + o).max(0.0),
            Position::At(t) => t.max(0.0),
        }
    }
}

impl FromStr for Position {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || MotionError::InvalidPosition(s.to_string());
        if s.is_empty() || s == ">" {
            return Ok(Position::End);
        }
        if let Some(v) = s.strip_prefix("-=") {
            return v.trim().parse::<f64>().map(|v| Position::Offset(-v)).map_err(|_| invalid());
        }
        if let Some(v) = s.strip_prefix("+=") {
            return v.trim().parse::<f64>().map(Position::Offset).map_err(|_| invalid());
        }
        match s.parse::<f64>() {
            Ok(v) if v >= 0.0 => Ok(Position::At(v)),
            _ => Err(invalid()),
        }
    }
}

/// One animation of every element in a target slot. A slot is resolved to a
/// concrete list of elements when the timeline is mounted, so `stagger`
/// spreads the start times across however many elements the slot holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: usize,
    pub from: Option<Style>,
    pub to: Style,
    pub duration: f64,
    pub ease: Ease,
    pub stagger: f64,
    pub delay: f64,
}

impl Tween {
    pub fn to(target: usize, to: Style) -> Self {
        Self {
            target,
            from: None,
            to,
            duration: 0.5,
            ease: Ease::default(),
            stagger: 0.0,
            delay: 0.0,
        }
    }

    pub fn from_to(target: usize, from: Style, to: Style) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, to)
        }
    }

    pub fn duration(mut self, d: f64) -> Self {
        self.duration = d.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, s: f64) -> Self {
        self.stagger = s.max(0.0);
        self
    }

    pub fn delay(mut self, d: f64) -> Self {
        self.delay = d.max(0.0);
        self
    }

    fn span(&self, count: usize) -> f64 {
        self.delay + self.duration + self.stagger * count.saturating_sub(1) as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    delay: f64,
    sets: Vec<(usize, Style)>,
    tweens: Vec<(Tween, Position)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, d: f64) -> Self {
        self.delay = d.max(0.0);
        self
    }

    /// Initial inline state of a slot, applied before anything plays.
    pub fn set(mut self, target: usize, style: Style) -> Self {
        self.sets.push((target, style));
        self
    }

    pub fn add(self, tween: Tween) -> Self {
        self.add_at(tween, Position::End)
    }

    pub fn add_at(mut self, tween: Tween, position: Position) -> Self {
        self.tweens.push((tween, position));
        self
    }

    pub fn slots(&self) -> usize {
        self.sets
            .iter()
            .map(|(t, _)| *t)
            .chain(self.tweens.iter().map(|(t, _)| t.target))
            .max()
            .map_or(0, |m| m + 1)
    }

    /// Lays the tweens out in time for concrete element counts per slot.
    /// Slots beyond `counts` are treated as empty.
    pub fn resolve(&self, counts: &[usize]) -> ResolvedTimeline {
        let slots = self.slots();
        let count = |slot: usize| counts.get(slot).copied().unwrap_or(0);

        let mut bases: Vec<Vec<Style>> = (0..slots).map(|s| vec![Style::new(); count(s)]).collect();
        for (slot, style) in &self.sets {
            for base in bases[*slot].iter_mut() {
                *base = base.merge(style);
            }
        }

        let mut end = 0.0_f64;
        let mut tracks = Vec::new();
        for (tween, position) in &self.tweens {
            let n = count(tween.target);
            let start = position.resolve(end);
            for index in 0..n {
                tracks.push(Track {
                    slot: tween.target,
                    index,
                    start: start + tween.delay + tween.stagger * index as f64,
                    duration: tween.duration,
                    ease: tween.ease,
                    from: tween.from,
                    to: tween.to,
                    origin: Style::new(),
                });
            }
            if n > 0 {
                end = end.max(start + tween.span(n));
            }
        }
        // stable, so tracks that start together keep declaration order
        tracks.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut resolved = ResolvedTimeline {
            delay: self.delay,
            duration: self.delay + end,
            bases,
            tracks,
        };
        for k in 0..resolved.tracks.len() {
            let (slot, index, start, from) = {
                let t = &resolved.tracks[k];
                (t.slot, t.index, t.start, t.from)
            };
            let state = resolved.element_at(slot, index, start, k);
            resolved.tracks[k].origin = state.merge(&from.unwrap_or_default());
        }
        resolved
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Track {
    slot: usize,
    index: usize,
    start: f64,
    duration: f64,
    ease: Ease,
    from: Option<Style>,
    to: Style,
    /// State of the element when this track starts.
    origin: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTimeline {
    delay: f64,
    duration: f64,
    bases: Vec<Vec<Style>>,
    tracks: Vec<Track>,
}

impl ResolvedTimeline {
    /// Total length in seconds, including the timeline delay.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The style of every element of every slot at time `t`.
    pub fn sample(&self, t: f64) -> Vec<Vec<Style>> {
        let local = t - self.delay;
        self.bases
            .iter()
            .enumerate()
            .map(|(slot, els)| {
                (0..els.len())
                    .map(|index| self.element_at(slot, index, local, self.tracks.len()))
                    .collect()
            })
            .collect()
    }

    /// Evaluates one element at local time `t` using only `tracks[..limit]`.
    fn element_at(&self, slot: usize, index: usize, t: f64, limit: usize) -> Style {
        let mut state = self.bases[slot][index];
        // properties already driven by a track that has begun
        let mut begun = Style::new();
        for track in self.tracks[..limit]
            .iter()
            .filter(|tr| tr.slot == slot && tr.index == index)
        {
            if t < track.start {
                // fromTo renders its starting values immediately, unless an
                // earlier tween is already animating that property
                if let Some(from) = &track.from {
                    state = state.merge(&from.omit(&begun));
                }
                continue;
            }
            let p = if track.duration <= 0.0 {
                1.0
            } else {
                (t - track.start) / track.duration
            };
            let mask = track.to.merge(&track.from.unwrap_or_default());
            let moved = track.origin.lerp(&track.to, track.ease.apply(p));
            state = state.merge(&moved.pick(&mask));
            begun = begun.merge(&mask);
        }
        state
    }
}

impl Style {
    /// Keeps only the properties that are set on `mask`.
    pub fn pick(&self, mask: &Style) -> Style {
        let keep = |v: Option<f64>, m: Option<f64>| m.and(v);
        Style {
            opacity: keep(self.opacity, mask.opacity),
            x: keep(self.x, mask.x),
            y: keep(self.y, mask.y),
            scale: keep(self.scale, mask.scale),
            blur: keep(self.blur, mask.blur),
            rotate_y: keep(self.rotate_y, mask.rotate_y),
            width: keep(self.width, mask.width),
        }
    }
}

impl Style {
    /// Drops the properties that are set on `mask`.
    fn omit(&self, mask: &Style) -> Style {
        let drop = |v: Option<f64>, m: Option<f64>| if m.is_some() { None } else { v };
        Style {
            opacity: drop(self.opacity, mask.opacity),
            x: drop(self.x, mask.x),
            y: drop(self.y, mask.y),
            scale: drop(self.scale, mask.scale),
            blur: drop(self.blur, mask.blur),
            rotate_y: drop(self.rotate_y, mask.rotate_y),
            width: drop(self.width, mask.width),
        }
    }
}

/// An endless back-and-forth tween, `repeat: -1, yoyo: true`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub to: Style,
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
}

impl Oscillation {
    pub fn new(to: Style, duration: f64) -> Self {
        Self {
            to,
            duration: duration.max(f64::EPSILON),
            ease: Ease::Power1InOut,
            delay: 0.0,
        }
    }

    pub fn delay(mut self, d: f64) -> Self {
        self.delay = d.max(0.0);
        self
    }

    pub fn sample(&self, t: f64) -> Style {
        let local = (t - self.delay).max(0.0);
        let cycles = local / self.duration;
        let frac = cycles.fract();
        let p = if (cycles.floor() as u64) % 2 == 0 {
            frac
        } else {
            1.0 - frac
        };
        Style::new().lerp(&self.to, self.ease.apply(p)).pick(&self.to)
    }
}

/// Deterministic pseudo-random value in `[0, 1)` for `index`, for scattered
/// layouts and `from: random` staggers that must render identically on the
/// server and in the browser.
pub fn scatter(index: usize, salt: u64) -> f64 {
    // splitmix64
    let mut x = (index as u64)
        .wrapping_add(salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    (x >> 11) as f64 / (1u64 << 53) as f64
}

/// A deterministic permutation of `0..n`: entry `i` is the slot that index
/// `i` lands in, as for a `from: "random"` stagger.
pub fn shuffle(n: usize, salt: u64) -> Vec<usize> {
    let mut order = (0..n).collect::<Vec<_>>();
    order.sort_by(|a, b| scatter(*a, salt).total_cmp(&scatter(*b, salt)));
    let mut slots = vec![0; n];
    for (slot, index) in order.into_iter().enumerate() {
        slots[index] = slot;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("-=0.8".parse::<Position>(), Ok(Position::Offset(-0.8)));
        assert_eq!("+=0.25".parse::<Position>(), Ok(Position::Offset(0.25)));
        assert_eq!(">".parse::<Position>(), Ok(Position::End));
        assert_eq!("".parse::<Position>(), Ok(Position::End));
        assert_eq!("1.5".parse::<Position>(), Ok(Position::At(1.5)));
        assert!("-1".parse::<Position>().is_err());
        assert!("-=abc".parse::<Position>().is_err());
    }

    #[test]
    fn test_sequencing_with_overlap() {
        let linear = Ease::Linear;
        let tl = Timeline::new()
            .delay(0.5)
            .add(Tween::to(0, Style::new().opacity(1.0)).duration(1.2).ease(linear))
            .add_at(
                Tween::to(1, Style::new().opacity(1.0)).duration(1.0).ease(linear),
                Position::Offset(-0.8),
            )
            .add_at(
                Tween::to(2, Style::new().opacity(1.0)).duration(1.0).ease(linear),
                Position::Offset(-0.6),
            );
        let r = tl.resolve(&[1, 1, 1]);
        // 1.2, then 0.4 + 1.0 = 1.4, then 0.8 + 1.0 = 1.8
        assert!((r.duration() - 2.3).abs() < 1e-9);
        assert!((r.tracks[1].start - 0.4).abs() < 1e-9);
        assert!((r.tracks[2].start - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_stagger_spreads_starts() {
        let tl = Timeline::new().add(
            Tween::to(0, Style::new().opacity(1.0))
                .duration(0.8)
                .stagger(0.2),
        );
        let r = tl.resolve(&[3]);
        let starts: Vec<f64> = r.tracks.iter().map(|t| t.start).collect();
        assert_eq!(starts.len(), 3);
        assert!((starts[2] - 0.4).abs() < 1e-9);
        assert!((r.duration() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_slot_takes_no_time() {
        let tl = Timeline::new()
            .add(Tween::to(0, Style::new().opacity(1.0)).duration(1.0))
            .add(Tween::to(1, Style::new().opacity(1.0)).duration(1.0));
        let r = tl.resolve(&[0, 1]);
        assert_eq!(r.duration(), 1.0);
        assert_eq!(r.sample(0.5)[0].len(), 0);
    }

    #[test]
    fn test_from_to_renders_immediately() {
        let tl = Timeline::new()
            .add(Tween::to(0, Style::new().opacity(1.0)).duration(1.0))
            .add(
                Tween::from_to(1, Style::new().x(-100.0).opacity(0.0), Style::new().x(0.0).opacity(1.0))
                    .duration(1.0)
                    .ease(Ease::Linear),
            );
        let r = tl.resolve(&[1, 1]);
        let before = r.sample(0.0);
        assert_eq!(before[1][0].x, Some(-100.0));
        assert_eq!(before[1][0].opacity, Some(0.0));
        let mid = r.sample(1.5);
        assert!(approx(mid[1][0].x, -50.0));
        let done = r.sample(10.0);
        assert!(approx(done[1][0].x, 0.0));
        assert!(approx(done[0][0].opacity, 1.0));
    }

    #[test]
    fn test_to_tween_starts_from_set_state() {
        let tl = Timeline::new()
            .set(0, Style::new().opacity(0.0).y(30.0))
            .add(
                Tween::to(0, Style::new().opacity(1.0).y(0.0))
                    .duration(1.0)
                    .ease(Ease::Linear),
            )
            .add(
                Tween::to(0, Style::new().opacity(0.0).y(-30.0))
                    .duration(1.0)
                    .ease(Ease::Linear),
            );
        let r = tl.resolve(&[1]);
        assert_eq!(r.sample(0.0)[0][0], Style::new().opacity(0.0).y(30.0));
        assert!(approx(r.sample(0.5)[0][0].y, 15.0));
        assert!(approx(r.sample(1.0)[0][0].opacity, 1.0));
        // second tween starts where the first ended
        assert!(approx(r.sample(1.5)[0][0].y, -15.0));
        assert!(approx(r.sample(2.0)[0][0].opacity, 0.0));
    }

    #[test]
    fn test_concurrent_tweens_keep_each_others_properties() {
        let tl = Timeline::new()
            .add(Tween::to(0, Style::new().x(100.0)).duration(2.0).ease(Ease::Linear))
            .add_at(
                Tween::to(0, Style::new().opacity(0.0)).duration(1.0).ease(Ease::Linear),
                Position::At(0.0),
            );
        let r = tl.resolve(&[1]);
        let s = r.sample(1.0)[0][0];
        assert!(approx(s.x, 50.0));
        assert!(approx(s.opacity, 0.0));
    }

    #[test]
    fn test_later_from_to_waits_for_earlier_tween() {
        let tl = Timeline::new()
            .set(0, Style::new().opacity(0.0))
            .add(
                Tween::to(0, Style::new().opacity(1.0))
                    .duration(1.0)
                    .ease(Ease::Linear),
            )
            .add_at(
                Tween::from_to(0, Style::new().opacity(0.5), Style::new().opacity(0.0))
                    .duration(1.0)
                    .ease(Ease::Linear),
                Position::At(2.0),
            );
        let r = tl.resolve(&[1]);
        assert!(approx(r.sample(0.5)[0][0].opacity, 0.5));
        assert!(approx(r.sample(1.0)[0][0].opacity, 1.0));
        assert!(approx(r.sample(1.5)[0][0].opacity, 1.0));
        // the fromTo jumps to its own start once it begins
        assert!(approx(r.sample(2.0)[0][0].opacity, 0.5));
        assert!(approx(r.sample(2.5)[0][0].opacity, 0.25));
        assert!(approx(r.sample(3.0)[0][0].opacity, 0.0));
    }

    #[test]
    fn test_scatter_is_deterministic_and_spread() {
        let xs: Vec<f64> = (0..100).map(|i| scatter(i, 1)).collect();
        assert!(xs.iter().all(|x| (0.0..1.0).contains(x)));
        assert_eq!(xs, (0..100).map(|i| scatter(i, 1)).collect::<Vec<_>>());
        assert_ne!(scatter(3, 1), scatter(3, 2));
        assert!(xs.iter().any(|x| *x < 0.25));
        assert!(xs.iter().any(|x| *x > 0.75));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let slots = shuffle(25, 2);
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(sorted, (0..25).collect::<Vec<_>>());
        assert_ne!(slots, (0..25).collect::<Vec<_>>());
        assert_eq!(slots, shuffle(25, 2));
        assert!(shuffle(0, 2).is_empty());
    }

    #[test]
    fn test_oscillation_yoyos() {
        let o = Oscillation::new(Style::new().y(-20.0), 3.0).delay(1.0);
        assert!(approx(o.sample(0.5).y, 0.0));
        assert!(approx(o.sample(1.0).y, 0.0));
        assert!(approx(o.sample(4.0).y, -20.0));
        assert!(approx(o.sample(7.0).y, 0.0));
        assert!(approx(o.sample(2.5).y, o.sample(5.5).y.unwrap()));
        assert_eq!(o.sample(2.0).opacity, None);
    }
}
