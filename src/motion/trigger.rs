use std::str::FromStr;

use super::MotionError;

/// What a trigger does to its animation when a boundary is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    #[default]
    None,
}

impl FromStr for Action {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => Action::Play,
            "pause" => Action::Pause,
            "resume" => Action::Resume,
            "reverse" => Action::Reverse,
            "restart" => Action::Restart,
            "reset" => Action::Reset,
            "complete" => Action::Complete,
            "none" => Action::None,
            other => return Err(MotionError::InvalidAction(other.to_string())),
        })
    }
}

/// Actions for onEnter, onLeave, onEnterBack and onLeaveBack, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: Action::Play,
            on_leave: Action::None,
            on_enter_back: Action::None,
            on_leave_back: Action::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(Action::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        match parts[..] {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(MotionError::ToggleActionCount(parts.len())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Offset {
    /// Fraction of the element height or viewport height.
    Fraction(f64),
    Pixels(f64),
}

impl Offset {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Offset::Fraction(0.0)),
            "center" => Some(Offset::Fraction(0.5)),
            "bottom" => Some(Offset::Fraction(1.0)),
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    p.parse::<f64>().ok().map(|p| Offset::Fraction(p / 100.0))
                } else {
                    s.strip_suffix("px")
                        .unwrap_or(s)
                        .parse::<f64>()
                        .ok()
                        .map(Offset::Pixels)
                }
            }
        }
    }

    fn at(&self, length: f64) -> f64 {
        match *self {
            Offset::Fraction(f) => f * length,
            Offset::Pixels(p) => p,
        }
    }
}

/// A line on the element matched against a line on the viewport, written
/// `"<element> <viewport>"`, e.g. `"top 80%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    element: Offset,
    viewport: Offset,
}

impl Edge {
    /// Signed distance in px until the element line reaches the viewport
    /// line. Zero or negative means the line has been passed.
    fn distance(&self, rect_top: f64, height: f64, viewport_h: f64) -> f64 {
        rect_top + self.element.at(height) - self.viewport.at(viewport_h)
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidEdge(s.to_string());
        let mut parts = s.split_whitespace();
        let element = parts.next().and_then(Offset::parse).ok_or_else(invalid)?;
        let viewport = parts.next().and_then(Offset::parse).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Edge { element, viewport })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBounds {
    pub start: Edge,
    pub end: Edge,
}

impl TriggerBounds {
    pub fn new(start: &str, end: &str) -> Result<Self, MotionError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl Default for TriggerBounds {
    /// Active from when the element top enters the bottom of the viewport
    /// until its bottom leaves the top.
    fn default() -> Self {
        Self {
            start: Edge {
                element: Offset::Fraction(0.0),
                viewport: Offset::Fraction(1.0),
            },
            end: Edge {
                element: Offset::Fraction(1.0),
                viewport: Offset::Fraction(0.0),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

/// Tracks one element against the viewport and turns boundary crossings into
/// toggle actions.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    bounds: TriggerBounds,
    actions: ToggleActions,
    zone: Option<Zone>,
}

impl ScrollTrigger {
    pub fn new(bounds: TriggerBounds, actions: ToggleActions) -> Self {
        Self {
            bounds,
            actions,
            zone: None,
        }
    }

    /// Feed the element's current bounding box (`rect_top` relative to the
    /// viewport) and the viewport height. Returns the action for the
    /// crossing, if any. The first update fires onEnter when the element is
    /// already past its start line.
    pub fn update(&mut self, rect_top: f64, height: f64, viewport_h: f64) -> Option<Action> {
        let zone = if self.bounds.start.distance(rect_top, height, viewport_h) > 0.0 {
            Zone::Before
        } else if self.bounds.end.distance(rect_top, height, viewport_h) > 0.0 {
            Zone::Active
        } else {
            Zone::After
        };
        let prev = self.zone.replace(zone).unwrap_or(Zone::Before);
        let a = &self.actions;
        let action = match (prev, zone) {
            (Zone::Before, Zone::Active) => a.on_enter,
            (Zone::Active, Zone::After) => a.on_leave,
            (Zone::After, Zone::Active) => a.on_enter_back,
            (Zone::Active, Zone::Before) => a.on_leave_back,
            // jumped over the whole range in one update
            (Zone::Before, Zone::After) => collapse(a.on_enter, a.on_leave),
            (Zone::After, Zone::Before) => collapse(a.on_enter_back, a.on_leave_back),
            _ => Action::None,
        };
        (action != Action::None).then_some(action)
    }
}

fn collapse(first: Action, second: Action) -> Action {
    if second == Action::None {
        first
    } else {
        second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn about_trigger() -> ScrollTrigger {
        ScrollTrigger::new(
            TriggerBounds::new("top 80%", "bottom 20%").unwrap(),
            "play none none reverse".parse().unwrap(),
        )
    }

    #[test]
    fn test_parse_toggle_actions() {
        let t: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(t.on_enter, Action::Play);
        assert_eq!(t.on_leave_back, Action::Reverse);
        assert_eq!(
            "play none".parse::<ToggleActions>(),
            Err(MotionError::ToggleActionCount(2))
        );
        assert!(matches!(
            "play none jump none".parse::<ToggleActions>(),
            Err(MotionError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_parse_edges() {
        assert!("top 80%".parse::<Edge>().is_ok());
        assert!("center 100px".parse::<Edge>().is_ok());
        assert!("bottom 20".parse::<Edge>().is_ok());
        assert!("top".parse::<Edge>().is_err());
        assert!("middle 80%".parse::<Edge>().is_err());
        assert!("top 80% extra".parse::<Edge>().is_err());
    }

    #[test]
    fn test_enter_and_leave_back() {
        let mut t = about_trigger();
        // element top below the 80% line
        assert_eq!(t.update(900.0, 500.0, VH), None);
        assert_eq!(t.update(790.0, 500.0, VH), Some(Action::Play));
        assert_eq!(t.update(500.0, 500.0, VH), None);
        // leave is "none"
        assert_eq!(t.update(-400.0, 500.0, VH), None);
        // enter back is "none"
        assert_eq!(t.update(0.0, 500.0, VH), None);
        assert_eq!(t.update(850.0, 500.0, VH), Some(Action::Reverse));
    }

    #[test]
    fn test_first_update_inside_range_enters() {
        let mut t = about_trigger();
        assert_eq!(t.update(100.0, 500.0, VH), Some(Action::Play));
    }

    #[test]
    fn test_jump_over_range() {
        let mut t = ScrollTrigger::new(
            TriggerBounds::default(),
            "play reset none none".parse().unwrap(),
        );
        assert_eq!(t.update(2000.0, 100.0, VH), None);
        assert_eq!(t.update(-500.0, 100.0, VH), Some(Action::Reset));
        let mut t = about_trigger();
        assert_eq!(t.update(-2000.0, 500.0, VH), Some(Action::Play));
        assert_eq!(t.update(2000.0, 500.0, VH), Some(Action::Reverse));
    }
}
