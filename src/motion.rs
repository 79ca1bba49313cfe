//! A small timeline animation engine.
//!
//! Everything in here is plain data and arithmetic so it can be unit tested
//! without a browser. The view layer in `app::motion` binds these types to DOM
//! elements and `requestAnimationFrame`.

pub mod ease;
pub mod player;
pub mod smooth;
pub mod style;
pub mod timeline;
pub mod trigger;

pub use ease::Ease;
pub use player::{Player, PlayerEvent, Tweener};
pub use smooth::SmoothScroll;
pub use style::Style;
pub use timeline::{scatter, shuffle, Oscillation, Position, ResolvedTimeline, Timeline, Tween};
pub use trigger::{Action, ScrollTrigger, ToggleActions, TriggerBounds};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("unknown ease: {0}")]
    UnknownEase(String),
    #[error("invalid position parameter: {0}")]
    InvalidPosition(String),
    #[error("invalid trigger edge: {0}")]
    InvalidEdge(String),
    #[error("invalid toggle action: {0}")]
    InvalidAction(String),
    #[error("expected 4 toggle actions, found {0}")]
    ToggleActionCount(usize),
}
