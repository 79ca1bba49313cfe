use std::str::FromStr;

use super::MotionError;

/// Default overshoot for `back` eases when none is given.
pub const BACK_OVERSHOOT: f64 = 1.70158;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    Linear,
    Power1In,
    #[default]
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    BackOut(f64),
}

impl Ease {
    /// Maps linear progress `t` to eased progress. `t` is clamped to `[0, 1]`
    /// and the endpoints are exact for every curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Ease::Linear => t,
            Ease::Power1In => t.powi(2),
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power1InOut => in_out(t, 2),
            Ease::Power2In => t.powi(3),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => in_out(t, 3),
            Ease::BackOut(s) => {
                let p = 1.0 - t;
                1.0 - p * p * ((s + 1.0) * p - s)
            }
        }
    }
}

fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(power) / 2.0
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    /// Accepts the dotted names used in animation configs, e.g. `power2.out`,
    /// `power1.inOut`, `back.out(1.7)`. A bare family name means `.out`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || MotionError::UnknownEase(s.to_string());
        let trimmed = s.trim();
        let (family, rest) = trimmed.split_once('.').unwrap_or((trimmed, "out"));
        let (kind, arg) = match rest.split_once('(') {
            Some((kind, arg)) => {
                let arg = arg.strip_suffix(')').ok_or_else(unknown)?;
                (kind, Some(arg.trim().parse::<f64>().map_err(|_| unknown())?))
            }
            None => (rest, None),
        };
        let ease = match (family, kind) {
            ("none" | "linear", _) => Ease::Linear,
            ("power1", "in") => Ease::Power1In,
            ("power1", "out") => Ease::Power1Out,
            ("power1", "inOut") => Ease::Power1InOut,
            ("power2", "in") => Ease::Power2In,
            ("power2", "out") => Ease::Power2Out,
            ("power2", "inOut") => Ease::Power2InOut,
            ("back", "out") => Ease::BackOut(arg.unwrap_or(BACK_OVERSHOOT)),
            _ => return Err(unknown()),
        };
        Ok(ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::Power1In,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::BackOut(1.7),
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
            assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn test_in_out_is_symmetric() {
        for ease in [Ease::Power1InOut, Ease::Power2InOut] {
            assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
            let a = ease.apply(0.2);
            let b = ease.apply(0.8);
            assert!((a + b - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Ease::Power1Out.apply(0.3) > 0.3);
        assert!(Ease::Power2Out.apply(0.3) > Ease::Power1Out.apply(0.3));
        assert!(Ease::Power2In.apply(0.3) < 0.3);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("power2.out".parse::<Ease>(), Ok(Ease::Power2Out));
        assert_eq!("power1.inOut".parse::<Ease>(), Ok(Ease::Power1InOut));
        assert_eq!("power2".parse::<Ease>(), Ok(Ease::Power2Out));
        assert_eq!("none".parse::<Ease>(), Ok(Ease::Linear));
        assert_eq!("back.out(1.7)".parse::<Ease>(), Ok(Ease::BackOut(1.7)));
        assert_eq!(
            "back.out".parse::<Ease>(),
            Ok(Ease::BackOut(BACK_OVERSHOOT))
        );
        assert!(matches!(
            "elastic.out".parse::<Ease>(),
            Err(MotionError::UnknownEase(_))
        ));
        assert!("back.out(abc)".parse::<Ease>().is_err());
        assert!("back.out(1.7".parse::<Ease>().is_err());
    }
}
