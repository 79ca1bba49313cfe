/// The animatable properties of one element. `None` means "not driven", so a
/// tween only touches the properties it names.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub opacity: Option<f64>,
    /// Horizontal translation in px.
    pub x: Option<f64>,
    /// Vertical translation in px.
    pub y: Option<f64>,
    pub scale: Option<f64>,
    /// Gaussian blur radius in px.
    pub blur: Option<f64>,
    /// Rotation around the Y axis in degrees.
    pub rotate_y: Option<f64>,
    /// Width as a percentage of the parent.
    pub width: Option<f64>,
}

macro_rules! setter {
    ($($name:ident),*) => {
        $(
            pub fn $name(mut self, v: f64) -> Self {
                self.$name = Some(v);
                self
            }
        )*
    };
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opacity, x, y, scale, blur, rotate_y, width);

    /// The resting value each property returns to when it is not animated.
    fn identity() -> Self {
        Self {
            opacity: Some(1.0),
            x: Some(0.0),
            y: Some(0.0),
            scale: Some(1.0),
            blur: Some(0.0),
            rotate_y: Some(0.0),
            width: None,
        }
    }

    /// Properties set on `other` win.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            opacity: other.opacity.or(self.opacity),
            x: other.x.or(self.x),
            y: other.y.or(self.y),
            scale: other.scale.or(self.scale),
            blur: other.blur.or(self.blur),
            rotate_y: other.rotate_y.or(self.rotate_y),
            width: other.width.or(self.width),
        }
    }

    /// Interpolates from `self` towards `to` by eased progress `p`. Only the
    /// properties `to` names move; a property missing from `self` starts
    /// from its identity value.
    pub fn lerp(&self, to: &Style, p: f64) -> Style {
        let identity = Style::identity();
        let mix = |from: Option<f64>, base: Option<f64>, to: Option<f64>| match to {
            Some(t) => {
                let f = from.or(base).unwrap_or(0.0);
                Some(f + (t - f) * p)
            }
            None => from,
        };
        Style {
            opacity: mix(self.opacity, identity.opacity, to.opacity),
            x: mix(self.x, identity.x, to.x),
            y: mix(self.y, identity.y, to.y),
            scale: mix(self.scale, identity.scale, to.scale),
            blur: mix(self.blur, identity.blur, to.blur),
            rotate_y: mix(self.rotate_y, identity.rotate_y, to.rotate_y),
            width: mix(self.width, Some(0.0), to.width),
        }
    }

    /// CSS declarations for the driven properties.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut decls = Vec::new();
        if let Some(o) = self.opacity {
            decls.push(("opacity", format!("{}", round(o))));
        }
        let mut transform = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            transform.push(format!(
                "translate({}px, {}px)",
                round(self.x.unwrap_or(0.0)),
                round(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(s) = self.scale {
            transform.push(format!("scale({})", round(s)));
        }
        if let Some(r) = self.rotate_y {
            transform.push(format!("rotateY({}deg)", round(r)));
        }
        if !transform.is_empty() {
            decls.push(("transform", transform.join(" ")));
        }
        if let Some(b) = self.blur {
            decls.push(("filter", format!("blur({}px)", round(b))));
        }
        if let Some(w) = self.width {
            decls.push(("width", format!("{}%", round(w))));
        }
        decls
    }

    /// Inline `style` attribute text, used for the server-rendered first
    /// frame so hydration does not flash unstyled content.
    pub fn inline(&self) -> String {
        self.css()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn round(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_only_moves_named_properties() {
        let from = Style::new().opacity(0.0).y(50.0).blur(10.0);
        let to = Style::new().opacity(1.0).y(0.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.y, Some(25.0));
        assert_eq!(mid.blur, Some(10.0));
        assert_eq!(mid.x, None);
    }

    #[test]
    fn test_lerp_starts_missing_properties_from_identity() {
        let mid = Style::new().lerp(&Style::new().scale(1.1).x(10.0), 0.5);
        assert!((mid.scale.unwrap() - 1.05).abs() < 1e-12);
        assert_eq!(mid.x, Some(5.0));
    }

    #[test]
    fn test_merge_prefers_other() {
        let a = Style::new().opacity(0.2).x(4.0);
        let b = Style::new().opacity(0.9);
        assert_eq!(a.merge(&b), Style::new().opacity(0.9).x(4.0));
    }

    #[test]
    fn test_css_output() {
        let s = Style::new()
            .opacity(0.5)
            .y(-30.0)
            .scale(0.9)
            .rotate_y(5.0)
            .blur(2.0)
            .width(100.0);
        assert_eq!(
            s.css(),
            vec![
                ("opacity", "0.5".to_string()),
                (
                    "transform",
                    "translate(0px, -30px) scale(0.9) rotateY(5deg)".to_string()
                ),
                ("filter", "blur(2px)".to_string()),
                ("width", "100%".to_string()),
            ]
        );
        assert!(Style::new().css().is_empty());
        assert_eq!(
            Style::new().opacity(0.0).y(50.0).inline(),
            "opacity: 0; transform: translate(0px, 50px);"
        );
    }
}
