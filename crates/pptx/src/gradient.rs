//! Gradient normalisation.
//!
//! Turns a loosely specified gradient fill into a [`GradientSpec`] in which
//! every direction, angle, centre and stop value is resolved to a concrete,
//! in-range number. Serialization lives in [`crate::fill`].

use pptgen_core::{FillProps, GradientStop, GradientType};

/// Angle used when a linear gradient has no usable angle or direction.
pub const DEFAULT_LINEAR_ANGLE: f64 = 45.0;

/// Path gradient centre used when none or an out-of-range one is given.
pub const DEFAULT_PATH_CENTER: f64 = 50.0;

/// Named directions of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearDirection {
    LeftToRight,
    TopLeftToBottomRight,
    TopToBottom,
    TopRightToBottomLeft,
    RightToLeft,
    BottomRightToTopLeft,
    BottomToTop,
    BottomLeftToTopRight,
}

impl LinearDirection {
    /// Parse a direction token such as `"tb"`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "lr" => Some(Self::LeftToRight),
            "tlbr" => Some(Self::TopLeftToBottomRight),
            "tb" => Some(Self::TopToBottom),
            "trbl" => Some(Self::TopRightToBottomLeft),
            "rl" => Some(Self::RightToLeft),
            "brtl" => Some(Self::BottomRightToTopLeft),
            "bt" => Some(Self::BottomToTop),
            "bltr" => Some(Self::BottomLeftToTopRight),
            _ => None,
        }
    }

    /// Angle in degrees, clockwise from left-to-right.
    pub fn angle(&self) -> f64 {
        match self {
            Self::LeftToRight => 0.0,
            Self::TopLeftToBottomRight => 45.0,
            Self::TopToBottom => 90.0,
            Self::TopRightToBottomLeft => 135.0,
            Self::RightToLeft => 180.0,
            Self::BottomRightToTopLeft => 225.0,
            Self::BottomToTop => 270.0,
            Self::BottomLeftToTopRight => 315.0,
        }
    }
}

/// Where a radial or rectangular gradient starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusCorner {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl FocusCorner {
    /// Parse a direction token such as `"fbr"`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ftl" => Some(Self::TopLeft),
            "ftr" => Some(Self::TopRight),
            "fbl" => Some(Self::BottomLeft),
            "fbr" => Some(Self::BottomRight),
            "c" => Some(Self::Center),
            _ => None,
        }
    }

    /// The `a:fillToRect` element placing the focus.
    pub fn fill_to_rect(&self) -> &'static str {
        match self {
            Self::TopLeft => r#"<a:fillToRect r="100000" b="100000"/>"#,
            Self::TopRight => r#"<a:fillToRect l="100000" b="100000"/>"#,
            Self::BottomLeft => r#"<a:fillToRect t="100000" r="100000"/>"#,
            Self::BottomRight => r#"<a:fillToRect l="100000" t="100000"/>"#,
            Self::Center => r#"<a:fillToRect l="50000" t="50000" r="50000" b="50000"/>"#,
        }
    }

    /// The `a:tileRect` element that centres the tile on the focus.
    pub fn tile_rect(&self) -> &'static str {
        match self {
            Self::TopLeft => r#"<a:tileRect l="-100000" t="-100000"/>"#,
            Self::TopRight => r#"<a:tileRect t="-100000" r="-100000"/>"#,
            Self::BottomLeft => r#"<a:tileRect l="-100000" b="-100000"/>"#,
            Self::BottomRight => r#"<a:tileRect r="-100000" b="-100000"/>"#,
            Self::Center => "<a:tileRect/>",
        }
    }
}

/// Resolved gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientGeometry {
    /// Angle in degrees, in `[0, 360)`.
    Linear { angle: f64 },
    Radial(FocusCorner),
    Rect(FocusCorner),
    /// Focus rectangle insets in percent. `right` is `100 - left` and
    /// `bottom` is `100 - top`.
    Path {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
}

/// A gradient stop with every value in range.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStop {
    pub color: String,
    /// Percent along the gradient, 0 to 100.
    pub position: f64,
    /// -100 to 100; negative darkens, positive lightens.
    pub brightness: f64,
    /// Percent, 0 to 100.
    pub transparency: f64,
}

/// A fully resolved gradient, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub rotate_with_shape: bool,
    pub stops: Vec<ResolvedStop>,
    pub geometry: GradientGeometry,
}

/// Stops used when a gradient fill supplies none.
pub fn default_stops() -> Vec<GradientStop> {
    vec![
        GradientStop::new("accent1", 0.0),
        GradientStop::new("accent1", 50.0).with_brightness(50.0),
        GradientStop::new("accent1", 100.0).with_brightness(100.0),
    ]
}

/// Resolve the gradient-related fields of a fill.
///
/// A supplied stop list is used as given, whatever its length. Only a
/// missing list is replaced by [`default_stops`].
pub fn normalize_gradient(props: &FillProps) -> GradientSpec {
    let gradient_type = props.gradient_type.unwrap_or_default();
    let direction = props.gradient_direction.as_deref();

    let stops: Vec<ResolvedStop> = match &props.grad_stops {
        Some(stops) => {
            if !(2..=10).contains(&stops.len()) {
                log::debug!(
                    "Gradient has {} stops, outside 2..=10; using them as given",
                    stops.len()
                );
            }
            stops.iter().enumerate().map(|(i, s)| normalize_stop(i, s)).collect()
        }
        None => default_stops()
            .iter()
            .enumerate()
            .map(|(i, s)| normalize_stop(i, s))
            .collect(),
    };

    let geometry = match gradient_type {
        GradientType::Linear => GradientGeometry::Linear {
            angle: linear_angle(props.linear_angle, direction),
        },
        GradientType::Radial => GradientGeometry::Radial(focus_corner(direction)),
        GradientType::Rect => GradientGeometry::Rect(focus_corner(direction)),
        GradientType::Path => {
            let left = path_center(props.path_l, "pathL");
            let top = path_center(props.path_t, "pathT");
            GradientGeometry::Path {
                left,
                top,
                right: 100.0 - left,
                bottom: 100.0 - top,
            }
        }
    };

    GradientSpec {
        rotate_with_shape: props.rotate_with_shape.unwrap_or(true),
        stops,
        geometry,
    }
}

/// An explicit angle in `[0, 360)` wins, then the direction token, then 45.
fn linear_angle(explicit: Option<f64>, direction: Option<&str>) -> f64 {
    if let Some(angle) = explicit.filter(|a| (0.0..360.0).contains(a)) {
        return angle;
    }

    match direction.and_then(LinearDirection::from_token) {
        Some(dir) => dir.angle(),
        None => {
            if let Some(token) = direction {
                log::debug!("Unknown linear gradient direction \"{}\", using 45 degrees", token);
            }
            DEFAULT_LINEAR_ANGLE
        }
    }
}

fn focus_corner(direction: Option<&str>) -> FocusCorner {
    match direction.and_then(FocusCorner::from_token) {
        Some(corner) => corner,
        None => {
            if let Some(token) = direction {
                log::debug!("Unknown gradient focus \"{}\", using ftl", token);
            }
            FocusCorner::TopLeft
        }
    }
}

fn path_center(value: Option<f64>, field: &str) -> f64 {
    match value {
        Some(v) if (0.0..=100.0).contains(&v) => v,
        Some(v) => {
            log::debug!("{} {} is outside 0..=100, using 50", field, v);
            DEFAULT_PATH_CENTER
        }
        None => DEFAULT_PATH_CENTER,
    }
}

/// Resolve one stop. A value of exactly 0 counts as unset, so a position of
/// 0 becomes `index * 10` like a missing one.
fn normalize_stop(index: usize, stop: &GradientStop) -> ResolvedStop {
    let position = stop
        .position
        .filter(|p| *p != 0.0 && (0.0..=100.0).contains(p))
        .unwrap_or(index as f64 * 10.0);
    let brightness = stop
        .brightness
        .filter(|b| *b != 0.0 && (-100.0..=100.0).contains(b))
        .unwrap_or(0.0);
    let transparency = stop
        .transparency
        .filter(|t| *t != 0.0 && (0.0..=100.0).contains(t))
        .unwrap_or(0.0);

    ResolvedStop {
        color: stop.color.clone(),
        position,
        brightness,
        transparency,
    }
}
