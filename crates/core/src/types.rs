//! Descriptor types for slide styling: dimensions, layouts, colors, fills,
//! gradients and glow effects.
//!
//! Descriptors decode from the camelCase JSON object shape callers already
//! use, and are lenient: a malformed field becomes "unset" and is later
//! replaced by its documented default instead of failing the decode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decode any descriptor from a JSON string.
pub fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> crate::Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// A position or size: inches (below 100), EMU (100 and above), or a
/// percentage string such as `"50%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Dimension {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Which side of the layout a percentage refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    #[serde(alias = "X", alias = "x")]
    Horizontal,
    #[serde(alias = "Y", alias = "y")]
    Vertical,
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" | "h" | "horizontal" => Ok(Self::Horizontal),
            "y" | "v" | "vertical" => Ok(Self::Vertical),
            other => Err(format!("unknown axis '{}', expected x or y", other)),
        }
    }
}

/// Presentation layout size in EMU, the reference frame for percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub width: i64,
    pub height: i64,
}

impl Layout {
    /// 10 x 5.625 inches.
    pub const LAYOUT_16X9: Layout = Layout::new(9_144_000, 5_143_500);
    /// 10 x 6.25 inches.
    pub const LAYOUT_16X10: Layout = Layout::new(9_144_000, 5_715_000);
    /// 10 x 7.5 inches.
    pub const LAYOUT_4X3: Layout = Layout::new(9_144_000, 6_858_000);
    /// 13.33 x 7.5 inches.
    pub const LAYOUT_WIDE: Layout = Layout::new(12_192_000, 6_858_000);

    /// Create a layout from EMU dimensions.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Create a layout from inch dimensions.
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self::new(
            crate::units::inches_to_emu(width),
            crate::units::inches_to_emu(height),
        )
    }

    /// Look up a standard layout by name (`16x9`, `16x10`, `4x3`, `wide`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().trim_start_matches("layout_") {
            "16x9" => Some(Self::LAYOUT_16X9),
            "16x10" => Some(Self::LAYOUT_16X10),
            "4x3" => Some(Self::LAYOUT_4X3),
            "wide" => Some(Self::LAYOUT_WIDE),
            _ => None,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::LAYOUT_16X9
    }
}

/// Theme-relative color tokens resolved by the theme at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeColor {
    Background1,
    Background2,
    Text1,
    Text2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
}

impl SchemeColor {
    /// Every scheme color, in theme order.
    pub const ALL: [SchemeColor; 10] = [
        Self::Background1,
        Self::Background2,
        Self::Text1,
        Self::Text2,
        Self::Accent1,
        Self::Accent2,
        Self::Accent3,
        Self::Accent4,
        Self::Accent5,
        Self::Accent6,
    ];

    /// The token written to the `val` attribute of `a:schemeClr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background1 => "bg1",
            Self::Background2 => "bg2",
            Self::Text1 => "tx1",
            Self::Text2 => "tx2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
        }
    }

    /// Spelled-out alias accepted on input, e.g. `background1` for `bg1`.
    /// Inputs are normalised: color elements always carry [`Self::as_str`].
    pub fn long_name(&self) -> &'static str {
        match self {
            Self::Background1 => "background1",
            Self::Background2 => "background2",
            Self::Text1 => "text1",
            Self::Text2 => "text2",
            other => other.as_str(),
        }
    }
}

impl FromStr for SchemeColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s || c.long_name() == s)
            .ok_or(())
    }
}

impl fmt::Display for SchemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shape fill: a bare color string (solid shorthand) or a full descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeFill {
    Color(String),
    Props(FillProps),
}

impl From<&str> for ShapeFill {
    fn from(color: &str) -> Self {
        Self::Color(color.to_string())
    }
}

impl From<FillProps> for ShapeFill {
    fn from(props: FillProps) -> Self {
        Self::Props(props)
    }
}

/// Kind of fill to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillType {
    #[default]
    Solid,
    Gradient,
    /// Any other fill kind. Emits nothing.
    #[serde(other)]
    Unsupported,
}

/// Geometry family of a gradient fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    Rect,
    Path,
}

impl FromStr for GradientType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            "rect" => Ok(Self::Rect),
            "path" => Ok(Self::Path),
            _ => Err(()),
        }
    }
}

/// Object form of a shape fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillProps {
    #[serde(rename = "type")]
    pub fill_type: FillType,

    #[serde(deserialize_with = "lenient::string")]
    pub color: Option<String>,

    /// Deprecated spelling of `transparency`, still honoured.
    #[serde(deserialize_with = "lenient::number")]
    pub alpha: Option<f64>,

    /// Transparency percentage, 0 (opaque) to 100.
    #[serde(deserialize_with = "lenient::number")]
    pub transparency: Option<f64>,

    #[serde(deserialize_with = "lenient::token")]
    pub gradient_type: Option<GradientType>,

    /// Direction token; its meaning depends on `gradient_type`.
    #[serde(deserialize_with = "lenient::string")]
    pub gradient_direction: Option<String>,

    /// Linear angle in degrees, overrides `gradient_direction` when in range.
    #[serde(deserialize_with = "lenient::number")]
    pub linear_angle: Option<f64>,

    /// Path gradient horizontal centre, percent from the left.
    #[serde(rename = "pathL", deserialize_with = "lenient::number")]
    pub path_l: Option<f64>,

    /// Path gradient vertical centre, percent from the top.
    #[serde(rename = "pathT", deserialize_with = "lenient::number")]
    pub path_t: Option<f64>,

    pub grad_stops: Option<Vec<GradientStop>>,

    #[serde(deserialize_with = "lenient::flag")]
    pub rotate_with_shape: Option<bool>,
}

impl FillProps {
    /// A solid fill of the given color.
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            fill_type: FillType::Solid,
            color: Some(color.into()),
            ..Default::default()
        }
    }

    /// A gradient fill of the given geometry family and stops.
    pub fn gradient(gradient_type: GradientType, stops: Vec<GradientStop>) -> Self {
        Self {
            fill_type: FillType::Gradient,
            gradient_type: Some(gradient_type),
            grad_stops: Some(stops),
            ..Default::default()
        }
    }

    /// Set the direction token.
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.gradient_direction = Some(direction.into());
        self
    }

    /// Set the transparency percentage.
    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = Some(transparency);
        self
    }
}

/// One color anchor along a gradient.
///
/// A field that is absent, non-numeric, out of range, or exactly 0 is
/// replaced by its default when the gradient is normalised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientStop {
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub color: String,

    #[serde(deserialize_with = "lenient::number")]
    pub position: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub brightness: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub transparency: Option<f64>,
}

impl GradientStop {
    /// Create a stop at the given position (percent).
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position: Some(position),
            ..Default::default()
        }
    }

    /// Set brightness, -100 (darkest) to 100 (lightest).
    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Set transparency percentage.
    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = Some(transparency);
        self
    }
}

/// A complete glow effect description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowOptions {
    /// Radius in points.
    pub size: f64,
    pub color: String,
    /// Opacity as a fraction, 0.0 to 1.0.
    pub opacity: f64,
}

impl Default for GlowOptions {
    fn default() -> Self {
        Self {
            size: 8.0,
            color: "FFFFFF".to_string(),
            opacity: 0.75,
        }
    }
}

impl GlowOptions {
    /// Return a copy with every field set in `overrides` replaced.
    pub fn apply_overrides(&self, overrides: &GlowOverrides) -> GlowOptions {
        GlowOptions {
            size: overrides.size.unwrap_or(self.size),
            color: overrides
                .color
                .clone()
                .unwrap_or_else(|| self.color.clone()),
            opacity: overrides.opacity.unwrap_or(self.opacity),
        }
    }
}

/// Caller-supplied glow fields; unset fields keep the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowOverrides {
    pub size: Option<f64>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

impl From<GlowOptions> for GlowOverrides {
    fn from(options: GlowOptions) -> Self {
        Self {
            size: Some(options.size),
            color: Some(options.color),
            opacity: Some(options.opacity),
        }
    }
}

/// Deserializers that turn malformed values into `None` instead of errors.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    /// Any JSON number is kept; anything else becomes `None`.
    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| v.as_f64()))
    }

    /// A recognised string token is kept; anything else becomes `None`.
    pub fn token<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok()))
    }

    /// A JSON string is kept; anything else becomes `None`.
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    /// Like [`string`], with anything that is not a string read as `""`.
    pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(string(deserializer)?.unwrap_or_default())
    }

    /// Booleans are kept, numbers are truthy when non-zero.
    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Bool(b)) => Some(b),
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0),
            _ => None,
        })
    }
}
