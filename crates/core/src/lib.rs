//! Core descriptor types, unit conversion, and diagnostics for generating
//! PowerPoint (OOXML) slide markup.

pub mod diagnostics;
pub mod error;
pub mod types;
pub mod units;

pub use diagnostics::{LogSink, RecordingSink, WarningSink};
pub use error::{Error, Result};
pub use types::{
    from_json, Axis, Dimension, FillProps, FillType, GlowOptions, GlowOverrides, GradientStop,
    GradientType, Layout, SchemeColor, ShapeFill,
};
pub use units::{
    degrees_to_rotation, emu_to_inches, inches_to_emu, points_to_emu, resolve_dimension,
    rgb_to_hex, round_half_up, EMU_PER_INCH, EMU_PER_POINT, ROTATION_UNITS_PER_DEGREE,
};
