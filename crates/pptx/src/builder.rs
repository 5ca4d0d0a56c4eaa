//! Shared configuration for the fragment builders.

use crate::color::is_valid_color;
use pptgen_core::{LogSink, WarningSink};

/// Color substituted for any invalid color reference.
pub const DEFAULT_FONT_COLOR: &str = "000000";

/// Builds DrawingML/PresentationML fragments.
///
/// Holds the sink that receives fallback warnings and the color used in
/// place of invalid color references. Building is otherwise stateless, so
/// one builder can be shared across slides and threads.
#[derive(Debug, Clone)]
pub struct DrawingXml<S = LogSink> {
    sink: S,
    fallback_color: String,
}

impl DrawingXml<LogSink> {
    /// Create a builder that reports warnings through `log`.
    pub fn new() -> Self {
        Self {
            sink: LogSink,
            fallback_color: DEFAULT_FONT_COLOR.to_string(),
        }
    }
}

impl Default for DrawingXml<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WarningSink> DrawingXml<S> {
    /// Replace the warning sink.
    pub fn with_sink<T: WarningSink>(self, sink: T) -> DrawingXml<T> {
        DrawingXml {
            sink,
            fallback_color: self.fallback_color,
        }
    }

    /// Replace the fallback color. Invalid colors are ignored and reported
    /// to the current sink, so set the sink first to capture that warning.
    pub fn with_fallback_color(mut self, color: &str) -> Self {
        let color = color.strip_prefix('#').unwrap_or(color);
        if is_valid_color(color) {
            self.fallback_color = color.to_string();
        } else {
            self.sink.warn(&format!(
                "Ignoring invalid fallback color \"{}\", keeping \"{}\"",
                color, self.fallback_color
            ));
        }
        self
    }

    /// The sink receiving fallback warnings.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The color used in place of invalid color references.
    pub fn fallback_color(&self) -> &str {
        &self.fallback_color
    }
}
