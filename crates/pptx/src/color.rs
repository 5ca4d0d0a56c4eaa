//! Color elements: `a:srgbClr` for literal RGB, `a:schemeClr` for theme colors.
//!
//! Every builder routes color references through [`DrawingXml::color_element`]
//! so validation and fallback happen in one place.

use crate::builder::DrawingXml;
use pptgen_core::{SchemeColor, WarningSink};
use regex::Regex;
use std::sync::LazyLock;

/// Exactly six hex digits, no prefix.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{6}$").unwrap());

/// Check whether a value is a 6-digit RGB hex string.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

/// Check whether a value is a hex color or a scheme color token.
pub fn is_valid_color(value: &str) -> bool {
    is_hex_color(value) || value.parse::<SchemeColor>().is_ok()
}

/// Element name and `val` attribute for a valid color, `None` otherwise.
fn classify(value: &str) -> Option<(&'static str, String)> {
    if is_hex_color(value) {
        return Some(("srgbClr", value.to_uppercase()));
    }
    value
        .parse::<SchemeColor>()
        .ok()
        .map(|scheme| ("schemeClr", scheme.as_str().to_string()))
}

impl<S: WarningSink> DrawingXml<S> {
    /// Build a color element, optionally wrapping modifier elements such as
    /// `<a:alpha val="50000"/>`.
    ///
    /// A leading `#` is ignored. Anything that is neither 6-digit hex nor a
    /// scheme color is replaced by the fallback color and reported to the sink.
    pub fn color_element(&self, color: &str, inner_xml: Option<&str>) -> String {
        let value = color.strip_prefix('#').unwrap_or(color);

        let (name, val) = match classify(value) {
            Some(resolved) => resolved,
            None => {
                self.sink().warn(&format!(
                    "\"{}\" is not a valid scheme color or hex RGB! \"{}\" used instead. \
                     Only provide 6-digit RGB or scheme color values!",
                    value,
                    self.fallback_color()
                ));
                classify(self.fallback_color())
                    .unwrap_or_else(|| ("srgbClr", crate::DEFAULT_FONT_COLOR.to_string()))
            }
        };

        match inner_xml {
            Some(inner) if !inner.is_empty() => {
                format!("<a:{name} val=\"{val}\">{inner}</a:{name}>")
            }
            _ => format!("<a:{name} val=\"{val}\"/>"),
        }
    }
}

/// Build a color element, reporting fallbacks through `log`.
pub fn build_color_element(color: &str, inner_xml: Option<&str>) -> String {
    DrawingXml::new().color_element(color, inner_xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pptgen_core::RecordingSink;

    #[test]
    fn test_hex_color() {
        assert_eq!(build_color_element("FF0000", None), r#"<a:srgbClr val="FF0000"/>"#);
    }

    #[test]
    fn test_hex_color_is_uppercased_and_hash_stripped() {
        assert_eq!(build_color_element("#a1b2c3", None), r#"<a:srgbClr val="A1B2C3"/>"#);
    }

    #[test]
    fn test_scheme_color() {
        assert_eq!(build_color_element("accent1", None), r#"<a:schemeClr val="accent1"/>"#);
        assert_eq!(build_color_element("tx1", None), r#"<a:schemeClr val="tx1"/>"#);
        assert_eq!(
            build_color_element("background2", None),
            r#"<a:schemeClr val="bg2"/>"#
        );
    }

    #[test]
    fn test_inner_xml() {
        assert_eq!(
            build_color_element("00FF00", Some(r#"<a:alpha val="50000"/>"#)),
            r#"<a:srgbClr val="00FF00"><a:alpha val="50000"/></a:srgbClr>"#
        );
        assert_eq!(build_color_element("00FF00", Some("")), r#"<a:srgbClr val="00FF00"/>"#);
    }

    #[test]
    fn test_invalid_color_falls_back_with_warning() {
        let xml = DrawingXml::new().with_sink(RecordingSink::new());

        assert_eq!(xml.color_element("not-a-color", None), r#"<a:srgbClr val="000000"/>"#);

        let warnings = xml.sink().messages();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("\"not-a-color\""));
        assert!(warnings[0].contains("\"000000\""));
    }

    #[test]
    fn test_short_hex_is_invalid() {
        let xml = DrawingXml::new().with_sink(RecordingSink::new());

        assert_eq!(xml.color_element("FFF", None), r#"<a:srgbClr val="000000"/>"#);
        assert_eq!(xml.sink().messages().len(), 1);
    }

    #[test]
    fn test_custom_fallback_color() {
        let xml = DrawingXml::new()
            .with_fallback_color("accent2")
            .with_sink(RecordingSink::new());

        assert_eq!(
            xml.color_element("", Some(r#"<a:alpha val="1000"/>"#)),
            r#"<a:schemeClr val="accent2"><a:alpha val="1000"/></a:schemeClr>"#
        );
    }

    #[test]
    fn test_valid_colors_do_not_warn() {
        let xml = DrawingXml::new().with_sink(RecordingSink::new());

        xml.color_element("ABCDEF", None);
        xml.color_element("accent6", None);
        assert!(xml.sink().is_empty());
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("123456"));
        assert!(is_valid_color("bg1"));
        assert!(!is_valid_color("#123456"));
        assert!(!is_valid_color("1234567"));
    }
}
