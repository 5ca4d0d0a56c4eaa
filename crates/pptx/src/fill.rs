//! Shape fill and slide background serialization.

use crate::builder::DrawingXml;
use crate::gradient::{normalize_gradient, GradientGeometry, GradientSpec, ResolvedStop};
use pptgen_core::{round_half_up, FillType, ShapeFill, WarningSink};

/// `a:alpha` element for a transparency percentage (0 = opaque).
fn alpha_element(transparency: f64) -> String {
    format!(
        "<a:alpha val=\"{}\"/>",
        round_half_up((100.0 - transparency) * 1000.0)
    )
}

impl<S: WarningSink> DrawingXml<S> {
    /// Build the fill markup for a shape, preceded by an optional slide
    /// background.
    ///
    /// A string background becomes a solid `p:bg`; an object background is
    /// rendered with this same builder inside `p:bg`. Unknown fill types
    /// produce no fill markup.
    pub fn fill_xml(&self, fill: Option<&ShapeFill>, background: Option<&ShapeFill>) -> String {
        let mut xml = String::with_capacity(256);

        if let Some(background) = background {
            xml.push_str(&self.background_xml(background));
        }

        if let Some(fill) = fill {
            xml.push_str(&self.shape_fill_xml(fill));
        }

        xml
    }

    fn background_xml(&self, background: &ShapeFill) -> String {
        let inner = match background {
            ShapeFill::Color(color) => {
                let color = color.strip_prefix('#').unwrap_or(color);
                format!("<a:solidFill>{}</a:solidFill>", self.color_element(color, None))
            }
            ShapeFill::Props(_) => self.fill_xml(Some(background), None),
        };

        // p:bgPr requires a fill element
        if inner.is_empty() {
            return String::new();
        }

        format!("<p:bg><p:bgPr>{}<a:effectLst/></p:bgPr></p:bg>", inner)
    }

    fn shape_fill_xml(&self, fill: &ShapeFill) -> String {
        let props = match fill {
            ShapeFill::Color(color) => {
                return format!("<a:solidFill>{}</a:solidFill>", self.color_element(color, None));
            }
            ShapeFill::Props(props) => props,
        };

        // Zero counts as "not set" for both fields. Both may be emitted.
        let mut modifiers = String::new();
        if let Some(alpha) = props.alpha.filter(|a| *a != 0.0) {
            modifiers.push_str(&alpha_element(alpha));
        }
        if let Some(transparency) = props.transparency.filter(|t| *t != 0.0) {
            modifiers.push_str(&alpha_element(transparency));
        }

        let color = props.color.as_deref().unwrap_or_default();

        match props.fill_type {
            FillType::Solid => format!(
                "<a:solidFill>{}</a:solidFill>",
                self.color_element(color, Some(&modifiers))
            ),
            FillType::Gradient => self.gradient_fill(&normalize_gradient(props)),
            FillType::Unsupported => String::new(),
        }
    }

    /// Serialize a resolved gradient as `a:gradFill`.
    pub fn gradient_fill(&self, spec: &GradientSpec) -> String {
        let mut xml = String::with_capacity(128 + spec.stops.len() * 96);

        xml.push_str(&format!(
            "<a:gradFill flip=\"none\" rotWithShape=\"{}\">",
            u8::from(spec.rotate_with_shape)
        ));

        xml.push_str("<a:gsLst>");
        for stop in &spec.stops {
            xml.push_str(&self.gradient_stop(stop));
        }
        xml.push_str("</a:gsLst>");

        match spec.geometry {
            GradientGeometry::Linear { angle } => {
                xml.push_str(&format!(
                    "<a:lin ang=\"{}\" scaled=\"1\"/><a:tileRect/>",
                    round_half_up(angle * 60_000.0)
                ));
            }
            GradientGeometry::Radial(corner) => {
                xml.push_str("<a:path path=\"circle\">");
                xml.push_str(corner.fill_to_rect());
                xml.push_str("</a:path>");
                xml.push_str(corner.tile_rect());
            }
            GradientGeometry::Rect(corner) => {
                xml.push_str("<a:path path=\"rect\">");
                xml.push_str(corner.fill_to_rect());
                xml.push_str("</a:path>");
                xml.push_str(corner.tile_rect());
            }
            GradientGeometry::Path {
                left,
                top,
                right,
                bottom,
            } => {
                xml.push_str(&format!(
                    "<a:path path=\"shape\"><a:fillToRect l=\"{}\" t=\"{}\" r=\"{}\" b=\"{}\"/></a:path><a:tileRect/>",
                    round_half_up(left * 1000.0),
                    round_half_up(top * 1000.0),
                    round_half_up(right * 1000.0),
                    round_half_up(bottom * 1000.0),
                ));
            }
        }

        xml.push_str("</a:gradFill>");
        xml
    }

    fn gradient_stop(&self, stop: &ResolvedStop) -> String {
        let mut modifiers = String::new();

        if stop.brightness < 0.0 {
            modifiers.push_str(&format!(
                "<a:lumMod val=\"{}\"/>",
                round_half_up((100.0 + stop.brightness) * 1000.0)
            ));
        } else if stop.brightness > 0.0 {
            modifiers.push_str(&format!(
                "<a:lumMod val=\"{}\"/><a:lumOff val=\"{}\"/>",
                round_half_up((100.0 - stop.brightness) * 1000.0),
                round_half_up(stop.brightness * 1000.0)
            ));
        }

        if stop.transparency > 0.0 {
            modifiers.push_str(&alpha_element(stop.transparency));
        }

        format!(
            "<a:gs pos=\"{}\">{}</a:gs>",
            round_half_up(stop.position * 1000.0),
            self.color_element(&stop.color, Some(&modifiers))
        )
    }
}

/// Build fill markup, reporting fallbacks through `log`.
pub fn build_fill_xml(fill: Option<&ShapeFill>, background: Option<&ShapeFill>) -> String {
    DrawingXml::new().fill_xml(fill, background)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pptgen_core::{from_json, FillProps, GradientStop, GradientType, RecordingSink};

    fn fill(json: &str) -> ShapeFill {
        from_json(json).unwrap()
    }

    #[test]
    fn test_solid_string_shorthand() {
        let xml = build_fill_xml(Some(&ShapeFill::from("00FF00")), None);
        assert_eq!(xml, r#"<a:solidFill><a:srgbClr val="00FF00"/></a:solidFill>"#);
    }

    #[test]
    fn test_solid_object() {
        let xml = build_fill_xml(Some(&FillProps::solid("accent4").into()), None);
        assert_eq!(xml, r#"<a:solidFill><a:schemeClr val="accent4"/></a:solidFill>"#);
    }

    #[test]
    fn test_solid_transparency() {
        let xml = build_fill_xml(
            Some(&fill(r#"{ "type": "solid", "color": "FF0000", "transparency": 25 }"#)),
            None,
        );
        assert_eq!(
            xml,
            r#"<a:solidFill><a:srgbClr val="FF0000"><a:alpha val="75000"/></a:srgbClr></a:solidFill>"#
        );
    }

    #[test]
    fn test_alpha_and_transparency_both_emitted() {
        let xml = build_fill_xml(
            Some(&fill(r#"{ "color": "FF0000", "alpha": 10, "transparency": 40 }"#)),
            None,
        );
        assert_eq!(
            xml,
            r#"<a:solidFill><a:srgbClr val="FF0000"><a:alpha val="90000"/><a:alpha val="60000"/></a:srgbClr></a:solidFill>"#
        );
    }

    #[test]
    fn test_zero_transparency_emits_no_alpha() {
        let xml = build_fill_xml(
            Some(&fill(r#"{ "color": "FF0000", "transparency": 0 }"#)),
            None,
        );
        assert_eq!(xml, r#"<a:solidFill><a:srgbClr val="FF0000"/></a:solidFill>"#);
    }

    #[test]
    fn test_unsupported_fill_type_is_empty() {
        assert_eq!(build_fill_xml(Some(&fill(r#"{ "type": "pattern" }"#)), None), "");
        assert_eq!(build_fill_xml(None, None), "");
    }

    #[test]
    fn test_string_background() {
        let xml = build_fill_xml(None, Some(&ShapeFill::from("#FFFFFF")));
        assert_eq!(
            xml,
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
        );
    }

    #[test]
    fn test_object_background_and_fill() {
        let background = fill(r#"{ "color": "bg1", "transparency": 50 }"#);
        let xml = build_fill_xml(Some(&ShapeFill::from("accent2")), Some(&background));
        assert_eq!(
            xml,
            concat!(
                r#"<p:bg><p:bgPr><a:solidFill><a:schemeClr val="bg1"><a:alpha val="50000"/></a:schemeClr></a:solidFill>"#,
                r#"<a:effectLst/></p:bgPr></p:bg>"#,
                r#"<a:solidFill><a:schemeClr val="accent2"/></a:solidFill>"#
            )
        );
    }

    #[test]
    fn test_unsupported_background_emits_nothing() {
        let background = fill(r#"{ "type": "pattern" }"#);
        assert_eq!(build_fill_xml(None, Some(&background)), "");
        assert_eq!(
            build_fill_xml(Some(&ShapeFill::from("FF0000")), Some(&background)),
            r#"<a:solidFill><a:srgbClr val="FF0000"/></a:solidFill>"#
        );
    }

    #[test]
    fn test_non_string_stop_color_falls_back_with_warning() {
        let xml = DrawingXml::new().with_sink(RecordingSink::new());
        let out = xml.fill_xml(
            Some(&fill(
                r#"{ "type": "gradient", "gradStops": [{ "color": 123, "position": 10 }, { "color": "accent1", "position": 90 }] }"#,
            )),
            None,
        );

        assert!(out.contains(r#"<a:gs pos="10000"><a:srgbClr val="000000"/></a:gs>"#));
        assert_eq!(xml.sink().messages().len(), 1);
    }

    #[test]
    fn test_non_string_direction_uses_fail_safe() {
        let linear = build_fill_xml(
            Some(&fill(r#"{ "type": "gradient", "gradientDirection": 5 }"#)),
            None,
        );
        assert!(linear.contains(r#"<a:lin ang="2700000" scaled="1"/>"#));

        let radial = build_fill_xml(
            Some(&fill(
                r#"{ "type": "gradient", "gradientType": "radial", "gradientDirection": 5 }"#,
            )),
            None,
        );
        assert!(radial.contains(r#"<a:fillToRect r="100000" b="100000"/>"#));
    }

    #[test]
    fn test_non_string_solid_color_falls_back_with_warning() {
        let xml = DrawingXml::new().with_sink(RecordingSink::new());
        let out = xml.fill_xml(Some(&fill(r#"{ "color": 255 }"#)), None);

        assert_eq!(out, r#"<a:solidFill><a:srgbClr val="000000"/></a:solidFill>"#);
        assert_eq!(xml.sink().messages().len(), 1);
    }

    #[test]
    fn test_linear_gradient_from_direction() {
        let xml = build_fill_xml(
            Some(&fill(
                r#"{
                    "type": "gradient",
                    "gradientDirection": "tb",
                    "gradStops": [
                        { "color": "FF0000", "position": 0 },
                        { "color": "0000FF", "position": 100 }
                    ]
                }"#,
            )),
            None,
        );
        assert_eq!(
            xml,
            concat!(
                r#"<a:gradFill flip="none" rotWithShape="1"><a:gsLst>"#,
                r#"<a:gs pos="0"><a:srgbClr val="FF0000"/></a:gs>"#,
                r#"<a:gs pos="100000"><a:srgbClr val="0000FF"/></a:gs>"#,
                r#"</a:gsLst><a:lin ang="5400000" scaled="1"/><a:tileRect/></a:gradFill>"#
            )
        );
    }

    #[test]
    fn test_default_gradient_stops() {
        let xml = build_fill_xml(Some(&fill(r#"{ "type": "gradient" }"#)), None);
        assert_eq!(
            xml,
            concat!(
                r#"<a:gradFill flip="none" rotWithShape="1"><a:gsLst>"#,
                r#"<a:gs pos="0"><a:schemeClr val="accent1"/></a:gs>"#,
                r#"<a:gs pos="50000"><a:schemeClr val="accent1"><a:lumMod val="50000"/><a:lumOff val="50000"/></a:schemeClr></a:gs>"#,
                r#"<a:gs pos="100000"><a:schemeClr val="accent1"><a:lumMod val="0"/><a:lumOff val="100000"/></a:schemeClr></a:gs>"#,
                r#"</a:gsLst><a:lin ang="2700000" scaled="1"/><a:tileRect/></a:gradFill>"#
            )
        );
    }

    #[test]
    fn test_stop_modifiers() {
        let props = FillProps::gradient(
            GradientType::Linear,
            vec![
                GradientStop::new("FF0000", 20.0)
                    .with_brightness(-25.0)
                    .with_transparency(30.0),
                GradientStop::new("accent3", 80.0).with_brightness(40.0),
            ],
        );

        let xml = build_fill_xml(Some(&props.into()), None);
        assert!(xml.contains(
            r#"<a:gs pos="20000"><a:srgbClr val="FF0000"><a:lumMod val="75000"/><a:alpha val="70000"/></a:srgbClr></a:gs>"#
        ));
        assert!(xml.contains(
            r#"<a:gs pos="80000"><a:schemeClr val="accent3"><a:lumMod val="60000"/><a:lumOff val="40000"/></a:schemeClr></a:gs>"#
        ));
    }

    #[test]
    fn test_radial_gradient_geometry() {
        let props = FillProps::gradient(GradientType::Radial, vec![]).with_direction("c");
        let xml = build_fill_xml(Some(&props.into()), None);
        assert!(xml.ends_with(concat!(
            r#"<a:path path="circle"><a:fillToRect l="50000" t="50000" r="50000" b="50000"/></a:path>"#,
            r#"<a:tileRect/></a:gradFill>"#
        )));
    }

    #[test]
    fn test_rect_gradient_invalid_direction_uses_top_left() {
        let props = FillProps::gradient(GradientType::Rect, vec![]).with_direction("lr");
        let xml = build_fill_xml(Some(&props.into()), None);
        assert!(xml.ends_with(concat!(
            r#"<a:path path="rect"><a:fillToRect r="100000" b="100000"/></a:path>"#,
            r#"<a:tileRect l="-100000" t="-100000"/></a:gradFill>"#
        )));
    }

    #[test]
    fn test_path_gradient_geometry() {
        let xml = build_fill_xml(
            Some(&fill(
                r#"{ "type": "gradient", "gradientType": "path", "pathL": 25, "rotateWithShape": false }"#,
            )),
            None,
        );
        assert!(xml.starts_with(r#"<a:gradFill flip="none" rotWithShape="0">"#));
        assert!(xml.ends_with(concat!(
            r#"<a:path path="shape"><a:fillToRect l="25000" t="50000" r="75000" b="50000"/></a:path>"#,
            r#"<a:tileRect/></a:gradFill>"#
        )));
    }

    #[test]
    fn test_invalid_stop_color_warns_once_per_stop() {
        let xml = DrawingXml::new().with_sink(RecordingSink::new());
        let props = FillProps::gradient(
            GradientType::Linear,
            vec![GradientStop::new("red", 10.0), GradientStop::new("blue", 90.0)],
        );

        let out = xml.fill_xml(Some(&props.into()), None);
        assert_eq!(out.matches(r#"<a:srgbClr val="000000"/>"#).count(), 2);
        assert_eq!(xml.sink().messages().len(), 2);
    }

    #[test]
    fn test_solid_without_color_falls_back() {
        let xml = DrawingXml::new().with_sink(RecordingSink::new());
        let out = xml.fill_xml(Some(&fill(r#"{ "type": "solid" }"#)), None);

        assert_eq!(out, r#"<a:solidFill><a:srgbClr val="000000"/></a:solidFill>"#);
        assert_eq!(xml.sink().messages().len(), 1);
    }
}
