//! DrawingML/PresentationML fragment builders for slide styling.
//!
//! Every builder is a pure function of its inputs that returns markup as a
//! string, ready to be spliced into a slide part. Invalid input never fails:
//! it is replaced by a documented default, and invalid colors are reported
//! to the builder's [`WarningSink`](pptgen_core::WarningSink).

pub mod builder;
pub mod check;
pub mod color;
pub mod effects;
pub mod fill;
pub mod gradient;
pub mod rels;

pub use builder::{DrawingXml, DEFAULT_FONT_COLOR};
pub use check::{check_fragment, element_names, local_name};
pub use color::{build_color_element, is_hex_color, is_valid_color};
pub use effects::build_glow_element;
pub use fill::build_fill_xml;
pub use gradient::{
    default_stops, normalize_gradient, FocusCorner, GradientGeometry, GradientSpec,
    LinearDirection, ResolvedStop,
};
pub use rels::{next_rel_id, rel_id_attr, RelationshipTarget, SlideRelationships};

#[cfg(test)]
mod tests {
    use super::*;
    use pptgen_core::{from_json, GlowOptions, GlowOverrides, ShapeFill};

    #[test]
    fn test_every_builder_output_is_well_formed() {
        let fills = [
            r#""FF0000""#,
            r#"{ "color": "accent1", "transparency": 20 }"#,
            r#"{ "type": "gradient", "gradientDirection": "bltr" }"#,
            r#"{ "type": "gradient", "gradientType": "radial", "gradientDirection": "ftr" }"#,
            r#"{ "type": "gradient", "gradientType": "rect", "gradientDirection": "fbl" }"#,
            r#"{ "type": "gradient", "gradientType": "path", "pathL": 10, "pathT": 90 }"#,
        ];

        for json in fills {
            let fill: ShapeFill = from_json(json).unwrap();
            let xml = build_fill_xml(Some(&fill), Some(&ShapeFill::from("tx2")));
            assert!(check_fragment(&xml).is_ok(), "{}", xml);
        }

        let glow = build_glow_element(&GlowOverrides::default(), &GlowOptions::default());
        assert!(check_fragment(&glow).is_ok());
        assert!(check_fragment(&build_color_element("#123abc", None)).is_ok());
    }

    #[test]
    fn test_background_fill_structure() {
        let fill: ShapeFill = from_json(r#"{ "type": "gradient", "gradientType": "radial" }"#).unwrap();
        let xml = build_fill_xml(None, Some(&fill));

        let names: Vec<String> = element_names(&xml)
            .unwrap()
            .iter()
            .map(|n| local_name(n).to_string())
            .collect();
        assert_eq!(&names[..3], ["bg", "bgPr", "gradFill"]);
        assert_eq!(names.last().map(String::as_str), Some("effectLst"));
    }
}
