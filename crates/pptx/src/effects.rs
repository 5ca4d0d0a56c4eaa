//! Effect elements.

use crate::builder::DrawingXml;
use pptgen_core::{points_to_emu, round_half_up, GlowOptions, GlowOverrides, WarningSink};

impl<S: WarningSink> DrawingXml<S> {
    /// Build an `a:glow` element from caller options laid over `defaults`.
    ///
    /// Size is in points, opacity is a 0.0 to 1.0 fraction.
    pub fn glow_element(&self, options: &GlowOverrides, defaults: &GlowOptions) -> String {
        let glow = defaults.apply_overrides(options);
        let radius = points_to_emu(glow.size);
        let opacity = round_half_up(glow.opacity * 100_000.0);

        let mut xml = String::with_capacity(96);
        xml.push_str(&format!("<a:glow rad=\"{}\">", radius));
        xml.push_str(&self.color_element(
            &glow.color,
            Some(&format!("<a:alpha val=\"{}\"/>", opacity)),
        ));
        xml.push_str("</a:glow>");
        xml
    }
}

/// Build an `a:glow` element, reporting fallbacks through `log`.
pub fn build_glow_element(options: &GlowOverrides, defaults: &GlowOptions) -> String {
    DrawingXml::new().glow_element(options, defaults)
}
