//! WASM-compatible wrapper for slide XML fragment generation.
//!
//! This crate exposes the fill, color, glow, and dimension builders to
//! JavaScript so descriptor objects can be passed in as-is.

use pptgen_core::{
    resolve_dimension as resolve, Axis, Dimension, GlowOptions, GlowOverrides, Layout,
    RecordingSink, ShapeFill,
};
use pptgen_pptx::DrawingXml;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Generated markup plus any fallback warnings raised while building it.
#[derive(Debug, Serialize, Deserialize)]
pub struct XmlResult {
    /// The XML fragment.
    pub xml: String,
    /// Fallback warnings, e.g. invalid colors that were replaced.
    pub warnings: Vec<String>,
}

/// Build shape fill markup, optionally preceded by a slide background.
///
/// # Arguments
/// * `fill` - A color string or fill descriptor object, or `undefined`
/// * `background` - A color string or fill descriptor object, or `undefined`
///
/// # Returns
/// A JavaScript object `{ xml, warnings }`, or throws on an undecodable descriptor.
#[wasm_bindgen]
pub fn build_fill_xml(fill: JsValue, background: JsValue) -> Result<JsValue, JsValue> {
    let fill: Option<ShapeFill> = serde_wasm_bindgen::from_value(fill)
        .map_err(|e| JsValue::from_str(&format!("Invalid fill descriptor: {}", e)))?;
    let background: Option<ShapeFill> = serde_wasm_bindgen::from_value(background)
        .map_err(|e| JsValue::from_str(&format!("Invalid background descriptor: {}", e)))?;

    to_js(&build_fill_xml_impl(fill.as_ref(), background.as_ref()))
}

fn build_fill_xml_impl(fill: Option<&ShapeFill>, background: Option<&ShapeFill>) -> XmlResult {
    let builder = DrawingXml::new().with_sink(RecordingSink::new());
    let xml = builder.fill_xml(fill, background);

    XmlResult {
        xml,
        warnings: builder.sink().take(),
    }
}

/// Build an `a:glow` element from caller options laid over defaults.
///
/// # Arguments
/// * `options` - Partial glow options `{ size?, color?, opacity? }`
/// * `defaults` - Complete glow options, or `undefined` for the standard text glow
#[wasm_bindgen]
pub fn build_glow_element(options: JsValue, defaults: JsValue) -> Result<JsValue, JsValue> {
    let options: Option<GlowOverrides> = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid glow options: {}", e)))?;
    let defaults: Option<GlowOptions> = serde_wasm_bindgen::from_value(defaults)
        .map_err(|e| JsValue::from_str(&format!("Invalid glow defaults: {}", e)))?;

    to_js(&build_glow_element_impl(
        &options.unwrap_or_default(),
        &defaults.unwrap_or_default(),
    ))
}

fn build_glow_element_impl(options: &GlowOverrides, defaults: &GlowOptions) -> XmlResult {
    let builder = DrawingXml::new().with_sink(RecordingSink::new());
    let xml = builder.glow_element(options, defaults);

    XmlResult {
        xml,
        warnings: builder.sink().take(),
    }
}

/// Build a color element for a hex RGB string or scheme color token.
#[wasm_bindgen]
pub fn build_color_element(color: &str) -> Result<JsValue, JsValue> {
    to_js(&build_color_element_impl(color))
}

fn build_color_element_impl(color: &str) -> XmlResult {
    let builder = DrawingXml::new().with_sink(RecordingSink::new());
    let xml = builder.color_element(color, None);

    XmlResult {
        xml,
        warnings: builder.sink().take(),
    }
}

/// Resolve a position or size to EMU.
///
/// # Arguments
/// * `size` - Inches (number below 100), EMU (100 and above), or a percentage string
/// * `axis` - `"x"` or `"y"`; percentages use the layout width unless `"y"`
/// * `layout_width` / `layout_height` - Layout size in EMU
#[wasm_bindgen]
pub fn resolve_dimension(
    size: JsValue,
    axis: Option<String>,
    layout_width: f64,
    layout_height: f64,
) -> Result<f64, JsValue> {
    let size: Dimension = serde_wasm_bindgen::from_value(size)
        .map_err(|e| JsValue::from_str(&format!("Invalid dimension: {}", e)))?;

    Ok(resolve_dimension_impl(&size, axis.as_deref(), layout_width, layout_height) as f64)
}

fn resolve_dimension_impl(
    size: &Dimension,
    axis: Option<&str>,
    layout_width: f64,
    layout_height: f64,
) -> i64 {
    let axis = axis.and_then(|a| a.parse::<Axis>().ok());
    let layout = Layout::new(layout_width as i64, layout_height as i64);
    resolve(size, axis, &layout)
}

fn to_js(result: &XmlResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
