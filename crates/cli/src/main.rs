//! CLI tool for rendering slide styling descriptors to OOXML fragments.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pptgen_core::{
    from_json, resolve_dimension, Axis, Dimension, GlowOptions, GlowOverrides, Layout, ShapeFill,
};
use pptgen_pptx::{check_fragment, element_names, local_name, DrawingXml};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Render fill, color, and glow descriptors as PowerPoint XML.
#[derive(Parser, Debug)]
#[command(name = "pptgen-xml")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verify the output is a well-formed XML fragment
    #[arg(short, long, global = true)]
    check: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a shape fill descriptor (JSON) as fill markup
    Fill {
        /// JSON descriptor file (default: stdin)
        input: Option<PathBuf>,

        /// Slide background color, emitted before the fill
        #[arg(short, long, conflicts_with = "background_json")]
        background: Option<String>,

        /// Slide background fill descriptor file (JSON)
        #[arg(long)]
        background_json: Option<PathBuf>,
    },

    /// Render a glow descriptor {"options": {...}, "defaults": {...}} as a:glow
    Glow {
        /// JSON descriptor file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Render a color reference (hex RGB or scheme color) as a color element
    Color {
        value: String,
    },

    /// Resolve a dimension (inches, EMU, or percentage) to EMU
    Dim {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Axis a percentage refers to (x or y)
        #[arg(short, long)]
        axis: Option<Axis>,

        /// Reference layout for percentages (16x9, 16x10, 4x3, wide)
        #[arg(short, long, default_value = "16x9")]
        layout: String,
    },
}

/// Glow input: caller options plus optional defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct GlowInput {
    options: GlowOverrides,
    defaults: Option<GlowOptions>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let builder = DrawingXml::new();

    let output = match &args.command {
        Command::Fill {
            input,
            background,
            background_json,
        } => {
            let fill: ShapeFill = from_json(&read_input(input.as_deref())?)
                .context("Failed to decode fill descriptor")?;

            let background = match (background, background_json) {
                (Some(color), _) => Some(ShapeFill::Color(color.clone())),
                (None, Some(path)) => Some(
                    from_json::<ShapeFill>(&read_input(Some(path.as_path()))?)
                        .context("Failed to decode background descriptor")?,
                ),
                (None, None) => None,
            };

            builder.fill_xml(Some(&fill), background.as_ref())
        }
        Command::Glow { input } => {
            let glow: GlowInput = from_json(&read_input(input.as_deref())?)
                .context("Failed to decode glow descriptor")?;
            let defaults = glow.defaults.unwrap_or_default();

            builder.glow_element(&glow.options, &defaults)
        }
        Command::Color { value } => builder.color_element(value, None),
        Command::Dim {
            value,
            axis,
            layout,
        } => {
            let layout = Layout::by_name(layout)
                .with_context(|| format!("Unknown layout '{}'", layout))?;
            let size = match value.parse::<f64>() {
                Ok(n) => Dimension::Number(n),
                Err(_) => Dimension::Text(value.clone()),
            };

            println!("{}", resolve_dimension(&size, *axis, &layout));
            return Ok(());
        }
    };

    if args.check {
        check_fragment(&output).context("Generated markup is not well-formed")?;

        if args.verbose {
            let names = element_names(&output)?;
            log::debug!(
                "Checked {} elements: {}",
                names.len(),
                names.iter().map(|n| local_name(n)).collect::<Vec<_>>().join(", ")
            );
        }
    }

    println!("{}", output);

    Ok(())
}

/// Read a descriptor from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}
