//! Public types and constants for the visualization module.

use crate::style::Style;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 1024;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 400;
/// Largest accepted canvas width or height in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16384;
/// Resolution used to turn point sizes into pixels.
pub const DEFAULT_DPI: f64 = 92.0;

/// The Y axis always spans this range, whatever the data.
pub const Y_RANGE: (f64, f64) = (0.0, 100.0);

/// Image formats the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    /// File extension appended to the input path.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub dpi: f64,
    pub format: OutputFormat,
    /// Chart-wide style handed to overlays as their middle style layer.
    pub element_defaults: Style,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dpi: DEFAULT_DPI,
            format: OutputFormat::Png,
            element_defaults: Style::default(),
        }
    }
}

/// Convert a point size into whole pixels at `dpi`.
pub fn points_to_px(points: f64, dpi: f64) -> f64 {
    (points * dpi / 72.0).round().max(1.0)
}
