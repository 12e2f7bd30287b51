//! Visual attributes for chart elements and their layered resolution.
//!
//! A [`Style`] is a partial record: every attribute is optional. Drawing code
//! works with a [`ResolvedStyle`], produced by [`resolve_style`] from up to
//! three layers in priority order:
//!
//! 1. caller-supplied override,
//! 2. chart-wide defaults,
//! 3. the component's built-in defaults.
//!
//! Resolution is done attribute by attribute, so a layer that only sets
//! `font_size` never blanks out the fill or stroke of a lower layer.
//!
//! # Example
//!
//! ```rust
//! use mkchart::style::{Rgba, Style, resolve_style};
//!
//! let caller = Style { font_size: Some(12.0), ..Style::default() };
//! let builtin = Style { fill_color: Some(Rgba::new(255, 255, 255, 50)), ..Style::default() };
//!
//! let s = resolve_style(Some(&caller), None, Some(&builtin));
//! assert_eq!(s.font_size, 12.0);
//! assert_eq!(s.fill_color, Rgba::new(255, 255, 255, 50));
//! ```

use plotters::style::RGBAColor;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to the plotters color type (alpha as 0..1).
    pub fn to_plotters(self) -> RGBAColor {
        RGBAColor(self.r, self.g, self.b, self.a as f64 / 255.0)
    }
}

/// Default text color (dark gray).
pub const DEFAULT_TEXT_COLOR: Rgba = Rgba::rgb(51, 51, 51);
/// Default axis/border color.
pub const DEFAULT_AXIS_COLOR: Rgba = Rgba::rgb(51, 51, 51);
/// Default axis/border line width in pixels.
pub const DEFAULT_AXIS_LINE_WIDTH: f64 = 2.0;
/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Microsoft Office (2013+) blue (#4472C4), used for the data series.
pub const SERIES_COLOR: Rgba = Rgba::rgb(68, 114, 196);

/// Partial style: unset attributes fall through to the next layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    pub fill_color: Option<Rgba>,
    pub font_color: Option<Rgba>,
    /// Font size in points.
    pub font_size: Option<f64>,
    pub stroke_color: Option<Rgba>,
    /// Stroke width in pixels.
    pub stroke_width: Option<f64>,
}

/// Fully resolved style, every attribute present.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub fill_color: Rgba,
    pub font_color: Rgba,
    pub font_size: f64,
    pub stroke_color: Rgba,
    pub stroke_width: f64,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            fill_color: Rgba::WHITE,
            font_color: DEFAULT_TEXT_COLOR,
            font_size: DEFAULT_FONT_SIZE,
            stroke_color: DEFAULT_AXIS_COLOR,
            stroke_width: DEFAULT_AXIS_LINE_WIDTH,
        }
    }
}

/// Resolve one style from three optional layers (highest priority first).
///
/// Attributes no layer sets take the values of [`ResolvedStyle::default`].
pub fn resolve_style(
    caller: Option<&Style>,
    chart: Option<&Style>,
    builtin: Option<&Style>,
) -> ResolvedStyle {
    let layers = [caller, chart, builtin];
    let pick = |get: fn(&Style) -> Option<Rgba>| layers.iter().flatten().find_map(|s| get(s));
    let pick_f = |get: fn(&Style) -> Option<f64>| layers.iter().flatten().find_map(|s| get(s));

    let fallback = ResolvedStyle::default();
    ResolvedStyle {
        fill_color: pick(|s| s.fill_color).unwrap_or(fallback.fill_color),
        font_color: pick(|s| s.font_color).unwrap_or(fallback.font_color),
        font_size: pick_f(|s| s.font_size).unwrap_or(fallback.font_size),
        stroke_color: pick(|s| s.stroke_color).unwrap_or(fallback.stroke_color),
        stroke_width: pick_f(|s| s.stroke_width).unwrap_or(fallback.stroke_width),
    }
}
