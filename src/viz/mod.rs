//! Chart assembly: one continuous series on a fixed 0–100 Y axis, a wrapped
//! title, a series legend and overlays (the annotation panel) drawn on top.
//!
//! Rendering happens fully in memory; the output file is only written once
//! the image has been drawn and encoded.

pub mod annotation;
pub mod surface;
pub mod text;
pub mod types;

pub use annotation::{
    AnnotationLayout, AnnotationRenderer, LayoutBox, Overlay, Surface, TextExtent,
};
pub use surface::PlottersSurface;
pub use types::{
    ChartOptions, DEFAULT_DPI, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CANVAS_SIDE, OutputFormat,
    Y_RANGE,
};

use crate::error::{Error, Result};
use crate::models::ChartRequest;
use crate::style::{DEFAULT_AXIS_COLOR, DEFAULT_TEXT_COLOR, SERIES_COLOR};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::AreaSeries;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;

use text::wrap_words;
use types::points_to_px;

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts. Safe to call many times.
static INIT_FONTS: Once = Once::new();

pub fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

const MARGIN: u32 = 16;
const TITLE_FONT_PT: f64 = 8.0;
const AXIS_FONT_PT: f64 = 8.0;

/// Output path for `input`: the whole input path with the format's extension
/// appended (`data.json` -> `data.json.png`).
pub fn output_path_for(input: &Path, format: OutputFormat) -> PathBuf {
    let mut s: OsString = input.as_os_str().to_owned();
    s.push(".");
    s.push(format.extension());
    PathBuf::from(s)
}

/// Render `request` and write it next to `input` (see [`output_path_for`]).
/// Returns the path written.
pub fn render_chart<P: AsRef<Path>>(
    request: &ChartRequest,
    input: P,
    options: &ChartOptions,
) -> Result<PathBuf> {
    let out_path = output_path_for(input.as_ref(), options.format);
    let bytes = render_to_bytes(request, options)?;
    write_output(&out_path, &bytes)?;
    log::info!("wrote {} bytes to {}", bytes.len(), out_path.display());
    Ok(out_path)
}

/// Render `request` with the annotation panel built from its legend.
pub fn render_to_bytes(request: &ChartRequest, options: &ChartOptions) -> Result<Vec<u8>> {
    let annotation = AnnotationRenderer::new(request.legend_lines());
    render_to_bytes_with(request, options, &[&annotation])
}

/// Render `request` with a custom set of overlays, each drawn once after the
/// chart body, in order.
pub fn render_to_bytes_with(
    request: &ChartRequest,
    options: &ChartOptions,
    overlays: &[&dyn Overlay],
) -> Result<Vec<u8>> {
    request.validate()?;
    let side_ok = |v: u32| (1..=MAX_CANVAS_SIDE).contains(&v);
    if !side_ok(options.width) || !side_ok(options.height) {
        return Err(Error::Render(format!(
            "invalid canvas size {}x{}",
            options.width, options.height
        )));
    }
    if !request.y2_values.is_empty() {
        log::warn!(
            "ignoring {} secondary y values; only one series is plotted",
            request.y2_values.len()
        );
    }
    ensure_fonts_registered();

    let size = (options.width, options.height);
    match options.format {
        OutputFormat::Png => {
            let mut buf = vec![0u8; rgb_buffer_len(options.width, options.height)?];
            {
                let root = BitMapBackend::with_buffer(&mut buf, size).into_drawing_area();
                draw_chart(&root, request, options, overlays)?;
                root.present().map_err(Error::render)?;
            }
            encode_png(&buf, options.width, options.height)
        }
        OutputFormat::Svg => {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
                draw_chart(&root, request, options, overlays)?;
                root.present().map_err(Error::render)?;
            }
            Ok(svg.into_bytes())
        }
    }
}

/// Size of an RGB8 buffer for a `width` x `height` canvas.
fn rgb_buffer_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(3))
        .ok_or_else(|| Error::Render(format!("canvas {width}x{height} is too large")))
}

fn encode_png(buf: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(buf, width, height, ExtendedColorType::Rgb8)?;
    Ok(out)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    write_output_with(path, bytes, |file, bytes| {
        file.write_all(bytes)?;
        file.flush()
    })
}

/// Create `path` and fill it with `write`. A file left half-written by a
/// failed write is removed.
fn write_output_with<F>(path: &Path, bytes: &[u8], write: F) -> Result<()>
where
    F: FnOnce(&mut File, &[u8]) -> io::Result<()>,
{
    let fail = |source: io::Error| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(fail)?;
    let written = write(&mut file, bytes);
    drop(file);
    written.map_err(|source| {
        let _ = fs::remove_file(path);
        fail(source)
    })
}

/// X axis range over the plotted points. A single distinct value is padded
/// by one unit on each side; no points gives `0..1`.
fn x_range(points: &[(f64, f64)]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 1.0);
    }
    let min = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|(x, _)| *x).fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    request: &ChartRequest,
    options: &ChartOptions,
    overlays: &[&dyn Overlay],
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(Error::render)?;
    let (root_w, _) = root.dim_in_pixel();

    // ----------------------------
    // 1) Title band
    // ----------------------------
    let title_px = points_to_px(TITLE_FONT_PT, options.dpi);
    let text_color = DEFAULT_TEXT_COLOR.to_plotters();
    let title_font = TextStyle::from((FontFamily::SansSerif, title_px)).color(&text_color);

    let mut measure_err: Option<Error> = None;
    let title_lines = wrap_words(&request.title, root_w.saturating_sub(2 * MARGIN), |s| {
        match root.estimate_text_size(s, &title_font) {
            Ok((w, _)) => w,
            Err(e) => {
                if measure_err.is_none() {
                    measure_err = Some(Error::render(e));
                }
                0
            }
        }
    });
    if let Some(e) = measure_err {
        return Err(e);
    }

    let line_h = title_px as i32 + 4;
    let title_h = if title_lines.is_empty() {
        0
    } else {
        MARGIN as i32 + line_h * title_lines.len() as i32
    };
    let (title_area, body) = root.split_vertically(title_h);
    let centered = title_font.pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in title_lines.iter().enumerate() {
        let y = (MARGIN / 2) as i32 + i as i32 * line_h;
        title_area
            .draw(&Text::new(line.clone(), (root_w as i32 / 2, y), centered.clone()))
            .map_err(Error::render)?;
    }

    // ----------------------------
    // 2) Axes
    // ----------------------------
    let points = request.points();
    let (x_min, x_max) = x_range(&points);
    let axis_px = points_to_px(AXIS_FONT_PT, options.dpi);
    let axis_color = DEFAULT_AXIS_COLOR.to_plotters();

    let mut chart = ChartBuilder::on(&body)
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, 56)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_min..x_max, Y_RANGE.0..Y_RANGE.1)
        .map_err(Error::render)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_labels(10)
            .y_labels(11)
            .axis_style(axis_color)
            .label_style((FontFamily::SansSerif, axis_px))
            .axis_desc_style((FontFamily::SansSerif, axis_px));
        if !request.y_unit.is_empty() {
            mesh.y_desc(request.y_unit.as_str());
        }
        mesh.draw().map_err(Error::render)?;
    }

    // ----------------------------
    // 3) Series + legend
    // ----------------------------
    let labeled = !points.is_empty() && !request.x_unit.is_empty();
    if !points.is_empty() {
        let line_color = SERIES_COLOR.to_plotters();
        let fill = SERIES_COLOR.with_alpha(64).to_plotters();
        let elem = chart
            .draw_series(
                AreaSeries::new(points, Y_RANGE.0, fill.filled())
                    .border_style(line_color.stroke_width(2)),
            )
            .map_err(Error::render)?;
        if labeled {
            elem.label(request.x_unit.clone()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 16, y + 5)], line_color.filled())
            });
        }
    }

    if labeled {
        chart
            .configure_series_labels()
            .border_style(axis_color)
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, axis_px))
            .draw()
            .map_err(Error::render)?;
    }

    // ----------------------------
    // 4) Overlays
    // ----------------------------
    let (xr, yr) = chart.plotting_area().get_pixel_range();
    let outer = LayoutBox {
        top: yr.start,
        left: xr.start,
        right: xr.end,
        bottom: yr.end,
    };
    let mut surface = PlottersSurface::new(root, options.dpi);
    for overlay in overlays {
        overlay.draw(&mut surface, outer, &options.element_defaults)?;
    }
    Ok(())
}
