//! [`Surface`] implemented on a plotters drawing area.
//!
//! Coordinates are absolute canvas pixels, so the area should be the root
//! area of the backend. Font sizes in styles are points and are converted to
//! pixels with the configured DPI. Text is anchored on the bottom edge of
//! its layout box; plotters has no baseline anchor.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::annotation::{LayoutBox, Surface, TextExtent};
use super::types::points_to_px;
use crate::error::{Error, Result};
use crate::style::ResolvedStyle;

pub struct PlottersSurface<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
    dpi: f64,
}

impl<'a, DB: DrawingBackend> PlottersSurface<'a, DB> {
    pub fn new(area: &'a DrawingArea<DB, Shift>, dpi: f64) -> Self {
        Self { area, dpi }
    }

    fn font_px(&self, style: &ResolvedStyle) -> f64 {
        points_to_px(style.font_size, self.dpi)
    }
}

impl<DB: DrawingBackend> Surface for PlottersSurface<'_, DB> {
    fn measure_text(&mut self, text: &str, style: &ResolvedStyle) -> Result<TextExtent> {
        let font = TextStyle::from((FontFamily::SansSerif, self.font_px(style)));
        let (w, h) = self
            .area
            .estimate_text_size(text, &font)
            .map_err(Error::render)?;
        Ok(TextExtent {
            width: w as i32,
            height: h as i32,
        })
    }

    fn draw_box(&mut self, rect: LayoutBox, style: &ResolvedStyle) -> Result<()> {
        let corners = [(rect.left, rect.top), (rect.right, rect.bottom)];
        let fill = style.fill_color.to_plotters();
        self.area
            .draw(&Rectangle::new(corners, fill.filled()))
            .map_err(Error::render)?;

        let width = style.stroke_width.round().max(0.0) as u32;
        if width > 0 {
            let stroke = style.stroke_color.to_plotters();
            self.area
                .draw(&Rectangle::new(corners, stroke.stroke_width(width)))
                .map_err(Error::render)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &ResolvedStyle) -> Result<()> {
        let color = style.font_color.to_plotters();
        let font = TextStyle::from((FontFamily::SansSerif, self.font_px(style)))
            .color(&color)
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        self.area
            .draw(&Text::new(text.to_string(), (x, y), font))
            .map_err(Error::render)?;
        Ok(())
    }
}
