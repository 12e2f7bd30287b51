//! Annotation panel: a bordered, semi-transparent text box anchored to the
//! bottom-left of the chart and sized exactly to its content.
//!
//! Drawing goes through two small contracts so the layout can be exercised
//! without a real backend:
//! - [`Surface`]: measure text, draw a box, draw text.
//! - [`Overlay`]: an element drawn after the chart body, given the chart's
//!   outer box and the chart-wide default style.

use crate::error::Result;
use crate::style::{
    DEFAULT_AXIS_COLOR, DEFAULT_AXIS_LINE_WIDTH, DEFAULT_TEXT_COLOR, ResolvedStyle, Rgba, Style,
    resolve_style,
};

/// Horizontal distance from the canvas left edge to the panel.
pub const LEFT_INSET: i32 = 50;
/// Padding between the panel border and its text, on every side.
pub const PADDING: i32 = 5;

/// Rectangle in canvas pixel coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutBox {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl LayoutBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Smallest box enclosing both `self` and `other`.
    pub fn grow(&self, other: &LayoutBox) -> LayoutBox {
        LayoutBox {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Rendered size of one line of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

/// Drawing surface used by overlays.
///
/// Text calls take the style explicitly; measuring and drawing a line with
/// the same style must agree on its size.
pub trait Surface {
    fn measure_text(&mut self, text: &str, style: &ResolvedStyle) -> Result<TextExtent>;

    /// Filled and stroked rectangle.
    fn draw_box(&mut self, rect: LayoutBox, style: &ResolvedStyle) -> Result<()>;

    /// Text with its left edge at `x` and the bottom of its measured box at
    /// `y`, so a line drawn at `top + height` fills exactly the slot that
    /// `measure_text` reserved for it.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &ResolvedStyle) -> Result<()>;
}

/// Element drawn once per render pass on top of the laid-out chart.
pub trait Overlay {
    fn draw(&self, surface: &mut dyn Surface, outer: LayoutBox, defaults: &Style) -> Result<()>;
}

/// Result of measuring the annotation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationLayout {
    /// Area occupied by the text.
    pub content: LayoutBox,
    /// Outer panel including padding; this is what gets filled and stroked.
    pub panel: LayoutBox,
}

/// Overlay drawing the annotation panel for a list of text lines.
#[derive(Debug, Clone, Default)]
pub struct AnnotationRenderer {
    lines: Vec<String>,
    style: Option<Style>,
}

impl AnnotationRenderer {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, style: None }
    }

    /// Caller override; wins over chart defaults and built-ins per attribute.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Built-in panel style: translucent white fill, small dark text, axis-colored border.
    pub fn builtin_style() -> Style {
        Style {
            fill_color: Some(Rgba::WHITE.with_alpha(50)),
            font_color: Some(DEFAULT_TEXT_COLOR),
            font_size: Some(8.0),
            stroke_color: Some(DEFAULT_AXIS_COLOR),
            stroke_width: Some(DEFAULT_AXIS_LINE_WIDTH),
        }
    }

    pub fn effective_style(&self, defaults: &Style) -> ResolvedStyle {
        resolve_style(self.style.as_ref(), Some(defaults), Some(&Self::builtin_style()))
    }

    // Empty lines take no space at all.
    fn visible_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str).filter(|l| !l.is_empty())
    }

    /// Measure every visible line and compute the content and panel boxes.
    ///
    /// The panel's bottom edge sits at `outer.height()`; lines stack upward
    /// from there. With no visible lines the content box has zero size and
    /// the panel is just its padding.
    pub fn layout(
        &self,
        surface: &mut dyn Surface,
        outer: LayoutBox,
        style: &ResolvedStyle,
    ) -> Result<AnnotationLayout> {
        let anchor = outer.height();
        let mut panel = LayoutBox {
            bottom: anchor,
            left: LEFT_INSET,
            ..LayoutBox::default()
        };
        let mut content = LayoutBox {
            top: anchor - PADDING,
            left: LEFT_INSET + PADDING,
            right: LEFT_INSET + PADDING,
            bottom: anchor - PADDING,
        };

        for line in self.visible_lines() {
            let extent = surface.measure_text(line, style)?;
            content.top -= extent.height;
            content.right = content.right.max(content.left + extent.width);
        }

        panel = panel.grow(&content);
        panel.right = content.right + PADDING;
        panel.top = content.top - PADDING;

        Ok(AnnotationLayout { content, panel })
    }
}

impl Overlay for AnnotationRenderer {
    fn draw(&self, surface: &mut dyn Surface, outer: LayoutBox, defaults: &Style) -> Result<()> {
        log::debug!("rendering texts: {:?}", self.lines);
        let style = self.effective_style(defaults);
        let layout = self.layout(surface, outer, &style)?;
        log::debug!("annotation panel: {:?}", layout.panel);

        surface.draw_box(layout.panel, &style)?;

        let x = layout.content.left;
        let mut y_cursor = layout.content.top;
        for line in self.visible_lines() {
            let extent = surface.measure_text(line, &style)?;
            y_cursor += extent.height;
            surface.draw_text(line, x, y_cursor, &style)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Box(LayoutBox),
        Text(String, i32, i32),
    }

    /// Surface with scripted text metrics that records what gets drawn.
    #[derive(Default)]
    struct FakeSurface {
        metrics: HashMap<String, TextExtent>,
        calls: Vec<Call>,
        styles: Vec<ResolvedStyle>,
    }

    impl FakeSurface {
        fn with(metrics: &[(&str, i32, i32)]) -> Self {
            Self {
                metrics: metrics
                    .iter()
                    .map(|(t, w, h)| (t.to_string(), TextExtent { width: *w, height: *h }))
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl Surface for FakeSurface {
        fn measure_text(&mut self, text: &str, style: &ResolvedStyle) -> Result<TextExtent> {
            self.styles.push(*style);
            Ok(self.metrics.get(text).copied().unwrap_or_default())
        }

        fn draw_box(&mut self, rect: LayoutBox, style: &ResolvedStyle) -> Result<()> {
            self.styles.push(*style);
            self.calls.push(Call::Box(rect));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &ResolvedStyle) -> Result<()> {
            self.styles.push(*style);
            self.calls.push(Call::Text(text.to_string(), x, y));
            Ok(())
        }
    }

    const OUTER: LayoutBox = LayoutBox {
        top: 0,
        left: 0,
        right: 800,
        bottom: 300,
    };

    fn lines(s: &str) -> Vec<String> {
        s.split('\n').map(str::to_string).collect()
    }

    fn layout_of(text: &str, surface: &mut FakeSurface) -> AnnotationLayout {
        let r = AnnotationRenderer::new(lines(text));
        let style = r.effective_style(&Style::default());
        r.layout(surface, OUTER, &style).unwrap()
    }

    #[test]
    fn two_lines_stack_exactly() {
        let mut s = FakeSurface::with(&[("A", 5, 10), ("B", 8, 10)]);
        let l = layout_of("A\nB", &mut s);
        assert_eq!(l.content.height(), 20);
        assert_eq!(l.content.width(), 8);
        assert_eq!(l.content.left, LEFT_INSET + PADDING);
        assert_eq!(l.content.bottom, 300 - PADDING);
    }

    #[test]
    fn panel_wraps_content_with_padding() {
        let mut s = FakeSurface::with(&[("A", 5, 10), ("B", 8, 10)]);
        let l = layout_of("A\nB", &mut s);
        assert_eq!(
            l.panel,
            LayoutBox {
                top: 300 - PADDING - 20 - PADDING,
                left: LEFT_INSET,
                right: LEFT_INSET + PADDING + 8 + PADDING,
                bottom: 300,
            }
        );
    }

    #[test]
    fn content_height_is_sum_of_line_heights() {
        let mut s = FakeSurface::with(&[("one", 30, 9), ("two", 12, 14), ("three", 44, 11)]);
        let l = layout_of("one\ntwo\nthree", &mut s);
        assert_eq!(l.content.height(), 9 + 14 + 11);
        assert_eq!(l.content.width(), 44);
    }

    #[test]
    fn empty_lines_never_count() {
        let metrics = [("A", 5, 10), ("B", 8, 10)];
        let base = layout_of("A\nB", &mut FakeSurface::with(&metrics));
        for text in ["\nA\nB", "A\n\nB", "A\nB\n", "\n\nA\n\n\nB\n\n"] {
            let l = layout_of(text, &mut FakeSurface::with(&metrics));
            assert_eq!(l, base, "legend {text:?}");
        }
    }

    #[test]
    fn empty_legend_is_degenerate_panel_at_anchor() {
        // Still drawn: a padding-only box at the bottom-left anchor.
        let mut s = FakeSurface::default();
        let r = AnnotationRenderer::new(lines(""));
        r.draw(&mut s, OUTER, &Style::default()).unwrap();

        let l = layout_of("", &mut FakeSurface::default());
        assert_eq!(l.content.height(), 0);
        assert_eq!(l.content.width(), 0);
        assert_eq!(
            s.calls,
            vec![Call::Box(LayoutBox {
                top: 300 - 2 * PADDING,
                left: LEFT_INSET,
                right: LEFT_INSET + 2 * PADDING,
                bottom: 300,
            })]
        );
    }

    #[test]
    fn anchor_uses_outer_height() {
        let outer = LayoutBox {
            top: 20,
            left: 60,
            right: 900,
            bottom: 320,
        };
        let mut s = FakeSurface::with(&[("A", 5, 10)]);
        let r = AnnotationRenderer::new(lines("A"));
        let l = r
            .layout(&mut s, outer, &r.effective_style(&Style::default()))
            .unwrap();
        assert_eq!(l.panel.bottom, 300);
    }

    #[test]
    fn draws_box_then_lines_top_to_bottom() {
        let mut s = FakeSurface::with(&[("A", 5, 10), ("B", 8, 12)]);
        let r = AnnotationRenderer::new(lines("A\n\nB"));
        r.draw(&mut s, OUTER, &Style::default()).unwrap();

        let top = 300 - PADDING - 22;
        let x = LEFT_INSET + PADDING;
        assert!(matches!(s.calls[0], Call::Box(_)));
        assert_eq!(
            &s.calls[1..],
            &[
                Call::Text("A".into(), x, top + 10),
                Call::Text("B".into(), x, top + 22),
            ]
        );
    }

    #[test]
    fn measure_and_draw_share_one_style() {
        let mut s = FakeSurface::with(&[("A", 5, 10)]);
        let defaults = Style {
            font_size: Some(14.0),
            ..Style::default()
        };
        let r = AnnotationRenderer::new(lines("A")).with_style(Style {
            font_color: Some(Rgba::BLACK),
            ..Style::default()
        });
        r.draw(&mut s, OUTER, &defaults).unwrap();

        let first = s.styles[0];
        assert!(s.styles.iter().all(|st| *st == first));
        assert_eq!(first.font_size, 14.0);
        assert_eq!(first.font_color, Rgba::BLACK);
        assert_eq!(first.fill_color, Rgba::WHITE.with_alpha(50));
    }
}
