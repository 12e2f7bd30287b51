use mkchart::style::{ResolvedStyle, Rgba, Style, resolve_style};
use mkchart::viz::AnnotationRenderer;

fn full(color: Rgba, size: f64, width: f64) -> Style {
    Style {
        fill_color: Some(color),
        font_color: Some(color),
        font_size: Some(size),
        stroke_color: Some(color),
        stroke_width: Some(width),
    }
}

#[test]
fn caller_beats_chart_beats_builtin() {
    let caller = full(Rgba::rgb(1, 1, 1), 1.0, 1.0);
    let chart = full(Rgba::rgb(2, 2, 2), 2.0, 2.0);
    let builtin = full(Rgba::rgb(3, 3, 3), 3.0, 3.0);

    let s = resolve_style(Some(&caller), Some(&chart), Some(&builtin));
    assert_eq!(s.fill_color, Rgba::rgb(1, 1, 1));
    assert_eq!(s.font_size, 1.0);

    let s = resolve_style(None, Some(&chart), Some(&builtin));
    assert_eq!(s.stroke_color, Rgba::rgb(2, 2, 2));
    assert_eq!(s.stroke_width, 2.0);

    let s = resolve_style(None, None, Some(&builtin));
    assert_eq!(s.font_color, Rgba::rgb(3, 3, 3));
}

#[test]
fn partial_override_keeps_other_attributes() {
    let caller = Style {
        font_size: Some(20.0),
        ..Style::default()
    };
    let chart = Style {
        stroke_color: Some(Rgba::rgb(9, 9, 9)),
        ..Style::default()
    };
    let builtin = full(Rgba::rgb(3, 3, 3), 3.0, 3.0);

    let s = resolve_style(Some(&caller), Some(&chart), Some(&builtin));
    assert_eq!(
        s,
        ResolvedStyle {
            fill_color: Rgba::rgb(3, 3, 3),
            font_color: Rgba::rgb(3, 3, 3),
            font_size: 20.0,
            stroke_color: Rgba::rgb(9, 9, 9),
            stroke_width: 3.0,
        }
    );
}

#[test]
fn annotation_builtin_style_applies_without_overrides() {
    let s = AnnotationRenderer::new(vec![]).effective_style(&Style::default());
    assert_eq!(s.fill_color, Rgba::WHITE.with_alpha(50));
    assert_eq!(s.font_size, 8.0);
    assert_eq!(s.stroke_width, 2.0);
}

#[test]
fn annotation_override_wins_over_chart_defaults() {
    let chart = Style {
        font_size: Some(12.0),
        fill_color: Some(Rgba::rgb(200, 0, 0)),
        ..Style::default()
    };
    let r = AnnotationRenderer::new(vec![]).with_style(Style {
        fill_color: Some(Rgba::rgb(0, 200, 0)),
        ..Style::default()
    });
    let s = r.effective_style(&chart);
    assert_eq!(s.fill_color, Rgba::rgb(0, 200, 0));
    assert_eq!(s.font_size, 12.0);
    assert_eq!(s.stroke_width, 2.0);
}
