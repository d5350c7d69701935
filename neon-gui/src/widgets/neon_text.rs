use std::sync::Arc;

use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontFamily, FontId, Galley, Painter, Pos2, Response, Sense, Stroke, Ui, Vec2};
use neon_core::{NeonLayers, PaintStyle, Shadow, TextLayer, TextStyle, DEFAULT_FONT_SIZE};
use tracing::debug;

use crate::theme::to_color32;
use crate::vfx::BlurKernel;

/// Eight compass directions used to thicken glyphs into an outline
const OUTLINE_DIRECTIONS: [Vec2; 8] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.707, 0.707),
    Vec2::new(0.0, 1.0),
    Vec2::new(-0.707, 0.707),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-0.707, -0.707),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.707, -0.707),
];

pub struct NeonTextWidget;

impl NeonTextWidget {
    /// Allocate space for the text and paint it centered.
    ///
    /// Only the glyph box is allocated; the glow spills over neighbours the
    /// same way a drop shadow would.
    pub fn show(ui: &mut Ui, layers: &NeonLayers) -> Response {
        let galley = layout(ui.ctx(), &layers.text, &layers.stroke.style);
        let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::hover());
        if ui.is_rect_visible(rect) {
            let background = ui.visuals().panel_fill;
            paint_with_galley(ui.painter(), rect.center(), layers, galley, background);
        }
        response
    }
}

/// Paint all layers of a neon text centered on `center`.
///
/// `background` knocks out the inside of the outline so the stroke layer
/// reads as outline-only.
pub fn paint_layers(painter: &Painter, center: Pos2, layers: &NeonLayers, background: Color32) {
    let galley = layout(painter.ctx(), &layers.text, &layers.stroke.style);
    paint_with_galley(painter, center, layers, galley, background);
}

fn paint_with_galley(
    painter: &Painter,
    center: Pos2,
    layers: &NeonLayers,
    stroke_galley: Arc<Galley>,
    background: Color32,
) {
    let origin = center - stroke_galley.size() / 2.0;

    // Colors are overridden at paint time, so the fill only needs its own
    // galley when its glyph geometry differs
    let fill = layers.fill.as_ref().map(|fill| {
        let galley = if same_layout(&fill.style, &layers.stroke.style) {
            stroke_galley.clone()
        } else {
            layout(painter.ctx(), &layers.text, &fill.style)
        };
        (galley, fill)
    });

    paint_shadows(painter, origin, &stroke_galley, &layers.stroke);
    if let Some((galley, fill)) = &fill {
        paint_shadows(painter, origin, galley, fill);
    }

    paint_outline(painter, origin, &stroke_galley, &layers.stroke, background);

    if let Some((galley, fill)) = fill {
        if let Some(paint) = fill.paint() {
            painter.galley_with_override_text_color(origin, galley, to_color32(paint.color));
        }
    }
}

/// True when two styles produce the same glyph geometry
fn same_layout(a: &TextStyle, b: &TextStyle) -> bool {
    a.font_family == b.font_family
        && a.font_size == b.font_size
        && a.letter_spacing == b.letter_spacing
        && a.line_height == b.line_height
        && a.italics == b.italics
        && a.underline == b.underline
}

/// Kernel and per-copy color for a shadow, `None` when nothing would show
fn shadow_copies(shadow: &Shadow) -> Option<(BlurKernel, Color32)> {
    let kernel = BlurKernel::new(shadow.blur_radius);
    match kernel.copy_alpha(shadow.color.a) {
        0 => None,
        alpha => Some((kernel, to_color32(shadow.color.with_alpha(alpha)))),
    }
}

fn paint_shadows(painter: &Painter, origin: Pos2, galley: &Arc<Galley>, layer: &TextLayer) {
    for shadow in layer.shadows() {
        let Some((kernel, color)) = shadow_copies(shadow) else {
            continue;
        };
        let base = origin + Vec2::new(shadow.offset.0, shadow.offset.1);
        for offset in &kernel.offsets {
            painter.galley_with_override_text_color(base + *offset, galley.clone(), color);
        }
    }
}

fn paint_outline(
    painter: &Painter,
    origin: Pos2,
    galley: &Arc<Galley>,
    layer: &TextLayer,
    background: Color32,
) {
    let Some(paint) = layer.paint() else {
        return;
    };
    let color = to_color32(paint.color);

    match paint.style {
        PaintStyle::Stroke { width } => {
            // The stroke is centered on the glyph edge, half of it lies outside
            let reach = (width * 0.5).max(0.5);
            for dir in OUTLINE_DIRECTIONS {
                painter.galley_with_override_text_color(origin + dir * reach, galley.clone(), color);
            }
            painter.galley_with_override_text_color(origin, galley.clone(), background);
        }
        PaintStyle::Fill => {
            painter.galley_with_override_text_color(origin, galley.clone(), color);
        }
    }
}

/// Lay out `text` with the attributes of `style`
pub fn layout(ctx: &egui::Context, text: &str, style: &TextStyle) -> Arc<Galley> {
    let registered = ctx.fonts(|fonts| fonts.families());
    let family = resolve_family(style.font_family.as_deref(), &registered);
    let size = style.font_size.unwrap_or(DEFAULT_FONT_SIZE);

    let color = style
        .foreground
        .map_or(Color32::WHITE, |paint| to_color32(paint.color));
    let format = TextFormat {
        font_id: FontId::new(size, family),
        extra_letter_spacing: style.letter_spacing.unwrap_or(0.0),
        line_height: style.line_height.map(|h| h * size),
        color,
        italics: style.italics,
        underline: if style.underline {
            Stroke::new((size / 16.0).max(1.0), color)
        } else {
            Stroke::NONE
        },
        ..Default::default()
    };

    let mut job = LayoutJob::single_section(text.to_owned(), format);
    job.wrap.max_width = f32::INFINITY;
    ctx.fonts(|fonts| fonts.layout_job(job))
}

/// Map a configured family name onto a family egui can draw with
pub fn resolve_family(name: Option<&str>, registered: &[FontFamily]) -> FontFamily {
    let Some(name) = name else {
        return FontFamily::Proportional;
    };

    if name.eq_ignore_ascii_case("monospace") {
        return FontFamily::Monospace;
    }
    if name.eq_ignore_ascii_case("proportional") {
        return FontFamily::Proportional;
    }

    let named = FontFamily::Name(name.into());
    if registered.contains(&named) {
        named
    } else {
        debug!(font = name, "font family not registered, using proportional");
        FontFamily::Proportional
    }
}

#[cfg(test)]
mod tests {
    use neon_core::{render, NeonConfig, Rgba};

    use super::*;

    #[test]
    fn test_resolve_builtin_families() {
        assert_eq!(resolve_family(None, &[]), FontFamily::Proportional);
        assert_eq!(resolve_family(Some("Monospace"), &[]), FontFamily::Monospace);
        assert_eq!(resolve_family(Some("proportional"), &[]), FontFamily::Proportional);
    }

    #[test]
    fn test_resolve_registered_family() {
        let registered = vec![FontFamily::Name("Orbitron".into())];
        assert_eq!(
            resolve_family(Some("Orbitron"), &registered),
            FontFamily::Name("Orbitron".into())
        );
    }

    #[test]
    fn test_resolve_unknown_family_falls_back() {
        assert_eq!(resolve_family(Some("Comic Neon"), &[]), FontFamily::Proportional);
    }

    #[test]
    fn test_fill_shares_stroke_layout() {
        let config = NeonConfig::new("OPEN", Rgba::PINK)
            .with_font("Monospace")
            .with_text_color(Some(Rgba::WHITE));
        let layers = render(&config, 1.1);
        let fill = layers.fill.as_ref().expect("fill layer");

        assert!(same_layout(&fill.style, &layers.stroke.style));
    }

    #[test]
    fn test_different_geometry_needs_own_layout() {
        let stroke = TextStyle {
            font_size: Some(30.0),
            ..Default::default()
        };
        let fill = TextStyle {
            font_size: Some(30.0),
            italics: true,
            ..Default::default()
        };
        assert!(!same_layout(&stroke, &fill));
    }

    #[test]
    fn test_transparent_glow_paints_nothing() {
        let config = NeonConfig::new("ghost", Rgba::CYAN.with_alpha(0));
        let layers = render(&config, 1.0);
        assert!(layers.stroke.shadows().iter().all(|s| shadow_copies(s).is_none()));

        let visible = render(&NeonConfig::new("lit", Rgba::CYAN), 1.0);
        assert!(visible.stroke.shadows().iter().all(|s| shadow_copies(s).is_some()));
    }

    #[test]
    fn test_outline_directions_are_unit_length() {
        for dir in OUTLINE_DIRECTIONS {
            assert!((dir.length() - 1.0).abs() < 1e-3);
        }
    }
}
