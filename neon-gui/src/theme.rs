use egui::{Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};
use neon_core::Rgba;

/// Dark theme whose interactive colors follow a neon accent
pub struct NeonTheme;

// Fixed palette
pub const BG: Color32 = Color32::from_rgb(0x05, 0x05, 0x0a);
pub const BG_PANEL: Color32 = Color32::from_rgb(0x10, 0x10, 0x18);
pub const PRIMARY: Color32 = Color32::from_rgb(0x00, 0xff, 0xff);
pub const TEXT: Color32 = Color32::from_rgb(0xc8, 0xf0, 0xff);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x50, 0x70, 0x80);
pub const DIM: Color32 = Color32::from_rgb(0x24, 0x24, 0x30);
pub const DANGER: Color32 = Color32::from_rgb(0xff, 0x32, 0x32);

/// How much of the accent bleeds into hovered and pressed widget fills
const HOVER_TINT: f32 = 0.12;
const ACTIVE_TINT: f32 = 0.25;
/// Alpha of the selection highlight
const SELECTION_ALPHA: u8 = 0x30;

/// Core color to egui color
pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Panel background with `amount` of the accent mixed in, opaque
pub fn tint(accent: Rgba, amount: f32) -> Color32 {
    let t = amount.clamp(0.0, 1.0);
    let mix = |bg: u8, fg: u8| (f32::from(bg) + (f32::from(fg) - f32::from(bg)) * t).round() as u8;
    Color32::from_rgb(
        mix(BG_PANEL.r(), accent.r),
        mix(BG_PANEL.g(), accent.g),
        mix(BG_PANEL.b(), accent.b),
    )
}

impl NeonTheme {
    /// Apply the theme with `accent` driving strokes, fills and selection.
    ///
    /// Cheap enough to call again whenever the accent changes.
    pub fn apply(ctx: &egui::Context, accent: Rgba) {
        let mut style = (*ctx.style()).clone();
        style.text_styles = [
            (TextStyle::Small, FontId::new(10.0, FontFamily::Monospace)),
            (TextStyle::Body, FontId::new(13.0, FontFamily::Monospace)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
            (TextStyle::Button, FontId::new(13.0, FontFamily::Monospace)),
            (TextStyle::Heading, FontId::new(18.0, FontFamily::Monospace)),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(6.0, 4.0);
        style.spacing.window_margin = egui::Margin::same(6.0);

        let glow = to_color32(accent.with_alpha(0xff));
        let mut visuals = Visuals::dark();
        visuals.panel_fill = BG;
        visuals.window_fill = BG_PANEL;
        visuals.extreme_bg_color = BG;
        visuals.faint_bg_color = DIM;
        visuals.window_stroke = Stroke::new(1.0, DIM);
        visuals.window_shadow = egui::epaint::Shadow::NONE;

        let idle = [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
        ];
        for w in idle {
            w.fg_stroke = Stroke::new(1.0, TEXT);
            w.bg_fill = BG_PANEL;
            w.weak_bg_fill = BG_PANEL;
            w.bg_stroke = Stroke::new(1.0, DIM);
        }

        let hovered = &mut visuals.widgets.hovered;
        hovered.fg_stroke = Stroke::new(1.0, glow);
        hovered.bg_fill = tint(accent, HOVER_TINT);
        hovered.weak_bg_fill = hovered.bg_fill;
        hovered.bg_stroke = Stroke::new(1.0, glow);

        let active = &mut visuals.widgets.active;
        active.fg_stroke = Stroke::new(1.0, glow);
        active.bg_fill = tint(accent, ACTIVE_TINT);
        active.weak_bg_fill = active.bg_fill;
        active.bg_stroke = Stroke::new(1.5, glow);

        visuals.selection.bg_fill = to_color32(accent.with_alpha(SELECTION_ALPHA));
        visuals.selection.stroke = Stroke::new(1.0, glow);

        style.visuals = visuals;
        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_keeps_alpha() {
        let c = to_color32(Rgba::CYAN.with_alpha(220));
        assert_eq!(c.a(), 220);
        assert_eq!(c.r(), 0);

        let opaque = to_color32(Rgba::PINK);
        assert_eq!(opaque, Color32::from_rgb(0xff, 0x00, 0x66));
    }

    #[test]
    fn test_tint_endpoints() {
        assert_eq!(tint(Rgba::PINK, 0.0), BG_PANEL);
        assert_eq!(tint(Rgba::PINK, 1.0), Color32::from_rgb(0xff, 0x00, 0x66));
        assert_eq!(tint(Rgba::PINK, 7.0), tint(Rgba::PINK, 1.0));
    }

    #[test]
    fn test_tint_follows_accent() {
        let pink = tint(Rgba::PINK, ACTIVE_TINT);
        let cyan = tint(Rgba::CYAN, ACTIVE_TINT);
        assert!(pink.r() > cyan.r());
        assert!(cyan.g() > pink.g());
        assert!(tint(Rgba::CYAN, ACTIVE_TINT).g() > tint(Rgba::CYAN, HOVER_TINT).g());
    }
}
