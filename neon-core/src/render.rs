//! Glow renderer
//!
//! Maps a configuration and the current animation scalar to a description of
//! what to paint: an outlined stroke layer and, when a text color is set, a
//! filled layer on the same box. Both carry the same three glow shadows whose
//! spread grows from a third of the radius to twice the radius, which reads as
//! an exponential falloff once the host blurs them.

use crate::color::Rgba;
use crate::config::{AnimationType, NeonConfig};
use crate::style::{merge, Paint, Shadow, TextStyle};

/// Opacity of the outline layer
pub const STROKE_ALPHA: u8 = 220;

/// Glow spread for the current frame
pub fn effective_radius(config: &NeonConfig, scalar: f32) -> f32 {
    match config.animation_type {
        AnimationType::None => config.blur_radius,
        AnimationType::Glow | AnimationType::Pulse => config.blur_radius * scalar,
    }
}

/// The three glow shadows for spread `radius`, narrowest first
pub fn glow_shadows(color: Rgba, radius: f32) -> [Shadow; 3] {
    [
        Shadow::glow(color, radius / 3.0),
        Shadow::glow(color, radius / 1.5),
        Shadow::glow(color, radius * 2.0),
    ]
}

/// One text rendering: glyphs, paint and shadows
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    pub style: TextStyle,
}

impl TextLayer {
    /// Foreground paint. Always set for rendered layers.
    pub fn paint(&self) -> Option<&Paint> {
        self.style.foreground.as_ref()
    }

    pub fn shadows(&self) -> &[Shadow] {
        &self.style.shadows
    }
}

/// Everything the host needs to paint one neon text
#[derive(Debug, Clone, PartialEq)]
pub struct NeonLayers {
    pub text: String,
    pub stroke: TextLayer,
    pub fill: Option<TextLayer>,
    /// Spread the shadows were derived from
    pub radius: f32,
}

impl NeonLayers {
    /// Layers in paint order
    pub fn layers(&self) -> impl Iterator<Item = &TextLayer> {
        std::iter::once(&self.stroke).chain(self.fill.as_ref())
    }

    pub fn layer_count(&self) -> usize {
        1 + usize::from(self.fill.is_some())
    }
}

fn layer(config: &NeonConfig, paint: Paint, shadows: &[Shadow]) -> TextLayer {
    let computed = TextStyle {
        font_family: config.font.clone(),
        font_size: Some(config.resolved_font_size()),
        letter_spacing: Some(config.letter_spacing),
        foreground: Some(paint),
        shadows: shadows.to_vec(),
        ..Default::default()
    };
    TextLayer {
        style: merge(config.text_style.as_ref(), computed),
    }
}

/// Describe the neon text for animation value `scalar`
pub fn render(config: &NeonConfig, scalar: f32) -> NeonLayers {
    let radius = effective_radius(config, scalar);
    let shadows = glow_shadows(config.neon_color, radius);

    let stroke = layer(
        config,
        Paint::stroke(config.neon_color.with_alpha(STROKE_ALPHA), config.stroke_width),
        &shadows,
    );
    let fill = config
        .text_color
        .map(|color| layer(config, Paint::fill(color.with_alpha(config.alpha)), &shadows));

    NeonLayers {
        text: config.text.clone(),
        stroke,
        fill,
        radius,
    }
}
