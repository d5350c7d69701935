//! Blur approximation for text shadows
//!
//! egui cannot blur text, so a shadow is faked by stamping faint copies of the
//! glyphs on concentric rings out to the blur radius. Wider shadows get more
//! rings and samples, up to a fixed cap.

use egui::Vec2;

/// Hard cap on copies per shadow
pub const MAX_SAMPLES: usize = 48;

/// Overall brightness of a faked shadow relative to one solid copy
pub const GLOW_GAIN: f32 = 1.6;

const MAX_RINGS: usize = 3;
const MIN_RING_SAMPLES: usize = 6;
const MAX_RING_SAMPLES: usize = 16;
/// Spacing between samples along a ring, in points
const SAMPLE_SPACING: f32 = 4.0;

/// Offsets and per-copy opacity for one shadow
#[derive(Debug, Clone, PartialEq)]
pub struct BlurKernel {
    pub offsets: Vec<Vec2>,
    /// Multiplier for the shadow color's alpha, per copy
    pub alpha_scale: f32,
}

impl BlurKernel {
    pub fn new(blur_radius: f32) -> Self {
        if !(blur_radius.is_finite() && blur_radius > 0.5) {
            return Self {
                offsets: vec![Vec2::ZERO],
                alpha_scale: 1.0,
            };
        }

        let rings = ((blur_radius / SAMPLE_SPACING).ceil() as usize).clamp(1, MAX_RINGS);
        let mut offsets = Vec::with_capacity(MAX_SAMPLES);

        for ring in 1..=rings {
            let r = blur_radius * ring as f32 / rings as f32;
            let circumference = std::f32::consts::TAU * r;
            let n = ((circumference / SAMPLE_SPACING).round() as usize)
                .clamp(MIN_RING_SAMPLES, MAX_RING_SAMPLES);
            // Stagger alternate rings so samples don't line up radially
            let phase = if ring % 2 == 0 { 0.5 } else { 0.0 };
            for i in 0..n {
                if offsets.len() == MAX_SAMPLES {
                    break;
                }
                let angle = (i as f32 + phase) / n as f32 * std::f32::consts::TAU;
                offsets.push(Vec2::angled(angle) * r);
            }
        }

        let alpha_scale = (GLOW_GAIN / offsets.len() as f32).min(1.0);
        Self {
            offsets,
            alpha_scale,
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Alpha for each copy given the shadow color's alpha
    pub fn copy_alpha(&self, shadow_alpha: u8) -> u8 {
        (f32::from(shadow_alpha) * self.alpha_scale).round().clamp(0.0, 255.0) as u8
    }
}
