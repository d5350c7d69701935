//! Neon text configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::color::Rgba;
use crate::error::ConfigError;
use crate::style::TextStyle;

/// Font size used when the configuration leaves it unset
pub const DEFAULT_FONT_SIZE: f32 = 30.0;

/// Animation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationType {
    /// Glow spread oscillates in [1.0, 1.2]
    #[default]
    Glow,
    /// Glow spread oscillates in [0.8, 1.3]
    Pulse,
    /// Static
    None,
}

impl AnimationType {
    /// Output range of the animation scalar, `None` for static text
    pub fn range(self) -> Option<(f32, f32)> {
        match self {
            AnimationType::Glow => Some((1.0, 1.2)),
            AnimationType::Pulse => Some((0.8, 1.3)),
            AnimationType::None => None,
        }
    }

    pub fn is_animated(self) -> bool {
        self != AnimationType::None
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationType::Glow => "glow",
            AnimationType::Pulse => "pulse",
            AnimationType::None => "none",
        }
    }

    pub const ALL: [AnimationType; 3] =
        [AnimationType::Glow, AnimationType::Pulse, AnimationType::None];
}

impl FromStr for AnimationType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidAnimationType(s.to_string()))
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visual parameters of one neon text.
///
/// Construction never validates; see [`NeonConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct NeonConfig {
    pub text: String,
    pub neon_color: Rgba,
    pub font: Option<String>,
    /// Falls back to [`DEFAULT_FONT_SIZE`] when unset
    pub font_size: Option<f32>,
    /// Base glow spread
    pub blur_radius: f32,
    /// Opacity of the inner fill layer
    pub alpha: u8,
    pub stroke_width: f32,
    /// Inner fill color. Without it only the outline is drawn.
    pub text_color: Option<Rgba>,
    /// Base style, overridden by the computed attributes
    pub text_style: Option<TextStyle>,
    pub animation_type: AnimationType,
    pub animation_duration: Duration,
    pub letter_spacing: f32,
}

impl NeonConfig {
    pub const DEFAULT_BLUR_RADIUS: f32 = 10.0;
    pub const DEFAULT_ALPHA: u8 = 150;
    pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);
    pub const DEFAULT_LETTER_SPACING: f32 = 1.0;

    pub fn new(text: impl Into<String>, neon_color: Rgba) -> Self {
        Self {
            text: text.into(),
            neon_color,
            font: None,
            font_size: None,
            blur_radius: Self::DEFAULT_BLUR_RADIUS,
            alpha: Self::DEFAULT_ALPHA,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            text_color: None,
            text_style: None,
            animation_type: AnimationType::default(),
            animation_duration: Self::DEFAULT_DURATION,
            letter_spacing: Self::DEFAULT_LETTER_SPACING,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_neon_color(mut self, color: Rgba) -> Self {
        self.neon_color = color;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_blur_radius(mut self, radius: f32) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_text_color(mut self, color: Option<Rgba>) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    pub fn with_animation(mut self, animation_type: AnimationType) -> Self {
        self.animation_type = animation_type;
        self
    }

    /// Duration of one half cycle, in whole seconds
    pub fn with_duration_secs(mut self, secs: u64) -> Self {
        self.animation_duration = Duration::from_secs(secs);
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Font size after applying the default
    pub fn resolved_font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Report the first caller contract violation, if any.
    ///
    /// Rendering does not call this; out-of-contract values are drawn as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("blur_radius", Some(self.blur_radius)),
            ("stroke_width", Some(self.stroke_width)),
            ("font_size", self.font_size),
        ];
        for (field, value) in positive {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ConfigError::NonPositive { field, value });
                }
            }
        }

        if self.animation_duration.as_secs() == 0 {
            return Err(ConfigError::ZeroDuration);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NeonConfig::new("Neon", Rgba::CYAN);
        assert_eq!(config.font, None);
        assert_eq!(config.font_size, None);
        assert_eq!(config.resolved_font_size(), 30.0);
        assert_eq!(config.blur_radius, 10.0);
        assert_eq!(config.alpha, 150);
        assert_eq!(config.stroke_width, 1.0);
        assert_eq!(config.text_color, None);
        assert_eq!(config.animation_type, AnimationType::Glow);
        assert_eq!(config.animation_duration, Duration::from_secs(2));
        assert_eq!(config.letter_spacing, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ranges() {
        assert_eq!(AnimationType::Glow.range(), Some((1.0, 1.2)));
        assert_eq!(AnimationType::Pulse.range(), Some((0.8, 1.3)));
        assert_eq!(AnimationType::None.range(), None);
        assert!(!AnimationType::None.is_animated());
    }

    #[test]
    fn test_animation_type_parse() {
        assert_eq!("pulse".parse::<AnimationType>(), Ok(AnimationType::Pulse));
        assert_eq!(" NONE ".parse::<AnimationType>(), Ok(AnimationType::None));
        assert!(matches!(
            "flicker".parse::<AnimationType>(),
            Err(ConfigError::InvalidAnimationType(_))
        ));
        assert_eq!(AnimationType::Glow.to_string(), "glow");
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let config = NeonConfig::new("x", Rgba::CYAN).with_blur_radius(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "blur_radius",
                value: 0.0
            })
        );

        let config = NeonConfig::new("x", Rgba::CYAN).with_font_size(-4.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "font_size", .. })
        ));

        let config = NeonConfig::new("x", Rgba::CYAN).with_stroke_width(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let config = NeonConfig::new("x", Rgba::CYAN).with_duration_secs(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));
    }
}
