//! Text style description and the base/computed merge

use crate::color::Rgba;

/// How a text layer is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintStyle {
    Fill,
    /// Outline only
    Stroke { width: f32 },
}

/// Foreground paint for glyphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgba,
    pub style: PaintStyle,
}

impl Paint {
    pub fn fill(color: Rgba) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
        }
    }

    pub fn stroke(color: Rgba, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke { width },
        }
    }

    pub fn is_stroke(&self) -> bool {
        matches!(self.style, PaintStyle::Stroke { .. })
    }
}

/// A blurred copy of the glyphs drawn behind the text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur_radius: f32,
    /// (dx, dy) in logical pixels
    pub offset: (f32, f32),
}

impl Shadow {
    /// Shadow centered under the glyphs
    pub fn glow(color: Rgba, blur_radius: f32) -> Self {
        Self {
            color,
            blur_radius,
            offset: (0.0, 0.0),
        }
    }
}

/// Text style attributes. Unset fields mean "inherit".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub foreground: Option<Paint>,
    pub shadows: Vec<Shadow>,
    /// Line height as a multiple of the font size
    pub line_height: Option<f32>,
    pub italics: bool,
    pub underline: bool,
}

/// Merge a caller-supplied base style with computed attributes.
///
/// Precedence:
/// - `font_family`, `font_size`, `letter_spacing`, `foreground`, `line_height`:
///   computed wins when set, otherwise the base value is kept
/// - `shadows`: computed wins when non-empty
/// - `italics`, `underline`: always taken from the base
pub fn merge(base: Option<&TextStyle>, computed: TextStyle) -> TextStyle {
    let Some(base) = base else {
        return computed;
    };

    TextStyle {
        font_family: computed.font_family.or_else(|| base.font_family.clone()),
        font_size: computed.font_size.or(base.font_size),
        letter_spacing: computed.letter_spacing.or(base.letter_spacing),
        foreground: computed.foreground.or(base.foreground),
        shadows: if computed.shadows.is_empty() {
            base.shadows.clone()
        } else {
            computed.shadows
        },
        line_height: computed.line_height.or(base.line_height),
        italics: base.italics,
        underline: base.underline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> TextStyle {
        TextStyle {
            font_family: Some("Serif".into()),
            font_size: Some(12.0),
            letter_spacing: Some(0.0),
            foreground: Some(Paint::fill(Rgba::WHITE)),
            shadows: vec![Shadow::glow(Rgba::RED, 1.0)],
            line_height: Some(1.4),
            italics: true,
            underline: true,
        }
    }

    #[test]
    fn test_no_base_returns_computed() {
        let computed = TextStyle {
            font_size: Some(30.0),
            ..Default::default()
        };
        assert_eq!(merge(None, computed.clone()), computed);
    }

    #[test]
    fn test_computed_fields_win() {
        let computed = TextStyle {
            font_family: Some("Mono".into()),
            font_size: Some(30.0),
            letter_spacing: Some(2.0),
            foreground: Some(Paint::stroke(Rgba::CYAN, 1.0)),
            shadows: vec![Shadow::glow(Rgba::CYAN, 5.0)],
            ..Default::default()
        };
        let merged = merge(Some(&base()), computed);

        assert_eq!(merged.font_family.as_deref(), Some("Mono"));
        assert_eq!(merged.font_size, Some(30.0));
        assert_eq!(merged.letter_spacing, Some(2.0));
        assert_eq!(merged.foreground, Some(Paint::stroke(Rgba::CYAN, 1.0)));
        assert_eq!(merged.shadows, vec![Shadow::glow(Rgba::CYAN, 5.0)]);
    }

    #[test]
    fn test_unset_computed_fields_inherit() {
        let merged = merge(Some(&base()), TextStyle::default());
        assert_eq!(merged, base());
    }

    #[test]
    fn test_decorations_come_from_base_only() {
        let computed = TextStyle {
            italics: false,
            underline: false,
            ..Default::default()
        };
        let merged = merge(Some(&base()), computed);
        assert!(merged.italics);
        assert!(merged.underline);
    }
}
