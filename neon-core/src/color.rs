//! 8-bit RGBA color

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Straight (non-premultiplied) RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const CYAN: Self = Self::rgb(0x00, 0xff, 0xff);
    pub const MAGENTA: Self = Self::rgb(0xff, 0x00, 0xff);
    pub const PINK: Self = Self::rgb(0xff, 0x00, 0x66);
    pub const GREEN: Self = Self::rgb(0x00, 0xff, 0x41);
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0x00);
    pub const ORANGE: Self = Self::rgb(0xff, 0x98, 0x00);
    pub const RED: Self = Self::rgb(0xff, 0x32, 0x32);
    pub const BLUE: Self = Self::rgb(0x00, 0x66, 0xff);
    pub const PURPLE: Self = Self::rgb(0x9c, 0x27, 0xb0);

    const NAMED: [(&'static str, Self); 11] = [
        ("black", Self::BLACK),
        ("white", Self::WHITE),
        ("cyan", Self::CYAN),
        ("magenta", Self::MAGENTA),
        ("pink", Self::PINK),
        ("green", Self::GREEN),
        ("yellow", Self::YELLOW),
        ("orange", Self::ORANGE),
        ("red", Self::RED),
        ("blue", Self::BLUE),
        ("purple", Self::PURPLE),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Look up one of the named constants (case-insensitive)
    pub fn named(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        // from_str_radix alone would also take a sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl FromStr for Rgba {
    type Err = ConfigError;

    /// Accepts `#RRGGBB`, `#RRGGBBAA` (the `#` is optional) or a color name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(color) = Self::named(s) {
            return Ok(color);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        Self::parse_hex(hex).ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_keeps_channels() {
        let c = Rgba::CYAN.with_alpha(220);
        assert_eq!((c.r, c.g, c.b, c.a), (0x00, 0xff, 0xff, 220));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#00ffcc".parse::<Rgba>(), Ok(Rgba::rgb(0x00, 0xff, 0xcc)));
        assert_eq!("FF006680".parse::<Rgba>(), Ok(Rgba::rgba(0xff, 0x00, 0x66, 0x80)));
    }

    #[test]
    fn test_parse_named_case_insensitive() {
        assert_eq!("Cyan".parse::<Rgba>(), Ok(Rgba::CYAN));
        assert_eq!(" black ".parse::<Rgba>(), Ok(Rgba::BLACK));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("#12345".parse::<Rgba>(), Err(ConfigError::InvalidColor(_))));
        assert!(matches!("#gg0000".parse::<Rgba>(), Err(ConfigError::InvalidColor(_))));
        assert!(matches!("neon".parse::<Rgba>(), Err(ConfigError::InvalidColor(_))));
        assert!("#ééé".parse::<Rgba>().is_err());
        assert!(matches!("+0+0+0".parse::<Rgba>(), Err(ConfigError::InvalidColor(_))));
        assert!("#+f+f+f+f".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_display_is_parseable() {
        let c = Rgba::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_string(), "#12345678");
        assert_eq!(c.to_string().parse::<Rgba>(), Ok(c));
    }
}
