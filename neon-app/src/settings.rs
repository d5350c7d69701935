//! Settings persistence for the demo
//!
//! Stores the editable neon text as simple `key=value` lines.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use neon_core::{AnimationType, ConfigError, NeonConfig, Rgba};
use tracing::warn;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "NEON_CONFIG";

/// Demo settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The text shown in the editor panel
    pub config: NeonConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: NeonConfig::new("Neon Lights", Rgba::CYAN),
        }
    }
}

impl Settings {
    /// Load settings from the default location
    ///
    /// Returns defaults if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let (settings, errors) = Self::parse(&content);
        for error in errors {
            warn!(path = %path.display(), %error, "ignoring setting");
        }
        Ok(settings)
    }

    /// Save settings to the default location
    pub fn save(&self) -> io::Result<PathBuf> {
        let path = Self::config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.serialize())
    }

    /// Settings file path, `$NEON_CONFIG` if set
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("neon")
            .join("config.txt")
    }

    /// Parse `key=value` lines. Bad values keep their default and are returned
    /// alongside the settings.
    fn parse(content: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default().config;
        let mut errors = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();

            // The text keeps its surrounding whitespace
            let result = if key == "text" {
                config.text = unescape(value);
                Ok(())
            } else {
                apply(&mut config, key, value.trim())
            };
            if let Err(e) = result {
                errors.push(e);
            }
        }

        (Self { config }, errors)
    }

    /// Serialize settings to `key=value` lines
    fn serialize(&self) -> String {
        let c = &self.config;
        let mut lines = vec![
            "# Neon settings".to_string(),
            format!("text={}", escape(&c.text)),
            format!("neon_color={}", c.neon_color),
        ];

        if let Some(color) = c.text_color {
            lines.push(format!("text_color={color}"));
        }
        if let Some(ref font) = c.font {
            lines.push(format!("font={font}"));
        }
        if let Some(size) = c.font_size {
            lines.push(format!("font_size={size}"));
        }
        lines.push(format!("blur_radius={}", c.blur_radius));
        lines.push(format!("stroke_width={}", c.stroke_width));
        lines.push(format!("alpha={}", c.alpha));
        lines.push(format!("letter_spacing={}", c.letter_spacing));
        lines.push(format!("animation_type={}", c.animation_type));
        lines.push(format!("animation_duration={}", c.animation_duration.as_secs()));

        lines.join("\n")
    }
}

/// Escape `\\`, newlines and carriage returns so the text stays on one line
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn number<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn positive(field: &'static str, value: &str) -> Result<f32, ConfigError> {
    let v: f32 = number(field, value)?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::NonPositive { field, value: v })
    }
}

fn apply(config: &mut NeonConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "neon_color" => config.neon_color = value.parse()?,
        "text_color" => {
            config.text_color = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(value.parse()?)
            };
        }
        "font" => config.font = (!value.is_empty()).then(|| value.to_string()),
        "font_size" => config.font_size = Some(positive("font_size", value)?),
        "blur_radius" => config.blur_radius = positive("blur_radius", value)?,
        "stroke_width" => config.stroke_width = positive("stroke_width", value)?,
        "alpha" => config.alpha = number(key, value)?,
        "letter_spacing" => config.letter_spacing = number(key, value)?,
        "animation_type" => config.animation_type = value.parse::<AnimationType>()?,
        "animation_duration" => {
            let secs: u64 = number(key, value)?;
            if secs == 0 {
                return Err(ConfigError::ZeroDuration);
            }
            config.animation_duration = Duration::from_secs(secs);
        }
        _ => {} // Ignore unknown keys
    }
    Ok(())
}
