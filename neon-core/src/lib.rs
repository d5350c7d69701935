//! Neon text core - configuration, animation driver and glow renderer
//!
//! Nothing in here knows about a GUI toolkit. A host mounts a [`NeonText`]
//! against its own [`FrameHost`], asks for [`NeonLayers`] every frame and
//! paints them with whatever text primitives it has.

mod color;
mod component;
mod config;
mod driver;
mod error;
mod render;
mod style;

pub use color::Rgba;
pub use component::{FrameHost, NeonText};
pub use config::{AnimationType, NeonConfig, DEFAULT_FONT_SIZE};
pub use driver::{animation_scalar, ease_in_out_sine, triangle_progress, AnimationDriver};
pub use error::ConfigError;
pub use render::{effective_radius, glow_shadows, render, NeonLayers, TextLayer, STROKE_ALPHA};
pub use style::{merge, Paint, PaintStyle, Shadow, TextStyle};
