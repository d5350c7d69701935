mod neon_text;

pub use neon_text::{layout, paint_layers, resolve_family, NeonTextWidget};
