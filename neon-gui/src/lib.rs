mod host;
pub mod theme;
pub mod widgets;
pub mod vfx;

pub use host::{EguiFrameHost, FrameSubscription};
pub use theme::{to_color32, NeonTheme};
pub use widgets::{paint_layers, NeonTextWidget};
