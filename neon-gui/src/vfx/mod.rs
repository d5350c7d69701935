mod blur;

pub use blur::{BlurKernel, GLOW_GAIN, MAX_SAMPLES};
