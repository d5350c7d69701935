use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use neon_core::FrameHost;

/// Frame host backed by egui's repaint requests.
///
/// egui only repaints on input unless asked, so animated texts hold a
/// subscription and the app calls [`EguiFrameHost::request_frame_if_active`]
/// once per frame. With no subscribers no further frames are requested.
#[derive(Debug, Clone, Default)]
pub struct EguiFrameHost {
    subscribers: Arc<AtomicUsize>,
}

/// Keeps frames coming while alive
#[derive(Debug)]
pub struct FrameSubscription {
    subscribers: Arc<AtomicUsize>,
}

impl Drop for FrameSubscription {
    fn drop(&mut self) {
        self.subscribers.fetch_sub(1, Ordering::AcqRel);
    }
}

impl EguiFrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.load(Ordering::Acquire)
    }

    pub fn is_active(&self) -> bool {
        self.subscriber_count() > 0
    }

    /// Ask egui for the next display frame if anything is animating
    pub fn request_frame_if_active(&self, ctx: &egui::Context) -> bool {
        let active = self.is_active();
        if active {
            ctx.request_repaint();
        }
        active
    }
}

impl FrameHost for EguiFrameHost {
    type Subscription = FrameSubscription;

    fn subscribe(&mut self) -> FrameSubscription {
        self.subscribers.fetch_add(1, Ordering::AcqRel);
        FrameSubscription {
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use neon_core::{AnimationType, NeonConfig, NeonText, Rgba};

    use super::*;

    #[test]
    fn test_subscriptions_are_counted() {
        let mut host = EguiFrameHost::new();
        assert!(!host.is_active());

        let a = host.subscribe();
        let b = host.subscribe();
        assert_eq!(host.subscriber_count(), 2);

        drop(a);
        assert_eq!(host.subscriber_count(), 1);
        drop(b);
        assert!(!host.is_active());
    }

    #[test]
    fn test_static_text_leaves_host_idle() {
        let mut host = EguiFrameHost::new();
        let config = NeonConfig::new("Static", Rgba::PINK).with_animation(AnimationType::None);
        let _text = NeonText::mount(&mut host, config, Instant::now());
        assert!(!host.is_active());
    }

    #[test]
    fn test_teardown_idles_host() {
        let mut host = EguiFrameHost::new();
        let config = NeonConfig::new("Glow", Rgba::CYAN);
        let mut text = NeonText::mount(&mut host, config, Instant::now());
        assert!(host.is_active());

        text.teardown();
        assert!(!host.is_active());
    }
}
