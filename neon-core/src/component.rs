//! Mount / update / teardown of a neon text against a host frame loop

use std::time::Instant;

use tracing::debug;

use crate::config::NeonConfig;
use crate::driver::{animation_scalar, AnimationDriver};
use crate::render::{render, NeonLayers};

/// The host side of the display loop.
///
/// A subscription asks the host for a callback every display frame. Dropping
/// it must release whatever the host allocated for it.
pub trait FrameHost {
    type Subscription;

    fn subscribe(&mut self) -> Self::Subscription;
}

/// One neon text instance.
///
/// Holds a frame subscription and a driver only while the configuration is
/// animated. Dropping the component releases both.
pub struct NeonText<H: FrameHost> {
    config: NeonConfig,
    driver: Option<AnimationDriver>,
    subscription: Option<H::Subscription>,
}

impl<H: FrameHost> NeonText<H> {
    pub fn mount(host: &mut H, config: NeonConfig, now: Instant) -> Self {
        let mut text = Self {
            config,
            driver: None,
            subscription: None,
        };
        text.start(host, now);
        text
    }

    /// Replace the configuration.
    ///
    /// Switching to static stops the driver before returning; switching the
    /// animation type or duration restarts the cycle from zero.
    pub fn update(&mut self, host: &mut H, config: NeonConfig, now: Instant) {
        let old = std::mem::replace(&mut self.config, config);

        if !self.config.animation_type.is_animated() {
            self.stop();
            return;
        }

        let restart = self.driver.is_none()
            || old.animation_type != self.config.animation_type
            || old.animation_duration != self.config.animation_duration;
        if restart {
            self.start(host, now);
        }
    }

    /// Stop animating and release the frame subscription. Idempotent.
    pub fn teardown(&mut self) {
        self.stop();
    }

    pub fn config(&self) -> &NeonConfig {
        &self.config
    }

    /// True while holding a frame subscription
    pub fn is_animating(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn driver(&self) -> Option<&AnimationDriver> {
        self.driver.as_ref()
    }

    pub fn scalar(&self, now: Instant) -> f32 {
        animation_scalar(self.driver.as_ref(), now)
    }

    /// Layers to paint for the frame at `now`
    pub fn layers(&self, now: Instant) -> NeonLayers {
        render(&self.config, self.scalar(now))
    }

    fn start(&mut self, host: &mut H, now: Instant) {
        let config = &self.config;
        self.driver = AnimationDriver::start(config.animation_type, config.animation_duration, now);
        if self.driver.is_none() {
            self.subscription = None;
            return;
        }
        if self.subscription.is_none() {
            self.subscription = Some(host.subscribe());
        }
        debug!(
            text = %config.text,
            animation = %config.animation_type,
            duration = ?config.animation_duration,
            "neon animation started"
        );
    }

    fn stop(&mut self) {
        if self.driver.take().is_some() || self.subscription.is_some() {
            debug!(text = %self.config.text, "neon animation stopped");
        }
        self.subscription = None;
    }
}
