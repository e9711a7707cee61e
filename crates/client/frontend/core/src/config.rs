//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Game ticks per second driven by the frontend loop.
    pub tick_rate: u32,
    pub messages: MessageConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            tick_rate: Self::DEFAULT_TICK_RATE,
            messages: MessageConfig::default(),
        }
    }
}

impl FrontendConfig {
    pub const DEFAULT_TICK_RATE: u32 = 60;

    pub const fn new(tick_rate: u32, messages: MessageConfig) -> Self {
        Self {
            tick_rate,
            messages,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CVD_TICK_RATE` - Ticks per second (default: 60, clamped to 1..=240)
    /// - `CVD_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `CVD_SHOW_ANIMATION_MESSAGES` - Log action/death animation endings (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rate) = read_env::<u32>("CVD_TICK_RATE") {
            config.tick_rate = rate.clamp(1, 240);
        }

        if let Some(capacity) = read_env::<usize>("CVD_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(show) = read_env_bool("CVD_SHOW_ANIMATION_MESSAGES") {
            config.messages.show_animation = show;
        }

        config
    }

    /// Wall-clock length of one tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Whether "animation finished" events produce log lines.
    pub show_animation: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_animation: false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment value");
            None
        }
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        other => {
            tracing::warn!(key, value = other, "ignoring unparsable boolean");
            None
        }
    }
}
