use std::env;

use serde::{Deserialize, Serialize};

fn default_settle_delay_ms() -> u64 {
    200
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CaptureConfig {
    /// Pause between hiding the main window and grabbing the frame, so the
    /// window is gone from the screen by the time the capture runs.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl CaptureConfig {
    pub fn new() -> Self {
        let settle_delay_ms = env::var("SNAPVIEW_SETTLE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_settle_delay_ms);

        Self { settle_delay_ms }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}
