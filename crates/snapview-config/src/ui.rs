use std::env;

use serde::{Deserialize, Serialize};

fn default_overlay_dim() -> f32 {
    0.3
}

fn default_hotkey_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Opacity of the dark veil drawn over the backdrop while selecting.
    #[serde(default = "default_overlay_dim")]
    pub overlay_dim: f32,
    /// Register Ctrl+Shift+S to start an area capture.
    #[serde(default = "default_hotkey_enabled")]
    pub capture_hotkey: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        let overlay_dim = env::var("SNAPVIEW_OVERLAY_DIM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_overlay_dim);

        Self {
            overlay_dim,
            capture_hotkey: default_hotkey_enabled(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            overlay_dim: default_overlay_dim(),
            capture_hotkey: default_hotkey_enabled(),
        }
    }
}
