use std::sync::Arc;

use snapview_config::Config;
use snapview_core::CaptureSession;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// The one capture this session remembers.
    pub session: CaptureSession,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: CaptureSession::new(),
        }
    }
}
