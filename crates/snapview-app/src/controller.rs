use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snapview_types::{AppEvent, AppMode};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // capture frames ride this one
            ui_to_app: kanal::bounded_async(64),  // UI interactions
        }
    }
}

/// Spawns and supervises the backend tasks. The UI loop itself stays on
/// the main thread and borrows its channel ends from here.
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    mode: AppMode,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, mode: AppMode) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            mode,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Channel ends for the UI loop: backend events in, user intents out.
    pub fn ui_channels(&self) -> (AsyncReceiver<AppEvent>, AsyncSender<AppEvent>) {
        (
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        )
    }

    /// Sender for pushing events at the UI from outside the event loop.
    pub fn ui_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.app_to_ui.0.clone()
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.mode,
        ));

        // Hotkey watcher
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
