use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use snapview_config::Config;
use snapview_types::{AppEvent, AppMode, UiEvent};
use snapview_ui::UiOptions;
use tokio::task::JoinSet;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;

#[cfg(test)]
mod tests;

use controller::AppController;
use state::AppState;

/// Bring the whole app up: backend tasks on a tokio runtime, the slint
/// event loop on the calling (main) thread.
pub fn run(mode: AppMode) -> anyhow::Result<()> {
    let config = Config::new();
    let ui_options = UiOptions {
        mode,
        overlay_dim: config.ui.overlay_dim,
    };

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, mode);
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let tasks = {
        let _guard = runtime.enter();
        controller.spawn_tasks()
    };

    // Ask the UI to close when a backend task dies or ctrl-c arrives.
    runtime.spawn(supervise(tasks, controller.ui_sender()));

    let result = snapview_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, ui_options);

    controller.shutdown();
    runtime.shutdown_timeout(Duration::from_secs(2));
    result
}

async fn supervise(mut tasks: JoinSet<anyhow::Result<()>>, app_to_ui_tx: AsyncSender<AppEvent>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("backend task exited"),
                Some(Ok(Err(e))) => tracing::error!("backend task failed: {e}"),
                Some(Err(e)) => tracing::error!("backend task panicked: {e}"),
                None => {}
            }
        }
    }

    let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
}
