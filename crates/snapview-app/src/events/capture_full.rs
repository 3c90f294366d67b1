use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use snapview_types::{AppEvent, UiEvent};

use crate::state::AppState;

/// Full-screen capture: hide the window, wait for it to leave the screen,
/// grab the frame, restore. Returns whether a new capture was stored.
pub async fn handle_full_capture(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<bool> {
    let settle_delay = {
        let config = state.config.read().await;
        Duration::from_millis(config.capture.settle_delay_ms)
    };

    let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Hide)).await;
    tokio::time::sleep(settle_delay).await;

    let result = tokio::task::spawn_blocking(snapview_capture::capture_primary_screen).await;

    let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Show)).await;

    match result {
        Ok(Ok(image)) => {
            tracing::debug!("full capture: {:?}", image);

            state.session.replace(image.clone()).await;
            let _ = app_to_ui_tx.send(AppEvent::ShowCapture(image)).await;
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Full screen captured".to_string(),
                    capturing: false,
                })
                .await;
            Ok(true)
        }
        Ok(Err(e)) => {
            tracing::error!("full capture failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning(format!("Failed to capture screen: {e}")))
                .await;
            Ok(false)
        }
        Err(e) => {
            tracing::error!("capture task panicked: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning("Failed to capture screen.".to_string()))
                .await;
            Ok(false)
        }
    }
}
