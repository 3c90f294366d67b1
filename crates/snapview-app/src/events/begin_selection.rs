use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use snapview_types::{AppEvent, UiEvent};

use crate::state::AppState;

/// Area capture, phase one: freeze a backdrop frame and hand it to the
/// overlay. The gesture itself runs on the UI thread; phase two arrives
/// back here as `RegionSelected` or `SelectionCancelled`.
pub async fn handle_begin_selection(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let settle_delay = {
        let config = state.config.read().await;
        Duration::from_millis(config.capture.settle_delay_ms)
    };

    let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Hide)).await;
    tokio::time::sleep(settle_delay).await;

    let result = tokio::task::spawn_blocking(snapview_capture::capture_primary_screen).await;

    match result {
        Ok(Ok(backdrop)) => {
            tracing::debug!("overlay backdrop: {:?}", backdrop);
            let _ = app_to_ui_tx.send(AppEvent::ShowOverlay(backdrop)).await;
        }
        Ok(Err(e)) => {
            tracing::error!("backdrop capture failed: {e}");
            let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Show)).await;
            let _ = app_to_ui_tx
                .send(AppEvent::Warning(format!("Failed to capture screen: {e}")))
                .await;
        }
        Err(e) => {
            tracing::error!("capture task panicked: {e}");
            let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Show)).await;
            let _ = app_to_ui_tx
                .send(AppEvent::Warning("Failed to capture screen.".to_string()))
                .await;
        }
    }

    Ok(())
}
