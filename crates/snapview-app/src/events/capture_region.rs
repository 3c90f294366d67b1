use std::sync::Arc;

use kanal::AsyncSender;
use snapview_types::{AppEvent, CaptureRegion};

use crate::state::AppState;

/// Area capture, phase two: the overlay finished a gesture; grab the
/// selected region and make it the session capture.
pub async fn handle_region_capture(
    state: Arc<AppState>,
    region: CaptureRegion,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let result =
        tokio::task::spawn_blocking(move || snapview_capture::capture_screen_region(region)).await;

    match result {
        Ok(Ok(image)) => {
            tracing::debug!("region capture: {:?}", image);

            state.session.replace(image.clone()).await;
            let _ = app_to_ui_tx.send(AppEvent::ShowCapture(image)).await;
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Area captured".to_string(),
                    capturing: false,
                })
                .await;
        }
        Ok(Err(e)) => {
            tracing::error!("region capture failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning(format!("Failed to capture region: {e}")))
                .await;
        }
        Err(e) => {
            tracing::error!("capture task panicked: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning("Failed to capture region.".to_string()))
                .await;
        }
    }

    Ok(())
}
