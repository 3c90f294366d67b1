use std::sync::Arc;

use kanal::AsyncSender;
use snapview_types::AppEvent;

use crate::state::AppState;

pub async fn handle_image_copy(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(image) = state.session.snapshot().await else {
        let _ = app_to_ui_tx
            .send(AppEvent::Warning("No image to copy.".to_string()))
            .await;
        return Ok(());
    };

    // Clipboard access can stall; keep it off the event loop.
    let result =
        tokio::task::spawn_blocking(move || snapview_io::clipboard::copy_image(&image)).await;

    match result {
        Ok(Ok(())) => {
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Image copied to clipboard".to_string(),
                    capturing: false,
                })
                .await;
        }
        Ok(Err(e)) => {
            tracing::error!("image copy failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning(format!("Failed to copy image: {e}")))
                .await;
        }
        Err(e) => {
            tracing::error!("clipboard task panicked: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning("Failed to copy image.".to_string()))
                .await;
        }
    }

    Ok(())
}
