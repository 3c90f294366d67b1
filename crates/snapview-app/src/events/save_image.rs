use std::sync::Arc;

use kanal::AsyncSender;
use snapview_types::AppEvent;

use crate::state::AppState;

/// Save the session capture as PNG. Asking with nothing captured is a
/// warning, not an error, and writes no file.
pub async fn handle_save(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(image) = state.session.snapshot().await else {
        let _ = app_to_ui_tx
            .send(AppEvent::Warning("No image to save.".to_string()))
            .await;
        return Ok(());
    };

    match snapview_io::save::save_png_with_dialog(&image).await {
        Ok(Some(path)) => {
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: format!("Saved {}", path.display()),
                    capturing: false,
                })
                .await;
        }
        Ok(None) => {
            tracing::debug!("save dialog dismissed");
        }
        Err(e) => {
            tracing::error!("save failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning(format!("Failed to save image: {e}")))
                .await;
        }
    }

    Ok(())
}
