use std::sync::Arc;

use kanal::AsyncSender;
use snapview_ocr::OcrClient;
use snapview_types::AppEvent;

use crate::state::AppState;

/// Send the session capture to the OCR service and show whatever comes
/// back. The client maps every failure to a placeholder string, so the
/// result area always ends up with something readable.
pub async fn handle_text_extract(
    state: Arc<AppState>,
    client: &OcrClient,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(image) = state.session.snapshot().await else {
        let _ = app_to_ui_tx
            .send(AppEvent::Warning(
                "No image to extract text from.".to_string(),
            ))
            .await;
        return Ok(());
    };

    let language = {
        let config = state.config.read().await;
        config.ocr.language.clone()
    };

    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: "Extracting text...".to_string(),
            capturing: true,
        })
        .await;

    let encoded = tokio::task::spawn_blocking(move || snapview_capture::encode_png(&image)).await;

    let png = match encoded {
        Ok(Ok(png)) => png,
        Ok(Err(e)) => {
            tracing::error!("PNG encode failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning(format!("Failed to encode image: {e}")))
                .await;
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Ready".to_string(),
                    capturing: false,
                })
                .await;
            return Ok(());
        }
        Err(e) => {
            tracing::error!("encode task panicked: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning("Failed to encode image.".to_string()))
                .await;
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Ready".to_string(),
                    capturing: false,
                })
                .await;
            return Ok(());
        }
    };

    let text = client.parse_image(png, &language).await;
    tracing::debug!("OCR returned {} chars", text.len());

    let _ = app_to_ui_tx.send(AppEvent::ShowText(text)).await;
    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: "Ready".to_string(),
            capturing: false,
        })
        .await;

    Ok(())
}
