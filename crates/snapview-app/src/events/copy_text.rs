use kanal::AsyncSender;
use snapview_types::AppEvent;

pub async fn handle_text_copy(
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = text.trim().to_string();

    let result = tokio::task::spawn_blocking(move || snapview_io::clipboard::copy_text(&text)).await;

    match result {
        Ok(Ok(())) => {
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Text copied to clipboard".to_string(),
                    capturing: false,
                })
                .await;
        }
        Ok(Err(e)) => {
            tracing::error!("text copy failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning(format!("Failed to copy text: {e}")))
                .await;
        }
        Err(e) => {
            tracing::error!("clipboard task panicked: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::Warning("Failed to copy text.".to_string()))
                .await;
        }
    }

    Ok(())
}
