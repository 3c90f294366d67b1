use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use snapview_ocr::OcrClient;
use snapview_types::{AppEvent, AppMode};

use crate::state::AppState;

pub mod begin_selection;
pub mod capture_full;
pub mod capture_region;
pub mod copy_image;
pub mod copy_text;
pub mod extract_text;
pub mod save_image;

use begin_selection::handle_begin_selection;
use capture_full::handle_full_capture;
use capture_region::handle_region_capture;
use copy_image::handle_image_copy;
use copy_text::handle_text_copy;
use extract_text::handle_text_extract;
use save_image::handle_save;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    mode: AppMode,
) -> anyhow::Result<()> {
    // Initialize the OCR client once; handlers borrow it.
    let ocr_client = {
        let config = state.config.read().await;
        if config.ocr.enabled {
            Some(OcrClient::new(
                config.ocr.api_url.clone(),
                config.ocr.api_key.clone(),
            ))
        } else {
            None
        }
    };

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        handle_events(state.clone(), ocr_client.as_ref(), &app_to_ui_tx, mode, event).await?;
    }
}

pub(crate) async fn handle_events(
    state: Arc<AppState>,
    ocr_client: Option<&OcrClient>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    mode: AppMode,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::CaptureFullScreen => {
            let captured = handle_full_capture(state.clone(), app_to_ui_tx).await?;

            // The reader runs text extraction right after a full capture.
            if captured && mode == AppMode::Reader {
                if let Some(client) = ocr_client {
                    handle_text_extract(state, client, app_to_ui_tx).await?;
                }
            }
        }
        AppEvent::BeginSelection => {
            handle_begin_selection(state, app_to_ui_tx).await?;
        }
        AppEvent::RegionSelected(region) => {
            handle_region_capture(state, region, app_to_ui_tx).await?;
        }
        AppEvent::SelectionCancelled => {
            tracing::debug!("selection cancelled");
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Selection cancelled".to_string(),
                    capturing: false,
                })
                .await;
        }
        AppEvent::SaveImage => {
            handle_save(state, app_to_ui_tx).await?;
        }
        AppEvent::CopyImage => {
            handle_image_copy(state, app_to_ui_tx).await?;
        }
        AppEvent::ExtractText => {
            if let Some(client) = ocr_client {
                handle_text_extract(state, client, app_to_ui_tx).await?;
            } else {
                let _ = app_to_ui_tx
                    .send(AppEvent::Warning(
                        "Text extraction is disabled.".to_string(),
                    ))
                    .await;
            }
        }
        AppEvent::CopyText(text) => {
            handle_text_copy(text, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(_)
        | AppEvent::ShowOverlay(_)
        | AppEvent::ShowCapture(_)
        | AppEvent::ShowText(_)
        | AppEvent::StatusUpdate { .. }
        | AppEvent::Warning(_) => {
            // UI-bound events, nothing to do in the backend
        }
    }

    Ok(())
}
