use std::sync::Arc;

use kanal::AsyncSender;
use snapview_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Background watcher: polls the global capture hotkey and turns presses
/// into selection requests, same as clicking "Capture Selected Area".
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let hotkey_enabled = {
        let config = state.config.read().await;
        config.ui.capture_hotkey
    };

    if hotkey_enabled {
        let tx = event_tx.clone();
        let cancel_clone = cancel.clone();

        tokio::task::spawn_blocking(move || {
            let hotkey_manager = match snapview_io::HotkeyManager::new() {
                Ok(manager) => manager,
                Err(e) => {
                    tracing::error!("Failed to create capture hotkey manager: {e}");
                    return;
                }
            };

            tracing::info!("capture hotkey registered (Ctrl+Shift+S)");

            loop {
                if cancel_clone.is_cancelled() {
                    break;
                }

                if hotkey_manager.poll() {
                    tracing::info!("capture hotkey pressed");

                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Err(e) = tx.send(AppEvent::BeginSelection).await {
                            tracing::error!("Failed to send selection request: {e}");
                        }
                    });
                }

                // Sleep briefly to avoid busy loop
                std::thread::sleep(std::time::Duration::from_millis(50));
            }

            tracing::info!("capture hotkey listener stopping");
        });
    }

    cancel.cancelled().await;
    Ok(())
}
