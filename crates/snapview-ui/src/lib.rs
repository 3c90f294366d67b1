use kanal::{AsyncReceiver, AsyncSender};
use slint::ComponentHandle;
use snapview_types::{AppEvent, AppMode};

slint::include_modules!();

mod events;
mod overlay;

/// Startup values the windows need, resolved before the UI thread takes
/// over so the event loop never touches the config lock.
#[derive(Debug, Clone, Copy)]
pub struct UiOptions {
    pub mode: AppMode,
    pub overlay_dim: f32,
}

/// Runs the slint event loop until the app quits. Must be called on the
/// main thread; the backend talks to it only through the channel pair.
pub fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    options: UiOptions,
) -> anyhow::Result<()> {
    let main_window = MainWindow::new()?;
    let overlay = OverlayWindow::new()?;

    main_window.set_reader_mode(matches!(options.mode, AppMode::Reader));
    overlay.set_dim(options.overlay_dim);

    let selector = overlay::wire_overlay(&overlay, main_window.as_weak(), ui_to_app_tx.clone());
    wire_main_window(&main_window, &ui_to_app_tx);

    // Pump backend events into the windows.
    {
        let main_weak = main_window.as_weak();
        let overlay_weak = overlay.as_weak();
        let selector = selector.clone();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                events::handle_events(event, &main_weak, &overlay_weak, &selector).await;
            }
        })
        .unwrap();
    }

    main_window.show()?;
    slint::run_event_loop()?;
    Ok(())
}

fn wire_main_window(window: &MainWindow, ui_to_app_tx: &AsyncSender<AppEvent>) {
    {
        let tx = ui_to_app_tx.clone();
        window.on_capture_full(move || {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::CaptureFullScreen).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_capture_area(move || {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::BeginSelection).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_save_image(move || {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::SaveImage).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_copy_image(move || {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::CopyImage).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        window.on_extract_text(move || {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::ExtractText).await;
            })
            .unwrap();
        });
    }

    {
        let tx = ui_to_app_tx.clone();
        let weak = window.as_weak();
        window.on_copy_text(move || {
            let Some(w) = weak.upgrade() else { return };
            let text = w.get_extracted_text().to_string();
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::CopyText(text)).await;
            })
            .unwrap();
        });
    }
}
