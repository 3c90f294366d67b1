use std::cell::RefCell;
use std::rc::Rc;

use slint::{ComponentHandle, Weak};
use snapview_core::RegionSelector;
use snapview_types::{AppEvent, CapturedImage, UiEvent};

use crate::overlay;
use crate::{MainWindow, OverlayWindow};

pub(crate) async fn handle_events(
    event: AppEvent,
    main_weak: &Weak<MainWindow>,
    overlay_weak: &Weak<OverlayWindow>,
    selector: &Rc<RefCell<RegionSelector>>,
) {
    match event {
        AppEvent::UiEvent(UiEvent::Show) => {
            if let Some(w) = main_weak.upgrade() {
                let _ = w.show();
            }
        }
        AppEvent::UiEvent(UiEvent::Hide) => {
            if let Some(w) = main_weak.upgrade() {
                let _ = w.hide();
            }
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            if let Some(w) = overlay_weak.upgrade() {
                let _ = w.hide();
            }
            if let Some(w) = main_weak.upgrade() {
                let _ = w.hide();
            }
            slint::quit_event_loop().ok();
        }
        AppEvent::ShowOverlay(backdrop) => {
            if let Some(w) = overlay_weak.upgrade() {
                overlay::begin_selection(&w, selector, backdrop);
            }
        }
        AppEvent::ShowCapture(image) => {
            if let Some(w) = main_weak.upgrade() {
                w.set_preview(to_slint_image(&image));
                w.set_has_capture(true);
            }
        }
        AppEvent::ShowText(text) => {
            if let Some(w) = main_weak.upgrade() {
                w.set_extracted_text(text.into());
            }
        }
        AppEvent::StatusUpdate { status, capturing } => {
            tracing::debug!("[UI] status: {} (capturing: {})", status, capturing);
            if let Some(w) = main_weak.upgrade() {
                w.set_status(status.into());
            }
        }
        AppEvent::Warning(message) => {
            tracing::warn!("[UI] {}", message);
            warn_dialog(message).await;
        }
        _ => {
            // backend-bound events, ignore in the UI
        }
    }
}

fn to_slint_image(image: &CapturedImage) -> slint::Image {
    let buffer = slint::SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(
        &image.data,
        image.width,
        image.height,
    );
    slint::Image::from_rgba8(buffer)
}

async fn warn_dialog(message: String) {
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("SnapView")
        .set_description(message)
        .show()
        .await;
}
