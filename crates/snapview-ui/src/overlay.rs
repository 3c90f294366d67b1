use std::cell::RefCell;
use std::rc::Rc;

use kanal::AsyncSender;
use slint::{ComponentHandle, Weak};
use snapview_core::RegionSelector;
use snapview_types::{AppEvent, CapturedImage};

use crate::{MainWindow, OverlayWindow};

/// Hook the overlay's pointer and key callbacks up to a fresh selector.
/// Coordinates cross the boundary here: slint reports logical positions,
/// the selector and the capture primitives work in physical pixels.
pub(crate) fn wire_overlay(
    overlay: &OverlayWindow,
    main_weak: Weak<MainWindow>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> Rc<RefCell<RegionSelector>> {
    let selector = Rc::new(RefCell::new(RegionSelector::new()));

    {
        let selector = selector.clone();
        let overlay_weak = overlay.as_weak();
        overlay.on_pointer_pressed(move |x, y| {
            let Some(overlay) = overlay_weak.upgrade() else {
                return;
            };
            let scale = overlay.window().scale_factor();
            let (px, py) = to_physical(x, y, scale);
            let mut guard = selector.borrow_mut();
            guard.press(px, py);
            sync_selection_rect(&overlay, &guard, scale);
        });
    }

    {
        let selector = selector.clone();
        let overlay_weak = overlay.as_weak();
        overlay.on_pointer_moved(move |x, y| {
            let Some(overlay) = overlay_weak.upgrade() else {
                return;
            };
            let scale = overlay.window().scale_factor();
            let (px, py) = to_physical(x, y, scale);
            let mut guard = selector.borrow_mut();
            guard.drag(px, py);
            sync_selection_rect(&overlay, &guard, scale);
        });
    }

    {
        let selector = selector.clone();
        let overlay_weak = overlay.as_weak();
        let main_weak = main_weak.clone();
        let tx = ui_to_app_tx.clone();
        overlay.on_pointer_released(move |x, y| {
            let Some(overlay) = overlay_weak.upgrade() else {
                return;
            };
            let scale = overlay.window().scale_factor();
            let (px, py) = to_physical(x, y, scale);
            let finalized = selector.borrow_mut().release(px, py);

            let Some(rect) = finalized else {
                return;
            };
            close_overlay(&overlay, &main_weak);

            let region = rect.to_region();
            tracing::debug!("selection finalized: {:?}", region);
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::RegionSelected(region)).await;
            })
            .unwrap();
        });
    }

    {
        let selector = selector.clone();
        let overlay_weak = overlay.as_weak();
        overlay.on_selection_cancelled(move || {
            // Idempotent: Escape with no gesture open does nothing.
            let mut guard = selector.borrow_mut();
            if !guard.is_active() {
                return;
            }
            guard.cancel();
            drop(guard);

            if let Some(overlay) = overlay_weak.upgrade() {
                close_overlay(&overlay, &main_weak);
            }
            let tx = ui_to_app_tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::SelectionCancelled).await;
            })
            .unwrap();
        });
    }

    selector
}

/// Arm the selector and put the overlay up over the whole screen.
pub(crate) fn begin_selection(
    overlay: &OverlayWindow,
    selector: &Rc<RefCell<RegionSelector>>,
    backdrop: CapturedImage,
) {
    if !selector.borrow_mut().arm() {
        tracing::warn!("selection requested while one is already open");
        return;
    }

    let buffer = slint::SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(
        &backdrop.data,
        backdrop.width,
        backdrop.height,
    );
    overlay.set_backdrop(slint::Image::from_rgba8(buffer));
    overlay.set_selecting(false);
    overlay.window().set_fullscreen(true);
    overlay.show().ok();
}

fn close_overlay(overlay: &OverlayWindow, main_weak: &Weak<MainWindow>) {
    overlay.set_selecting(false);
    overlay.hide().ok();
    if let Some(main) = main_weak.upgrade() {
        main.show().ok();
    }
}

fn to_physical(x: f32, y: f32, scale: f32) -> (i32, i32) {
    ((x * scale).round() as i32, (y * scale).round() as i32)
}

fn sync_selection_rect(overlay: &OverlayWindow, selector: &RegionSelector, scale: f32) {
    let Some(rect) = selector.current() else {
        overlay.set_selecting(false);
        return;
    };
    overlay.set_selecting(true);
    overlay.set_sel_x(rect.x1 as f32 / scale);
    overlay.set_sel_y(rect.y1 as f32 / scale);
    overlay.set_sel_width(rect.width() as f32 / scale);
    overlay.set_sel_height(rect.height() as f32 / scale);
}
