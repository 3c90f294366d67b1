use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use snapview_config::Config;
use snapview_types::{AppEvent, AppMode, CaptureRegion, CapturedImage};
use tokio::time::timeout;

use crate::events;
use crate::state::AppState;

fn empty_state() -> Arc<AppState> {
    Arc::new(AppState::new(Config::default()))
}

async fn recv(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

#[tokio::test]
async fn save_without_capture_warns_and_writes_nothing() {
    let state = empty_state();
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    events::save_image::handle_save(state.clone(), &tx)
        .await
        .unwrap();

    match recv(&rx).await {
        AppEvent::Warning(message) => assert_eq!(message, "No image to save."),
        other => panic!("expected warning, got {:?}", other),
    }
    assert!(state.session.is_empty().await);
}

#[tokio::test]
async fn copy_without_capture_warns() {
    let state = empty_state();
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    events::copy_image::handle_image_copy(state.clone(), &tx)
        .await
        .unwrap();

    match recv(&rx).await {
        AppEvent::Warning(message) => assert_eq!(message, "No image to copy."),
        other => panic!("expected warning, got {:?}", other),
    }
    assert!(state.session.is_empty().await);
}

#[tokio::test]
async fn extract_without_capture_warns_before_any_request() {
    let state = empty_state();
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    // Deliberately unreachable endpoint: the handler must bail out before
    // ever talking to it.
    let client = snapview_ocr::OcrClient::new("http://127.0.0.1:9".to_string(), String::new());

    events::extract_text::handle_text_extract(state, &client, &tx)
        .await
        .unwrap();

    match recv(&rx).await {
        AppEvent::Warning(message) => assert_eq!(message, "No image to extract text from."),
        other => panic!("expected warning, got {:?}", other),
    }
}

#[tokio::test]
async fn cancelled_selection_reports_status_and_stores_nothing() {
    let state = empty_state();
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    events::handle_events(
        state.clone(),
        None,
        &tx,
        AppMode::Capture,
        AppEvent::SelectionCancelled,
    )
    .await
    .unwrap();

    match recv(&rx).await {
        AppEvent::StatusUpdate { status, capturing } => {
            assert_eq!(status, "Selection cancelled");
            assert!(!capturing);
        }
        other => panic!("expected status update, got {:?}", other),
    }
    assert!(state.session.is_empty().await);
}

#[tokio::test]
async fn cancellation_leaves_a_previous_capture_untouched() {
    let state = empty_state();
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let existing = CapturedImage::new(2, 2, vec![9; 16]);
    state.session.replace(existing.clone()).await;

    events::handle_events(
        state.clone(),
        None,
        &tx,
        AppMode::Capture,
        AppEvent::SelectionCancelled,
    )
    .await
    .unwrap();

    let _ = recv(&rx).await;
    assert_eq!(state.session.snapshot().await, Some(existing));
}

#[tokio::test]
async fn region_request_from_sync_context_reaches_the_backend() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    // UI callbacks are sync; they hand events over via a spawned task.
    let button_click = move || {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::RegionSelected(CaptureRegion {
                x: 100,
                y: 200,
                width: 300,
                height: 400,
            }))
            .await
            .expect("send failed");
        });
    };

    button_click();

    match recv(&rx).await {
        AppEvent::RegionSelected(region) => {
            assert_eq!(region.x, 100);
            assert_eq!(region.y, 200);
            assert_eq!(region.width, 300);
            assert_eq!(region.height, 400);
        }
        other => panic!("expected region, got {:?}", other),
    }
}

#[tokio::test]
async fn spawn_blocking_result_flows_back_to_the_channel() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    tokio::task::spawn_blocking(move || {
        tx.try_send(AppEvent::CopyText("from blocking".to_string()))
            .unwrap();
    })
    .await
    .unwrap();

    match recv(&rx).await {
        AppEvent::CopyText(text) => assert_eq!(text, "from blocking"),
        other => panic!("expected text, got {:?}", other),
    }
}
