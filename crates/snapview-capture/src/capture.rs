use anyhow::{Context, Result};
use snapview_types::{CaptureRegion, CapturedImage};
use xcap::Monitor;

/// Capture the entire primary monitor as raw RGBA.
pub fn capture_primary_screen() -> Result<CapturedImage> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors.first().context("No monitor found")?;

    let image = monitor.capture_image().context("Failed to capture screen")?;
    Ok(CapturedImage::new(
        image.width(),
        image.height(),
        image.into_raw(),
    ))
}

/// Capture a region of the screen. The monitor containing the region is
/// captured and cropped; regions that fit no monitor fall back to the
/// primary one.
pub fn capture_screen_region(region: CaptureRegion) -> Result<CapturedImage> {
    let monitors = Monitor::all().context("Failed to get monitors")?;

    let monitor = monitors
        .iter()
        .find(|m| {
            region.x >= m.x()
                && region.y >= m.y()
                && region.x + region.width as i32 <= m.x() + m.width() as i32
                && region.y + region.height as i32 <= m.y() + m.height() as i32
        })
        .or(monitors.first())
        .context("No monitor found")?;

    tracing::debug!(
        "capturing {}x{} at ({}, {})",
        region.width,
        region.height,
        region.x,
        region.y
    );

    let image = monitor.capture_image().context("Failed to capture screen")?;

    let cropped = xcap::image::imageops::crop_imm(
        &image,
        (region.x - monitor.x()).max(0) as u32,
        (region.y - monitor.y()).max(0) as u32,
        region.width,
        region.height,
    )
    .to_image();

    Ok(CapturedImage::new(
        cropped.width(),
        cropped.height(),
        cropped.into_raw(),
    ))
}
