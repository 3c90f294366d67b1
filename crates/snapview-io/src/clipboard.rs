use anyhow::Result;
use arboard::{Clipboard, ImageData};
use snapview_types::CapturedImage;

/// Put a capture on the system clipboard. arboard converts the raw RGBA
/// buffer to whatever bitmap form the platform clipboard wants (CF_DIB on
/// Windows).
pub fn copy_image(image: &CapturedImage) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_image(ImageData {
        width: image.width as usize,
        height: image.height as usize,
        bytes: image.data.as_slice().into(),
    })?;
    Ok(())
}

pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
