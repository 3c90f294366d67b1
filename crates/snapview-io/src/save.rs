use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use snapview_types::CapturedImage;

/// Prompt for a destination and write the capture as PNG. `None` means the
/// user dismissed the dialog.
pub async fn save_png_with_dialog(image: &CapturedImage) -> Result<Option<PathBuf>> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .add_filter("PNG", &["png"])
        .set_file_name("capture.png")
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    write_png(&path, image)?;
    tracing::info!("saved capture to {}", path.display());
    Ok(Some(path))
}

pub fn write_png(path: &Path, image: &CapturedImage) -> Result<()> {
    image::save_buffer_with_format(
        path,
        &image.data,
        image.width,
        image.height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.png");
        let image = CapturedImage::new(3, 2, vec![128; 24]);

        write_png(&path, &image).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }
}
