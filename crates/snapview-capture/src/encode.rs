use anyhow::{Context, Result};
use image::ImageEncoder;
use snapview_types::CapturedImage;

/// Encode a capture as PNG for saving and for the OCR upload.
pub fn encode_png(image: &CapturedImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(
            &image.data,
            image.width,
            image.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_a_valid_png_stream() {
        let image = CapturedImage::new(2, 2, vec![255; 16]);
        let png = encode_png(&image).unwrap();

        // PNG signature
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 2));
    }
}
