//! Decoding encoded image bytes into premultiplied rasters.

use image::ImageError;

use super::buffer::{PremultipliedImage, BYTES_PER_PIXEL};

/// Decodes encoded image bytes (PNG) into a premultiplied RGBA buffer.
///
/// # Errors
/// Returns the decoder's error unchanged if the bytes are not a decodable
/// image.
pub fn decode_image(bytes: &[u8]) -> Result<PremultipliedImage, ImageError> {
    let decoded = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = decoded.dimensions();

    let mut data = decoded.into_raw();
    premultiply_alpha(&mut data);

    // RgbaImage guarantees the buffer length matches its dimensions.
    Ok(PremultipliedImage::from_raw(width, height, data).expect("RGBA buffer length"))
}

/// Scales the color channels of each pixel by its alpha, in place.
fn premultiply_alpha(data: &mut [u8]) {
    for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
        let alpha = u16::from(px[3]);
        if alpha == 255 {
            continue;
        }
        for channel in &mut px[..3] {
            *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
        }
    }
}
