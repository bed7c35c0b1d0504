use std::fs;
use std::io::Cursor;
use std::path::Path;

/// The test pattern pixel at `(x, y)`: fully opaque so premultiplication
/// leaves the channels untouched and extraction can be checked
/// pixel-for-pixel against this function.
pub fn atlas_pixel(x: u32, y: u32) -> [u8; 4] {
    [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255]
}

/// PNG-encoded atlas filled with the [`atlas_pixel`] pattern.
pub fn atlas_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| image::Rgba(atlas_pixel(x, y)));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode atlas png");
    bytes
}

#[allow(dead_code)]
pub fn write_atlas_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, atlas_png(width, height)).expect("write atlas png");
}
