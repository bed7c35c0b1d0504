//! Fuzz target for sprite index JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the index parser against a
//! fixed valid atlas, checking for panics, buffer overflows, or other
//! undefined behavior.
//!
//! Run with:
//!   cargo +nightly fuzz run sprite_index_parse
//!
//! Or with a corpus:
//!   cargo +nightly fuzz run sprite_index_parse fuzz/corpus/sprite_index_parse/

#![no_main]

use libfuzzer_sys::fuzz_target;
use spritepack::sprite::{parse_sprite_index, ParseReport};
use std::sync::OnceLock;

static ATLAS: OnceLock<Vec<u8>> = OnceLock::new();

/// A 16x16 opaque atlas, encoded once.
fn atlas_png() -> &'static [u8] {
    ATLAS.get_or_init(|| {
        let img = image::RgbaImage::from_pixel(16, 16, image::Rgba([8, 16, 32, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .expect("encode fuzz atlas");
        bytes
    })
}

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 1MB is generous for sprite index files.
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(index) = std::str::from_utf8(data) else {
        return;
    };

    // Try to parse the data. We don't care about errors—
    // we only care about panics, crashes, or hangs.
    let mut report = ParseReport::new();
    let _ = parse_sprite_index(atlas_png(), index, &mut report);
});
