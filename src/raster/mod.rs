//! Decoded pixel buffers and the image decoding boundary.
//!
//! Everything downstream of this module works on [`PremultipliedImage`], an
//! owned RGBA8 buffer with premultiplied alpha. [`decode_image`] is the only
//! place encoded bytes are turned into pixels; the sprite parser treats it
//! as a black box and passes its errors through untouched.

mod buffer;
mod decode;

pub use buffer::{PremultipliedImage, BYTES_PER_PIXEL};
pub use decode::decode_image;
