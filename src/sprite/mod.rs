//! Sprite index parsing and rectangle extraction.
//!
//! A sprite atlas ships as two artifacts: a packed raster image and a JSON
//! index mapping each sprite name to the rectangle its icon occupies.
//! [`parse_sprite_index`] decodes the image, walks the index, and returns a
//! name-keyed collection of independently owned [`SpriteImage`]s.
//!
//! Failure handling is two-level by design: malformed JSON, a non-object
//! root, or an undecodable image abort the whole parse; a single bad entry
//! (wrong field type, out-of-bounds rectangle) is dropped and recorded in
//! the caller's [`ParseReport`] without affecting the other entries.
//!
//! # Example
//!
//! ```
//! use spritepack::sprite::{parse_sprite_index, ParseReport};
//!
//! // A 2x2 opaque red atlas, PNG-encoded.
//! let mut png = Vec::new();
//! image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]))
//!     .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
//!     .unwrap();
//!
//! let index = r#"{"dot": {"x": 0, "y": 0, "width": 2, "height": 2}}"#;
//!
//! let mut report = ParseReport::new();
//! let sprites = parse_sprite_index(&png, index, &mut report).unwrap();
//!
//! assert_eq!(sprites["dot"].width(), 2);
//! assert!(report.is_clean());
//! ```

mod extract;
mod model;
mod parser;
mod report;

// Re-export core types for convenient access
pub use extract::{extract_sprite, MAX_PIXEL_RATIO, MAX_SPRITE_DIMENSION};
pub use model::{SpriteImage, SpriteRect, Sprites};
pub use parser::parse_sprite_index;
pub use report::{IssueCode, IssueContext, ParseIssue, ParseReport, Severity};
