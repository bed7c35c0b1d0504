//! Rectangle extraction from a decoded atlas.

use crate::raster::{PremultipliedImage, BYTES_PER_PIXEL};

use super::model::{SpriteImage, SpriteRect};
use super::report::{IssueCode, IssueContext, ParseIssue, ParseReport};

/// Largest accepted sprite edge, in pixels. A policy constant, not derived
/// from the atlas size: it caps what a corrupted index can make us allocate.
pub const MAX_SPRITE_DIMENSION: u32 = 1024;

/// Largest accepted display scale factor.
pub const MAX_PIXEL_RATIO: f64 = 10.0;

/// Crops `rect` out of `atlas` into an independently owned [`SpriteImage`].
///
/// Validation runs in a fixed order — width, height, pixel ratio, x bounds,
/// y bounds — and the first failure wins: it records one `Severity::Error`
/// issue under `context` naming the offending value, and returns `None`.
/// On success the sprite's buffer is a fresh allocation; the atlas is only
/// read.
pub fn extract_sprite(
    atlas: &PremultipliedImage,
    rect: &SpriteRect,
    context: IssueContext,
    report: &mut ParseReport,
) -> Option<SpriteImage> {
    let x = u32::from(rect.x);
    let y = u32::from(rect.y);
    let width = u32::from(rect.width);
    let height = u32::from(rect.height);

    let invalid = if width == 0 || width > MAX_SPRITE_DIMENSION {
        Some((
            IssueCode::InvalidSpriteWidth,
            format!("invalid width: {}", width),
        ))
    } else if height == 0 || height > MAX_SPRITE_DIMENSION {
        Some((
            IssueCode::InvalidSpriteHeight,
            format!("invalid height: {}", height),
        ))
    } else if !(rect.pixel_ratio > 0.0 && rect.pixel_ratio <= MAX_PIXEL_RATIO) {
        Some((
            IssueCode::InvalidPixelRatio,
            format!("invalid pixelRatio: {}", rect.pixel_ratio),
        ))
    } else if x >= atlas.width() || x + width > atlas.width() {
        Some((
            IssueCode::SpriteOutOfBoundsX,
            format!(
                "atlas width {} cannot fit x {} plus width {}",
                atlas.width(),
                x,
                width
            ),
        ))
    } else if y >= atlas.height() || y + height > atlas.height() {
        Some((
            IssueCode::SpriteOutOfBoundsY,
            format!(
                "atlas height {} cannot fit y {} plus height {}",
                atlas.height(),
                y,
                height
            ),
        ))
    } else {
        None
    };

    if let Some((code, message)) = invalid {
        report.add(ParseIssue::error(code, message, context));
        return None;
    }

    // Source and destination are distinct buffers, so each row is one
    // disjoint contiguous copy.
    let mut cropped = PremultipliedImage::new(width, height);
    let start = x as usize * BYTES_PER_PIXEL;
    let end = start + width as usize * BYTES_PER_PIXEL;
    for dy in 0..height {
        cropped
            .row_mut(dy)
            .copy_from_slice(&atlas.row(y + dy)[start..end]);
    }

    Some(SpriteImage::new(cropped, rect.pixel_ratio, rect.sdf))
}
