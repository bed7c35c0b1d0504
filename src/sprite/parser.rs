//! Sprite index parsing: atlas bytes + JSON document → named sprites.

use serde_json::{Map, Value};

use crate::error::SpriteIndexError;
use crate::raster::decode_image;

use super::extract::extract_sprite;
use super::model::{SpriteRect, Sprites};
use super::report::{IssueCode, IssueContext, ParseIssue, ParseReport};

/// Parses a sprite atlas: decodes `atlas_bytes`, walks the members of the
/// JSON object in `index_json`, and extracts one sprite per valid member.
///
/// Exactly three failures are fatal: an undecodable image, malformed JSON,
/// and a non-object root. Everything else degrades per entry — a member
/// whose value is not an object is skipped silently, a wrongly typed field
/// falls back to its default with a warning, and a rectangle the extractor
/// rejects drops that one sprite with an error in `report`. A member whose
/// name repeats an earlier one overwrites it.
///
/// # Errors
/// Returns [`SpriteIndexError`] for the three document-level failures; the
/// returned collection is never partial-with-error.
pub fn parse_sprite_index(
    atlas_bytes: &[u8],
    index_json: &str,
    report: &mut ParseReport,
) -> Result<Sprites, SpriteIndexError> {
    let atlas = decode_image(atlas_bytes)?;

    let root: Value =
        serde_json::from_str(index_json).map_err(|source| SpriteIndexError::IndexSyntax {
            offset: syntax_error_offset(index_json, &source),
            source,
        })?;
    let members = root
        .as_object()
        .ok_or(SpriteIndexError::IndexRootNotObject)?;

    let mut sprites = Sprites::new();
    for (name, value) in members {
        // Members whose value is not an object are not sprite entries.
        let Some(entry) = value.as_object() else {
            continue;
        };

        let rect = SpriteRect {
            x: get_u16(entry, "x", 0, name, report),
            y: get_u16(entry, "y", 0, name, report),
            width: get_u16(entry, "width", 0, name, report),
            height: get_u16(entry, "height", 0, name, report),
            pixel_ratio: get_f64(entry, "pixelRatio", 1.0, name, report),
            sdf: get_bool(entry, "sdf", false, name, report),
        };

        let context = IssueContext::Sprite { name: name.clone() };
        if let Some(sprite) = extract_sprite(&atlas, &rect, context, report) {
            sprites.insert(name.clone(), sprite);
        }
    }

    Ok(sprites)
}

/// Converts serde_json's line/column error position back to a byte offset
/// within `text`.
fn syntax_error_offset(text: &str, error: &serde_json::Error) -> usize {
    let line = error.line().saturating_sub(1);
    let column = error.column().saturating_sub(1);

    let mut offset = 0;
    for (index, contents) in text.split('\n').enumerate() {
        if index == line {
            return offset + column.min(contents.len());
        }
        offset += contents.len() + 1;
    }
    text.len()
}

/// Looks up `field` in `entry` and reads it with `read`.
///
/// Absent fields yield `default` silently; present fields `read` rejects
/// yield `default` plus a warning naming the field and the required type.
/// One bad field never fails the document.
fn field_or_default<T>(
    entry: &Map<String, Value>,
    field: &'static str,
    expected: &str,
    default: T,
    read: impl FnOnce(&Value) -> Option<T>,
    sprite: &str,
    report: &mut ParseReport,
) -> T {
    let Some(value) = entry.get(field) else {
        return default;
    };
    match read(value) {
        Some(parsed) => parsed,
        None => {
            report.add(ParseIssue::warning(
                IssueCode::FieldWrongType,
                format!("value of '{}' must be {}", field, expected),
                IssueContext::Sprite {
                    name: sprite.to_owned(),
                },
            ));
            default
        }
    }
}

fn get_u16(
    entry: &Map<String, Value>,
    field: &'static str,
    default: u16,
    sprite: &str,
    report: &mut ParseReport,
) -> u16 {
    field_or_default(
        entry,
        field,
        "an integer between 0 and 65535",
        default,
        |value| {
            value
                .as_u64()
                .filter(|n| *n <= u64::from(u16::MAX))
                .map(|n| n as u16)
        },
        sprite,
        report,
    )
}

fn get_f64(
    entry: &Map<String, Value>,
    field: &'static str,
    default: f64,
    sprite: &str,
    report: &mut ParseReport,
) -> f64 {
    field_or_default(
        entry,
        field,
        "a number",
        default,
        Value::as_f64,
        sprite,
        report,
    )
}

fn get_bool(
    entry: &Map<String, Value>,
    field: &'static str,
    default: bool,
    sprite: &str,
    report: &mut ParseReport,
) -> bool {
    field_or_default(
        entry,
        field,
        "a boolean",
        default,
        Value::as_bool,
        sprite,
        report,
    )
}
