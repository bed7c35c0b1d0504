use thiserror::Error;

/// The main error type for spritepack operations.
///
/// These are the document-level failures: any one of them aborts a whole
/// parse. Per-sprite problems (bad geometry, wrong field types) never appear
/// here — they degrade to dropped entries and land in the
/// [`ParseReport`](crate::sprite::ParseReport) instead.
#[derive(Debug, Error)]
pub enum SpriteIndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The atlas image could not be decoded. The decoder's failure is
    /// surfaced as-is.
    #[error(transparent)]
    AtlasDecode(#[from] image::ImageError),

    /// The index text is not valid JSON. `offset` is the byte position of
    /// the error within the input.
    #[error("Failed to parse sprite index JSON: {source} (byte offset {offset})")]
    IndexSyntax {
        offset: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The index parsed, but its root is an array, scalar, or null.
    #[error("Sprite index root must be a JSON object")]
    IndexRootNotObject,

    #[error("Sprite index reported {error_count} error(s) and {warning_count} warning(s)")]
    IndexIssues {
        error_count: usize,
        warning_count: usize,
    },
}
