//! Parse diagnostics for structured reporting.
//!
//! The parser and extractor never log through global state; they record
//! issues into a caller-supplied [`ParseReport`]. Tests capture diagnostics
//! by inspecting the report, and CLI callers render it with `Display` or
//! serialize it as JSON.

use std::fmt;

use serde::Serialize;

/// Everything non-fatal that happened during one parse.
///
/// Fatal problems become a
/// [`SpriteIndexError`](crate::error::SpriteIndexError) instead; the report
/// only ever holds recoverable issues (dropped sprites, defaulted fields).
#[derive(Clone, Debug, Default, Serialize)]
pub struct ParseReport {
    /// All issues, in the order they were recorded.
    pub issues: Vec<ParseIssue>,
}

impl ParseReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: ParseIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors (dropped sprites) in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warnings (defaulted fields) in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Sprite index parsed: no issues found");
        }

        writeln!(
            f,
            "Sprite index parsed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single parse issue (error or warning).
#[derive(Clone, Debug, Serialize)]
pub struct ParseIssue {
    /// The severity of the issue.
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Context about where the issue occurred.
    pub context: IssueContext,
}

impl ParseIssue {
    /// Creates a new parse issue.
    pub fn new(
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
        context: IssueContext,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            context,
        }
    }

    /// Creates a new error.
    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Error, code, message, context)
    }

    /// Creates a new warning.
    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Warning, code, message, context)
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

/// The severity of a parse issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// A recoverable problem: the field fell back to its default.
    Warning,
    /// The sprite entry could not be extracted and was dropped.
    Error,
}

/// A stable code identifying the type of parse issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCode {
    // Extraction issues (the sprite is dropped)
    /// The rectangle width is zero or above the per-sprite cap.
    InvalidSpriteWidth,
    /// The rectangle height is zero or above the per-sprite cap.
    InvalidSpriteHeight,
    /// The pixel ratio is not in (0, 10].
    InvalidPixelRatio,
    /// The rectangle overruns the atlas horizontally.
    SpriteOutOfBoundsX,
    /// The rectangle overruns the atlas vertically.
    SpriteOutOfBoundsY,

    // Index field issues (the field falls back to its default)
    /// A descriptor field is present but has the wrong JSON type.
    FieldWrongType,
}

/// Context about where a parse issue occurred.
#[derive(Clone, Debug, Serialize)]
pub enum IssueContext {
    /// Issue with the document as a whole.
    Document,
    /// Issue with a specific named sprite entry.
    Sprite { name: String },
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::Document => write!(f, "document"),
            IssueContext::Sprite { name } => write!(f, "sprite '{}'", name),
        }
    }
}
