/*!
 * Error types for the tanzil importer.
 *
 * Every error here is a deterministic content defect, never a transient
 * fault, so none of them is retried. The taxonomy follows the stages of
 * the pipeline, using the thiserror crate for ergonomic definitions.
 */

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The raw corpus does not hash to the pinned reference digest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// Computed SHA-256 differs from the approved release digest
    #[error("source digest mismatch: expected {expected}, found {actual}")]
    DigestMismatch {
        /// Pinned digest the run was configured with
        expected: String,
        /// Digest of the bytes actually read
        actual: String,
    },
}

/// The input does not have the shape the pipeline expects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    /// Bytes are not valid UTF-8
    #[error("source is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// The XML reader rejected the document
    #[error("XML syntax error at byte {position}: {message}")]
    Xml {
        /// Byte offset reported by the reader
        position: usize,
        /// Reader message
        message: String,
    },

    /// A required element never appeared
    #[error("document contains no <{0}> elements")]
    MissingElement(&'static str),

    /// An element has none of the children it must contain
    #[error("<{element}> #{position} has no <{child}> children")]
    EmptyElement {
        element: &'static str,
        child: &'static str,
        position: usize,
    },

    /// A required attribute is absent
    #[error("<{element}> #{position} is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        position: usize,
    },

    /// An attribute exists but cannot be interpreted
    #[error("<{element}> #{position} has invalid '{attribute}' value '{value}'")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        position: usize,
        value: String,
    },

    /// Declared index disagrees with document order
    #[error("<{element}> #{position} declares index {declared}")]
    OutOfOrder {
        element: &'static str,
        position: usize,
        declared: u16,
    },

    /// More than one ayah of a surah is the basmala itself
    #[error("surah {surah} has more than one bismillah ayah (ayah {ayah})")]
    DuplicateBismillah { surah: u16, ayah: u16 },

    /// File name is not `{language}.{author}.{extension}`
    #[error("file name '{file_name}' has {segments} dot-separated segments, expected 3 ({{language}}.{{author}}.{{extension}})")]
    FileNameSegments { file_name: String, segments: usize },

    /// File name has an empty language or author segment
    #[error("file name '{0}' has an empty segment")]
    EmptyFileNameSegment(String),

    /// File has an extension the pipeline does not read
    #[error("unexpected file extension '{found}', expected '{expected}'")]
    UnexpectedExtension { found: String, expected: String },

    /// Serialized tree could not be read back
    #[error("invalid serialized document: {0}")]
    InvalidDocument(String),
}

/// A surah number outside the static period table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupGapError {
    #[error("no revelation period recorded for surah {0}")]
    MissingPeriod(u16),
}

/// Any failure a single conversion can produce
#[derive(Error, Debug)]
pub enum ImportError {
    /// Integrity gate refused the source
    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Input shape defect
    #[error("Malformed input: {0}")]
    Malformed(#[from] MalformedInputError),

    /// Static table gap
    #[error("Lookup gap: {0}")]
    LookupGap(#[from] LookupGapError),

    /// Error from a file operation
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering or reading JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Pipeline stage an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Metadata,
    Read,
    Integrity,
    Cleanse,
    Parse,
    Align,
    Serialize,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Metadata => "file name check",
            Self::Read => "read",
            Self::Integrity => "integrity check",
            Self::Cleanse => "cleanse",
            Self::Parse => "parse",
            Self::Align => "align",
            Self::Serialize => "serialize",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}

/// An error bound to the file and stage that produced it
#[derive(Error, Debug)]
#[error("{}: {stage} failed: {error}", .path.display())]
pub struct PipelineError {
    pub path: PathBuf,
    pub stage: Stage,
    #[source]
    pub error: ImportError,
}

impl PipelineError {
    pub fn new<E: Into<ImportError>>(path: impl Into<PathBuf>, stage: Stage, error: E) -> Self {
        Self {
            path: path.into(),
            stage,
            error: error.into(),
        }
    }
}

/// Attach a file and stage to a fallible step
pub trait StageContext<T> {
    fn at_stage(self, path: &std::path::Path, stage: Stage) -> Result<T, PipelineError>;
}

impl<T, E: Into<ImportError>> StageContext<T> for Result<T, E> {
    fn at_stage(self, path: &std::path::Path, stage: Stage) -> Result<T, PipelineError> {
        self.map_err(|e| PipelineError::new(path, stage, e))
    }
}
