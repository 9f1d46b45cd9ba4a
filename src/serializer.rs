/*!
 * JSON rendering of converted trees.
 *
 * Field order follows the struct declarations, Unicode text is written
 * unescaped, and absent optional values are written as `null`. Both styles
 * read back into an equal tree.
 */

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::errors::{ImportError, MalformedInputError};
use crate::quran::Quran;
use crate::translation::Translation;

/// Indentation used by the pretty style
const PRETTY_INDENT: &[u8] = b"    ";

/// Whitespace style of rendered JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Indented, human readable
    Pretty,
    /// No added whitespace
    #[default]
    Compact,
}

impl OutputStyle {
    pub fn from_pretty_flag(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Compact }
    }
}

/// Render any serializable tree in the given style
pub fn to_json<T: Serialize + ?Sized>(value: &T, style: OutputStyle) -> Result<String, ImportError> {
    match style {
        OutputStyle::Compact => Ok(serde_json::to_string(value)?),
        OutputStyle::Pretty => {
            let mut out = Vec::new();
            let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut serializer = Serializer::with_formatter(&mut out, formatter);
            value.serialize(&mut serializer)?;
            // serde_json only ever writes valid UTF-8
            String::from_utf8(out)
                .map_err(|e| MalformedInputError::InvalidUtf8(e.to_string()).into())
        }
    }
}

pub fn quran_to_json(quran: &Quran, style: OutputStyle) -> Result<String, ImportError> {
    to_json(quran, style)
}

pub fn translation_to_json(translation: &Translation, style: OutputStyle) -> Result<String, ImportError> {
    to_json(translation, style)
}

/// Read a tree back from either style
pub fn from_json<T: DeserializeOwned>(content: &str) -> Result<T, ImportError> {
    serde_json::from_str(content)
        .map_err(|e| MalformedInputError::InvalidDocument(e.to_string()).into())
}

pub fn quran_from_json(content: &str) -> Result<Quran, ImportError> {
    from_json(content)
}

pub fn translation_from_json(content: &str) -> Result<Translation, ImportError> {
    from_json(content)
}
