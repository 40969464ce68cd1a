/// Error types for the paragraph content codec.
use quick_xml::errors::{Error as XmlError, IllFormedError, SyntaxError};
use thiserror::Error;

/// Result type for encoding operations.
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Result type for decoding operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Errors raised while writing paragraph content.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The underlying sink failed
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Errors raised while reading paragraph content.
///
/// Unknown elements are never an error; they are skipped.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Nested content could not be parsed into the expected record shape.
    /// Carries the local name of the offending element.
    #[error("Malformed <{0}> element")]
    Malformed(String),

    /// The stream ended before an open element was closed
    #[error("Truncated stream: input ended inside an open element")]
    Truncated,

    /// Any other tokenizer failure
    #[error("XML error: {0}")]
    Xml(String),
}

impl DecodeError {
    pub(crate) fn malformed(tag: impl Into<String>) -> Self {
        DecodeError::Malformed(tag.into())
    }
}

impl From<XmlError> for DecodeError {
    fn from(err: XmlError) -> Self {
        match err {
            XmlError::Syntax(
                SyntaxError::UnclosedTag
                | SyntaxError::UnclosedComment
                | SyntaxError::UnclosedCData
                | SyntaxError::UnclosedDoctype
                | SyntaxError::UnclosedPI
                | SyntaxError::UnclosedXmlDecl
                | SyntaxError::UnclosedSingleQuotedAttributeValue
                | SyntaxError::UnclosedDoubleQuotedAttributeValue,
            ) => DecodeError::Truncated,
            XmlError::IllFormed(IllFormedError::MissingEndTag(_)) => DecodeError::Truncated,
            XmlError::IllFormed(IllFormedError::MismatchedEndTag { expected, .. }) => {
                DecodeError::Malformed(local_part(&expected).to_string())
            },
            XmlError::IllFormed(IllFormedError::UnmatchedEndTag(found)) => {
                DecodeError::Malformed(local_part(&found).to_string())
            },
            other => DecodeError::Xml(other.to_string()),
        }
    }
}

/// Strip a `prefix:` from a qualified name.
fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_end_tag_is_truncation() {
        let err: DecodeError = XmlError::IllFormed(IllFormedError::MissingEndTag("w:r".into())).into();
        assert!(matches!(err, DecodeError::Truncated));
    }

    #[test]
    fn test_mismatched_end_tag_names_expected_element() {
        let err: DecodeError = XmlError::IllFormed(IllFormedError::MismatchedEndTag {
            expected: "w:t".into(),
            found: "w:r".into(),
        })
        .into();
        assert!(matches!(err, DecodeError::Malformed(ref tag) if tag == "t"));
    }

    #[test]
    fn test_unclosed_tag_is_truncation() {
        let err: DecodeError = XmlError::Syntax(SyntaxError::UnclosedTag).into();
        assert!(matches!(err, DecodeError::Truncated));
    }

    #[test]
    fn test_unclosed_attribute_value_is_truncation() {
        for cause in [
            SyntaxError::UnclosedSingleQuotedAttributeValue,
            SyntaxError::UnclosedDoubleQuotedAttributeValue,
            SyntaxError::UnclosedPI,
            SyntaxError::UnclosedXmlDecl,
        ] {
            let err: DecodeError = XmlError::Syntax(cause).into();
            assert!(matches!(err, DecodeError::Truncated), "{cause:?}");
        }
    }

    #[test]
    fn test_bad_markup_is_xml_error() {
        let err: DecodeError = XmlError::Syntax(SyntaxError::InvalidBangMarkup).into();
        assert!(matches!(err, DecodeError::Xml(_)));
    }
}
