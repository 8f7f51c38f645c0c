//! # Error Types

/// Errors from bartchipper operations.
#[derive(Debug, thiserror::Error)]
pub enum BartchipperError {
    /// A vocabulary or merges resource is missing or malformed.
    #[error("resource error: {0}")]
    Resource(String),

    /// Vocabulary data is inconsistent.
    #[error("vocab conflict: {0}")]
    VocabConflict(String),

    /// A required special token is absent from the vocabulary.
    #[error("special token {role} ({token:?}) not in vocab")]
    MissingSpecialToken {
        /// The role of the token; ``"bos"``, ``"eos"``, ``"unk"``, ...
        role: &'static str,

        /// The surface string of the token.
        token: String,
    },

    /// The word splitting regex failed while scanning text.
    #[error("regex error: {0}")]
    Regex(String),

    /// An inference tensor has an unusable shape.
    #[error("shape error: {0}")]
    Shape(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BartchipperError {
    /// Is this a resource (load-time) error?
    ///
    /// Resource errors are fatal at initialization.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::Resource(_) | Self::VocabConflict(_) | Self::Io(_) | Self::Json(_)
        )
    }

    /// Is this a configuration error?
    ///
    /// Configuration errors are raised when a required special token is missing.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingSpecialToken { .. })
    }
}

/// Result type for bartchipper operations.
pub type BCResult<T> = core::result::Result<T, BartchipperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = BartchipperError::Resource("bad merges".to_string());
        assert!(err.is_resource_error());
        assert!(!err.is_configuration_error());
        assert_eq!(err.to_string(), "resource error: bad merges");

        let err = BartchipperError::MissingSpecialToken {
            role: "bos",
            token: "<s>".to_string(),
        };
        assert!(err.is_configuration_error());
        assert!(!err.is_resource_error());
        assert_eq!(err.to_string(), "special token bos (\"<s>\") not in vocab");

        let err: BartchipperError = std::io::Error::other("gone").into();
        assert!(err.is_resource_error());
    }
}
