//! # Generation Errors

use crate::errors::BartchipperError;

/// Errors from a generation request.
///
/// `E` is the error type of the inference backend.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError<E: std::error::Error + 'static> {
    /// The inference backend failed; the partial sequence is discarded.
    #[error("inference failed: {0}")]
    Inference(#[source] E),

    /// Cancellation was requested before a decoder call.
    #[error("generation cancelled after {generated} tokens")]
    Cancelled {
        /// Number of ids appended before cancellation.
        generated: usize,
    },

    /// Tokenization or tensor handling failed.
    #[error(transparent)]
    Core(#[from] BartchipperError),
}

impl<E: std::error::Error + 'static> GenerateError<E> {
    /// Was the request cancelled?
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Get the backend error, if that is the cause.
    pub fn into_inference(self) -> Option<E> {
        match self {
            Self::Inference(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_generate_error() {
        let err: GenerateError<std::io::Error> =
            GenerateError::Inference(std::io::Error::other("device lost"));
        assert_eq!(err.to_string(), "inference failed: device lost");
        assert!(err.source().is_some());
        assert!(!err.is_cancelled());
        assert_eq!(err.into_inference().unwrap().to_string(), "device lost");

        let err: GenerateError<std::io::Error> = GenerateError::Cancelled { generated: 3 };
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "generation cancelled after 3 tokens");

        let err: GenerateError<std::io::Error> =
            BartchipperError::Shape("bad".to_string()).into();
        assert!(matches!(err, GenerateError::Core(BartchipperError::Shape(_))));
        assert!(err.into_inference().is_none());
    }
}
