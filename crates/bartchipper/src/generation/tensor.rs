//! # Rank-3 Tensors

use crate::errors::{BCResult, BartchipperError};

/// A dense rank-3 ``f32`` tensor, stored row-major.
///
/// Encoder hidden states are ``[1, seq_len, hidden_size]``;
/// decoder scores are ``[1, decoder_len, vocab_size]``.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor3 {
    dims: [usize; 3],
    data: Vec<f32>,
}

impl Tensor3 {
    /// Build a tensor from its shape and flat data.
    ///
    /// ## Returns
    /// The tensor; or a shape error if `data.len()` is not the product of `dims`.
    pub fn new(
        dims: [usize; 3],
        data: Vec<f32>,
    ) -> BCResult<Self> {
        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| BartchipperError::Shape(format!("shape {dims:?} overflows")))?;

        if expected != data.len() {
            return Err(BartchipperError::Shape(format!(
                "shape {dims:?} needs {expected} values, got {}",
                data.len()
            )));
        }

        Ok(Self { dims, data })
    }

    /// Build a zero-filled tensor.
    ///
    /// ## Panics
    /// If the element count overflows `usize`.
    pub fn zeros(dims: [usize; 3]) -> Self {
        let len = dims.iter().product();
        Self {
            dims,
            data: vec![0.0; len],
        }
    }

    /// Get the shape.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Get the flat data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consume the tensor, returning the flat data.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Get the row at the last position of a single-batch tensor.
    ///
    /// ## Returns
    /// ``self[0, d1 - 1, ..]``; or a shape error if the batch is not 1,
    /// or the tensor has no positions or an empty last axis.
    pub fn last_row(&self) -> BCResult<&[f32]> {
        let [batch, positions, width] = self.dims;
        if batch != 1 || positions == 0 || width == 0 {
            return Err(BartchipperError::Shape(format!(
                "expected [1, n > 0, m > 0], got {:?}",
                self.dims
            )));
        }

        let start = (positions - 1) * width;
        Ok(&self.data[start..start + width])
    }
}
