//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for batch tokenization.

mod rayon_encoder;

pub use rayon_encoder::ParallelRayonEncoder;
