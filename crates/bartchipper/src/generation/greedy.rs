//! # Greedy Selection

use crate::errors::{BCResult, BartchipperError};

/// Select the index of the highest score.
///
/// The first occurrence of the maximum wins; `NaN` scores are never selected.
///
/// ## Returns
/// The index; or a shape error if no score is comparable.
pub fn argmax(scores: &[f32]) -> BCResult<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx).ok_or_else(|| {
        BartchipperError::Shape(format!(
            "no selectable score among {} values",
            scores.len()
        ))
    })
}
