//! # ``vocab.json`` Reader

use std::io::Read;

use serde_json::Value;

use crate::{
    errors::{BCResult, BartchipperError},
    types::{TokenType, hash_map_with_capacity},
    vocab::TokenIdMap,
};

/// Read a ``{ token: id }`` JSON vocabulary.
///
/// ## Arguments
/// * `reader` - The JSON source.
///
/// ## Returns
/// The ``{ token -> id }`` map; or a resource error if the root is not an
/// object, or any id is not a non-negative integer that fits in `T`.
pub fn read_vocab_json<T, R>(reader: R) -> BCResult<TokenIdMap<T>>
where
    T: TokenType,
    R: Read,
{
    let root: Value = serde_json::from_reader(reader)?;
    let Value::Object(entries) = root else {
        return Err(BartchipperError::Resource(
            "vocab json root is not an object".to_string(),
        ));
    };

    let mut token_ids: TokenIdMap<T> = hash_map_with_capacity(entries.len());
    for (token, value) in entries {
        let id = value
            .as_u64()
            .and_then(T::from_u64)
            .ok_or_else(|| {
                BartchipperError::Resource(format!(
                    "vocab json token {token:?} has invalid id {value}"
                ))
            })?;
        token_ids.insert(token, id);
    }

    Ok(token_ids)
}
