//! # Pattern Tools

/// A macro to concatenate multiple string literals with a specified separator.
///
/// # Examples
///
/// ```rust
/// use bartchipper::join_strs;
///
/// let result = join_strs!(",", ("Hello", "World", "Rust"));
/// assert_eq!(result, "Hello,World,Rust");
///
/// let result = join_strs!(";", ("OnlyOne"));
/// assert_eq!(result, "OnlyOne");
/// ```
///
/// # Parameters
///
/// - `$sep`: A string literal placed between each pair of parts.
/// - `($first $(, $rest)*)`: A parenthesized list of one or more string literals;
///   a trailing comma is accepted.
///
/// The result is a `&'static str` built by [`concat!`], so it may initialize a `const`.
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// An extension of [`join_strs!()`] which uses "|" as the separator.
///
/// Each argument is one regex alternative:
///
/// ```rust
/// use bartchipper::join_patterns;
///
/// const CONTRACTIONS: &str = join_patterns!(r"'s", r"'t", r"'re");
/// assert_eq!(CONTRACTIONS, "'s|'t|'re");
/// ```
///
/// # Parameters
///
/// - `$e`: String literals, one per alternative; a trailing comma is accepted.
#[macro_export]
macro_rules! join_patterns {
    ($($e:literal),* $(,)?) => { $crate::join_strs!("|", ($($e),*)) };
}
