//! # ``merges.txt`` Reader

use std::io::BufRead;

use crate::{errors::BCResult, vocab::MergeRanks};

/// Is this line part of the leading comment/blank header?
fn is_header_line(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// Parse one merge rule line.
///
/// ## Returns
/// ``Some((first, second))`` if the trimmed line splits on single spaces
/// into exactly two parts; ``None`` otherwise.
pub fn parse_merge_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.trim().split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}

/// Read an ordered ``merges.txt`` rule list.
///
/// * Leading ``#`` comment lines and blank lines are skipped.
/// * Each following line that does not parse as a rule
///   (see [`parse_merge_line`]) is dropped.
/// * Ranks are assigned in file order over the accepted rules only.
///
/// ## Arguments
/// * `reader` - The merges source.
///
/// ## Returns
/// The parsed rules, in rank order.
pub fn read_merges_txt<R>(reader: R) -> BCResult<Vec<(String, String)>>
where
    R: BufRead,
{
    let mut merges = Vec::new();
    let mut in_header = true;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;

        if in_header {
            if is_header_line(&line) {
                continue;
            }
            in_header = false;
        }

        match parse_merge_line(&line) {
            Some((first, second)) => merges.push((first.to_string(), second.to_string())),
            None => log::warn!("dropping malformed merges line {}: {line:?}", idx + 1),
        }
    }

    Ok(merges)
}

/// Read a ``merges.txt`` source into a [`MergeRanks`] table.
pub fn read_merge_ranks<R>(reader: R) -> BCResult<MergeRanks>
where
    R: BufRead,
{
    Ok(MergeRanks::from_merges(read_merges_txt(reader)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_merge_line() {
        assert_eq!(parse_merge_line("h e"), Some(("h", "e")));
        assert_eq!(parse_merge_line("Ġ t\n"), Some(("Ġ", "t")));
        assert_eq!(parse_merge_line("a b c"), None);
        assert_eq!(parse_merge_line("ab"), None);
        assert_eq!(parse_merge_line("a  b"), None);
        assert_eq!(parse_merge_line(""), None);
    }

    #[test]
    fn test_read_merges_header() {
        let text = "#version: 0.2\n\nh e\nl l\n";
        let merges = read_merges_txt(text.as_bytes()).unwrap();
        assert_eq!(
            merges,
            vec![
                ("h".to_string(), "e".to_string()),
                ("l".to_string(), "l".to_string())
            ]
        );
    }

    #[test]
    fn test_malformed_lines_keep_ranks_contiguous() {
        let text = "#version: 0.2\nh e\nx y z\nl l\n\nhe ll\n";
        let ranks = read_merge_ranks(text.as_bytes()).unwrap();

        assert_eq!(ranks.len(), 3);
        assert_eq!(ranks.get_rank("h", "e"), Some(0));
        assert_eq!(ranks.get_rank("l", "l"), Some(1));
        assert_eq!(ranks.get_rank("he", "ll"), Some(2));
        assert_eq!(ranks.get_rank("x", "y"), None);
    }

    #[test]
    fn test_comment_after_first_rule_is_not_skipped() {
        // Only the leading header is skipped.
        let text = "h e\n#note here\n";
        let merges = read_merges_txt(text.as_bytes()).unwrap();
        assert_eq!(merges.len(), 2);
        assert_eq!(merges[1], ("#note".to_string(), "here".to_string()));
    }
}
