//! Block scan fallback for labels whose value sits on the next line.

use super::ExtractionMatch;

/// Find the line following a line that contains `marker`.
///
/// Blocks are scanned in order and upper-cased individually. Within a
/// block every line containing the marker proposes the next line
/// (trimmed) as a candidate; the first candidate `accept` approves is
/// returned. The match's `rule` is the index of the block it came from.
pub fn value_after_marker<F>(
    blocks: &[String],
    marker: &str,
    accept: F,
) -> Option<ExtractionMatch<String>>
where
    F: Fn(&str) -> bool,
{
    for (index, block) in blocks.iter().enumerate() {
        let block = block.to_uppercase();
        if !block.contains(marker) {
            continue;
        }

        let lines: Vec<&str> = block.split('\n').collect();
        for pair in lines.windows(2) {
            if !pair[0].contains(marker) {
                continue;
            }

            let candidate = pair[1].trim();
            if accept(candidate) {
                let source = format!("{}\n{}", pair[0].trim(), candidate);
                return Some(ExtractionMatch::new(candidate.to_string(), index, source));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_value_on_following_line() {
        let blocks = blocks(&["Passport Number\ncd7654321"]);
        let result = value_after_marker(&blocks, "PASSPORT", |c| !c.is_empty()).unwrap();
        assert_eq!(result.value, "CD7654321");
        assert_eq!(result.rule, 0);
        assert_eq!(result.source, "PASSPORT NUMBER\nCD7654321");
    }

    #[test]
    fn test_marker_on_last_line_has_no_value() {
        let blocks = blocks(&["JOHN SMITH\nNAME"]);
        assert!(value_after_marker(&blocks, "NAME", |c| !c.is_empty()).is_none());
    }

    #[test]
    fn test_rejected_candidate_moves_on() {
        let blocks = blocks(&[
            "PASSPORT\nUNITED STATES",
            "TYPE P\nPASSPORT NO\nX1234567",
        ]);
        let result = value_after_marker(&blocks, "PASSPORT", |c| {
            c.chars().all(|ch| ch.is_ascii_alphanumeric()) && c.len() >= 6
        })
        .unwrap();
        assert_eq!(result.value, "X1234567");
        assert_eq!(result.rule, 1);
    }

    #[test]
    fn test_empty_blocks() {
        assert!(value_after_marker(&[], "NAME", |_| true).is_none());
    }
}
