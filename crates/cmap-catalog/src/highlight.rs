//! Search-match highlighting for option labels.

/// A run of label text, flagged when it matches the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Fold search input for matching: trimmed, lowercased char by char.
pub(crate) fn fold_input(input: &str) -> Vec<char> {
    input.trim().chars().flat_map(char::to_lowercase).collect()
}

/// Byte length of the prefix of `text` that case-insensitively equals
/// `needle`, if any. Only whole chars of `text` are consumed.
fn prefix_match(text: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, c) in text.char_indices() {
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + c.len_utf8());
        }
    }
    None
}

/// Non-overlapping byte ranges of `label` matching a folded needle.
pub(crate) fn match_ranges(label: &str, needle: &[char]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    if needle.is_empty() {
        return ranges;
    }
    let mut start = 0;
    while let Some(c) = label[start..].chars().next() {
        match prefix_match(&label[start..], needle) {
            Some(len) => {
                ranges.push((start, start + len));
                start += len;
            }
            None => start += c.len_utf8(),
        }
    }
    ranges
}

/// Split `label` into plain and matched runs of `input`, ignoring case.
///
/// Input is trimmed and folded the same way [`Catalog::search`] folds it,
/// so every search hit has at least one matched run. Blank input yields
/// the whole label as one plain segment.
///
/// [`Catalog::search`]: crate::Catalog::search
pub fn highlight<'a>(label: &'a str, input: &str) -> Vec<Segment<'a>> {
    let ranges = match_ranges(label, &fold_input(input));
    if ranges.is_empty() {
        return vec![Segment {
            text: label,
            matched: false,
        }];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in ranges {
        if start > cursor {
            segments.push(Segment {
                text: &label[cursor..start],
                matched: false,
            });
        }
        segments.push(Segment {
            text: &label[start..end],
            matched: true,
        });
        cursor = end;
    }
    if cursor < label.len() {
        segments.push(Segment {
            text: &label[cursor..],
            matched: false,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment<'_>]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.matched {
                    format!("[{}]", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect()
    }

    #[test]
    fn test_marks_every_match() {
        let segments = highlight("CSC108H5: Computer Science", "c");
        assert_eq!(
            render(&segments),
            "[C]S[C]108H5: [C]omputer S[c]ien[c]e"
        );
    }

    #[test]
    fn test_empty_input_is_plain() {
        let segments = highlight("MAT102H5: Math", "");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].matched);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(render(&highlight("MAT102H5: Math", "xyz")), "MAT102H5: Math");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(render(&highlight("CSC108H5: Intro", " csc ")), "[CSC]108H5: Intro");
    }

    #[test]
    fn test_folds_non_ascii_case() {
        assert_eq!(
            render(&highlight("FRE101H5: Français", "ÇAIS")),
            "FRE101H5: Fran[çais]"
        );
        assert_eq!(render(&highlight("Ärger", "ä")), "[Ä]rger");
    }

    #[test]
    fn test_match_at_both_ends() {
        let segments = highlight("abcab", "ab");
        assert_eq!(render(&segments), "[ab]c[ab]");
    }
}
