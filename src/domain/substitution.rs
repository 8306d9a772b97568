//! Literal, global find-and-replace over raw bytes.

/// Result of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub content: Vec<u8>,
    pub replacements: usize,
}

/// Replace every non-overlapping occurrence of `needle`, scanning left to right.
///
/// Bytes outside the matches are copied through untouched. An empty needle
/// matches nothing.
pub fn replace_literal(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Substituted {
    if needle.is_empty() || haystack.len() < needle.len() {
        return Substituted {
            content: haystack.to_vec(),
            replacements: 0,
        };
    }

    let mut content = Vec::with_capacity(haystack.len());
    let mut replacements = 0;
    let mut cursor = 0;

    while let Some(offset) = find(&haystack[cursor..], needle) {
        let start = cursor + offset;
        content.extend_from_slice(&haystack[cursor..start]);
        content.extend_from_slice(replacement);
        cursor = start + needle.len();
        replacements += 1;
    }
    content.extend_from_slice(&haystack[cursor..]);

    Substituted {
        content,
        replacements,
    }
}

/// Count non-overlapping occurrences of `needle`.
pub fn count_literal(haystack: &[u8], needle: &[u8]) -> usize {
    replace_literal(haystack, needle, needle).replacements
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
