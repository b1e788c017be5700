// Letter case helpers for case-only edits

/// Lowercase a single character, keeping it unchanged if the mapping
/// expands to several characters.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Returns `true` if `a` and `b` are different characters that only differ
/// by letter case ('a' / 'A').
pub fn differs_only_by_case(a: char, b: char) -> bool {
    a != b && simple_lower(a) == simple_lower(b)
}
