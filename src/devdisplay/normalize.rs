//! String canonicalization shared by every search criterion.

/// Canonical form used for substring matching.
///
/// Lowercases, turns commas (with any surrounding whitespace) into a single
/// space, collapses whitespace runs and trims. A run mixing commas and
/// whitespace therefore always ends up as exactly one space, which makes the
/// function idempotent.
///
/// Whitespace means Unicode `White_Space` ([`char::is_whitespace`]): U+0085
/// separates words, U+FEFF (byte order mark) does not and is kept as text.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
