//! Real-estate shorthand expansion

/// Ordered `(pattern, replacement)` pairs applied to every token.
///
/// Patterns are literal and case-sensitive, and each one replaces all of its
/// occurrences inside the token before the next pair runs. Later pairs see the
/// output of earlier ones, so the order is part of the behavior: `br` runs
/// before `bdr`, `ba` also fires inside words such as "bath", and `appls` is
/// listed twice. Changing any of this changes the vocabulary of every corpus.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("\\n", ""),
    ("bdrm", "bedroom"),
    ("br", "bedroom"),
    ("bdr", "bedroom"),
    ("BR", "bedroom"),
    ("ba", "bathroom"),
    ("BA", "bathroom"),
    ("Mstr", "master"),
    ("mstr", "master"),
    ("Rm", "room"),
    ("rm", "room"),
    ("Bsmnt", "basement"),
    ("bsmnt", "basement"),
    ("appls", "appliances"),
    ("appls", "appliances"),
    ("flrs", "floors"),
    ("flr", "floor"),
    ("HW", "hardwood"),
    ("SS", "stainless steel"),
];

/// Apply every abbreviation rule, in table order, to a single token
pub fn expand_token(token: &str) -> String {
    ABBREVIATIONS
        .iter()
        .fold(token.to_string(), |acc, (pattern, replacement)| {
            if acc.contains(pattern) {
                acc.replace(pattern, replacement)
            } else {
                acc
            }
        })
}

/// Expand abbreviations in each whitespace token and rejoin with single spaces
pub fn expand_abbreviations(text: &str) -> String {
    text.split_whitespace()
        .map(expand_token)
        .collect::<Vec<_>>()
        .join(" ")
}
