use std::sync::LazyLock;

use regex::Regex;

use crate::models::NumberToken;

/// ASCII digit runs with an optional fractional part. Separators such as
/// `:` `%` `•` are left in place and split tokens.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("Invalid number token pattern")
});

/// Scan `text` left to right and return every numeric token in order.
///
/// Indices are contiguous from 0 and only advance for tokens that parse to a
/// finite value. Digit runs past the `f64` range are dropped.
pub fn extract_numbers(text: &str) -> Vec<NumberToken> {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| {
            let raw = m.as_str();
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|value| (value, raw))
        })
        .enumerate()
        .map(|(index, (value, raw))| NumberToken {
            value,
            raw: raw.to_string(),
            index,
        })
        .collect()
}
