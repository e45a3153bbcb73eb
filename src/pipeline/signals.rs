//! Shared signals for the element and chakra classifiers: digit frequency
//! over token values, context keyword hits, and an insertion-ordered tag set.

use crate::models::NumberToken;

/// Render a token value the way it is counted for digit frequency: shortest
/// round-trip decimal, no exponent, integral values without a fraction.
pub fn render_value(value: f64) -> String {
    value.to_string()
}

/// Total occurrences of any of `digits` across all token values.
pub fn count_digits(tokens: &[NumberToken], digits: &[char]) -> usize {
    tokens
        .iter()
        .map(|t| {
            render_value(t.value)
                .chars()
                .filter(|c| digits.contains(c))
                .count()
        })
        .sum()
}

/// Case-insensitive substring match of any keyword. `lower_context` must
/// already be lowercased.
pub fn has_keyword(lower_context: &str, keywords: &[&str]) -> bool {
    !lower_context.is_empty() && keywords.iter().any(|k| lower_context.contains(k))
}

/// Deduplicated tags in first-insertion order. Index 0 is the primary tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet<T> {
    items: Vec<T>,
}

impl<T> Default for TagSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Copy + PartialEq> TagSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tag` unless already present. Returns whether it was added.
    pub fn insert(&mut self, tag: T) -> bool {
        if self.items.contains(&tag) {
            return false;
        }
        self.items.push(tag);
        true
    }

    pub fn insert_if(&mut self, condition: bool, tag: T) {
        if condition {
            self.insert(tag);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
