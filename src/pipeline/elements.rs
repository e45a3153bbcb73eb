use crate::models::{ElementTag, FullSumResult, NumberToken};

use super::signals::{count_digits, has_keyword, TagSet};

const FIRE_KEYWORDS: &[&str] = &[
    "action", "drive", "passion", "energy", "power", "intensity", "momentum",
];
const AIR_KEYWORDS: &[&str] = &[
    "time", "thought", "communication", "clarity", "perspective", "mental",
];
const EARTH_KEYWORDS: &[&str] = &[
    "money", "material", "physical", "practical", "stable", "grounded", "body",
];
const WATER_KEYWORDS: &[&str] = &[
    "emotion", "flow", "feeling", "intuition", "fluid", "deep", "heart",
];

/// Element assigned when no rule fires. Reduced 0 has no entry.
fn default_element(reduced: u32) -> Option<ElementTag> {
    match reduced {
        1 => Some(ElementTag::Fire),
        2 => Some(ElementTag::Water),
        3 => Some(ElementTag::Air),
        4 => Some(ElementTag::Earth),
        5 => Some(ElementTag::Air),
        6 => Some(ElementTag::Water),
        7 => Some(ElementTag::Air),
        8 => Some(ElementTag::Earth),
        9 => Some(ElementTag::Water),
        _ => None,
    }
}

/// Map tokens, sums and free-text context to elemental alignments.
///
/// Rules run in a fixed order (Fire, Air, Earth, Water) and the result keeps
/// that order, so the first entry is the primary element:
/// 1. Fire: any master, reduced 1/9, or drive keywords
/// 2. Air: three or more 1s/3s, a time pattern (`:` in a raw token), or mental keywords
/// 3. Earth: reduced 4/8, two or more 4s/8s, or material keywords
/// 4. Water: reduced 2/6, two or more 2s/6s/9s, or emotional keywords
///
/// When nothing fires, a single default derived from `reduced` is used.
pub fn map_elements(tokens: &[NumberToken], sums: &FullSumResult, context: &str) -> Vec<ElementTag> {
    let context = context.to_lowercase();
    let mut elements = TagSet::new();

    elements.insert_if(
        sums.master.is_some()
            || matches!(sums.reduced, 1 | 9)
            || has_keyword(&context, FIRE_KEYWORDS),
        ElementTag::Fire,
    );

    let has_time_pattern = tokens.iter().any(|t| t.raw.contains(':'));
    elements.insert_if(
        count_digits(tokens, &['1', '3']) >= 3
            || has_time_pattern
            || has_keyword(&context, AIR_KEYWORDS),
        ElementTag::Air,
    );

    elements.insert_if(
        matches!(sums.reduced, 4 | 8)
            || count_digits(tokens, &['4', '8']) >= 2
            || has_keyword(&context, EARTH_KEYWORDS),
        ElementTag::Earth,
    );

    elements.insert_if(
        matches!(sums.reduced, 2 | 6)
            || count_digits(tokens, &['2', '6', '9']) >= 2
            || has_keyword(&context, WATER_KEYWORDS),
        ElementTag::Water,
    );

    if elements.is_empty() {
        if let Some(tag) = default_element(sums.reduced) {
            elements.insert(tag);
        }
    }

    let elements = elements.into_vec();
    tracing::trace!(reduced = sums.reduced, count = elements.len(), "Elements mapped");
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MasterNumber;

    fn tok(value: f64, raw: &str, index: usize) -> NumberToken {
        NumberToken {
            value,
            raw: raw.into(),
            index,
        }
    }

    fn sums(full_sum: u64, reduced: u32) -> FullSumResult {
        FullSumResult {
            full_sum,
            reduced,
            master: None,
        }
    }

    fn master(full_sum: u64, reduced: u32, m: MasterNumber) -> FullSumResult {
        FullSumResult {
            full_sum,
            reduced,
            master: Some(m),
        }
    }

    #[test]
    fn fire_for_master_eleven() {
        let elements = map_elements(&[tok(11.0, "11", 0)], &master(11, 11, MasterNumber::Eleven), "");
        assert!(elements.contains(&ElementTag::Fire));
    }

    #[test]
    fn fire_for_reduced_one() {
        let elements = map_elements(&[tok(10.0, "10", 0)], &sums(1, 1), "");
        assert!(elements.contains(&ElementTag::Fire));
    }

    #[test]
    fn air_for_time_pattern_in_raw() {
        let tokens = [tok(10.0, "10:24", 0), tok(24.0, "24", 1)];
        let elements = map_elements(&tokens, &sums(6, 6), "");
        assert!(elements.contains(&ElementTag::Air));
    }

    #[test]
    fn air_for_many_ones_and_threes() {
        let tokens = [tok(111.0, "111", 0), tok(333.0, "333", 1)];
        let elements = map_elements(&tokens, &sums(18, 9), "");
        assert!(elements.contains(&ElementTag::Air));
    }

    #[test]
    fn earth_for_reduced_four_and_eight() {
        for r in [4, 8] {
            let elements = map_elements(&[tok(r as f64, &r.to_string(), 0)], &sums(r as u64, r), "");
            assert!(elements.contains(&ElementTag::Earth), "reduced {r}");
        }
    }

    #[test]
    fn water_for_reduced_two_and_six() {
        for r in [2, 6] {
            let elements = map_elements(&[tok(r as f64, &r.to_string(), 0)], &sums(r as u64, r), "");
            assert!(elements.contains(&ElementTag::Water), "reduced {r}");
        }
    }

    #[test]
    fn multiple_elements_in_rule_order() {
        let tokens = [tok(11.0, "11", 0), tok(44.0, "44", 1)];
        let elements = map_elements(&tokens, &master(10, 1, MasterNumber::Eleven), "");
        assert_eq!(elements, vec![ElementTag::Fire, ElementTag::Earth]);
    }

    #[test]
    fn context_keywords_per_element() {
        let five = [tok(5.0, "5", 0)];
        let cases = [
            ("taking action with passion", ElementTag::Fire),
            ("clear thought and communication", ElementTag::Air),
            ("material money and physical grounded", ElementTag::Earth),
            ("emotional flow and intuition", ElementTag::Water),
        ];
        for (context, expected) in cases {
            let elements = map_elements(&five, &sums(5, 5), context);
            assert_eq!(elements, vec![expected], "context {context:?}");
        }
    }

    #[test]
    fn context_match_ignores_case() {
        let elements = map_elements(&[tok(5.0, "5", 0)], &sums(5, 5), "MOMENTUM");
        assert_eq!(elements, vec![ElementTag::Fire]);
    }

    #[test]
    fn default_mapping_when_no_rule_fires() {
        let elements = map_elements(&[tok(7.0, "7", 0)], &sums(7, 7), "");
        assert_eq!(elements, vec![ElementTag::Air]);
    }

    #[test]
    fn default_table_covers_one_through_nine() {
        for r in 1..=9 {
            assert!(default_element(r).is_some(), "reduced {r}");
        }
        assert_eq!(default_element(5), Some(ElementTag::Air));
        assert_eq!(default_element(0), None);
    }

    #[test]
    fn reduced_zero_can_be_empty() {
        let elements = map_elements(&[tok(0.0, "0", 0)], &sums(0, 0), "");
        assert!(elements.is_empty());
    }

    #[test]
    fn screenshot_reading_order() {
        // 10:24 • 67% • 144 likes -> master 11, three 4s, one 2 and one 6
        let tokens = [
            tok(10.0, "10", 0),
            tok(24.0, "24", 1),
            tok(67.0, "67", 2),
            tok(144.0, "144", 3),
        ];
        let elements = map_elements(
            &tokens,
            &master(29, 11, MasterNumber::Eleven),
            "Instagram screenshot",
        );
        assert_eq!(
            elements,
            vec![ElementTag::Fire, ElementTag::Earth, ElementTag::Water]
        );
    }
}
