use crate::models::{ChakraTag, FullSumResult, NumberToken};

use super::signals::{count_digits, has_keyword, TagSet};

fn chakra_keywords(chakra: ChakraTag) -> &'static [&'static str] {
    match chakra {
        ChakraTag::Root => &["survival", "safety", "security", "grounded", "foundation", "basic"],
        ChakraTag::Sacral => &["creative", "pleasure", "sexuality", "emotion", "desire", "passion"],
        ChakraTag::SolarPlexus => &["will", "power", "confidence", "control", "action", "direction"],
        ChakraTag::Heart => &["love", "compassion", "connection", "healing", "relationships", "balance"],
        ChakraTag::Throat => &["expression", "communication", "voice", "truth", "speak", "authentic"],
        ChakraTag::ThirdEye => &["intuition", "vision", "insight", "perception", "wisdom", "awareness"],
        ChakraTag::Crown => &["spiritual", "consciousness", "enlightenment", "divine", "unity", "transcendent"],
    }
}

/// Primary chakra by reduced value. Masters and 0 have no entry.
fn primary_chakra(reduced: u32) -> Option<ChakraTag> {
    match reduced {
        1 | 4 | 8 => Some(ChakraTag::Root),
        2 => Some(ChakraTag::Sacral),
        3 => Some(ChakraTag::SolarPlexus),
        5 => Some(ChakraTag::Throat),
        6 | 9 => Some(ChakraTag::Heart),
        7 => Some(ChakraTag::ThirdEye),
        _ => None,
    }
}

/// Map tokens, sums and free-text context to chakra alignments.
///
/// Order of additions: primary by reduced value, Crown for masters, Crown
/// for four or more 1s, Solar Plexus for three or more 3s, Heart for two or
/// more 6s, then context keywords from Root up to Crown.
pub fn map_chakras(tokens: &[NumberToken], sums: &FullSumResult, context: &str) -> Vec<ChakraTag> {
    let context = context.to_lowercase();
    let mut chakras = TagSet::new();

    if let Some(primary) = primary_chakra(sums.reduced) {
        chakras.insert(primary);
    }

    chakras.insert_if(sums.master.is_some(), ChakraTag::Crown);
    chakras.insert_if(count_digits(tokens, &['1']) >= 4, ChakraTag::Crown);
    chakras.insert_if(count_digits(tokens, &['3']) >= 3, ChakraTag::SolarPlexus);
    chakras.insert_if(count_digits(tokens, &['6']) >= 2, ChakraTag::Heart);

    for &chakra in ChakraTag::ALL {
        chakras.insert_if(has_keyword(&context, chakra_keywords(chakra)), chakra);
    }

    let chakras = chakras.into_vec();
    tracing::trace!(reduced = sums.reduced, count = chakras.len(), "Chakras mapped");
    chakras
}
