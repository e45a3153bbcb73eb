//! Fixed narrative tables keyed by reduced value, element and chakra.
//!
//! Every lookup returns `Option` so the composer owns the fallback wording.

use crate::models::{ChakraTag, ElementTag};

// ═══════════════════════════════════════════════════════════
// Reduced-value tables (1..9, 11, 22, 33)
// ═══════════════════════════════════════════════════════════

pub fn marker_title_template(reduced: u32) -> Option<&'static str> {
    match reduced {
        1 => Some("Marker 1 – New Beginnings"),
        2 => Some("Marker 2 – Receptive Flow"),
        3 => Some("Marker 3 – Stabilized Momentum"),
        4 => Some("Marker 4 – Foundation Building"),
        5 => Some("Marker 5 – Dynamic Change"),
        6 => Some("Marker 6 – Harmonic Balance"),
        7 => Some("Marker 7 – Seeking Clarity"),
        8 => Some("Marker 8 – Material Mastery"),
        9 => Some("Marker 9 – Completion Cycle"),
        11 => Some("Marker 11 – Gateway Awakening"),
        22 => Some("Marker 22 – Master Builder"),
        33 => Some("Marker 33 – Universal Teacher"),
        _ => None,
    }
}

pub fn core_equation_template(reduced: u32) -> Option<&'static str> {
    match reduced {
        1 => Some("Initiation × Clarity = Aligned Action"),
        2 => Some("Receptivity × Balance = Harmonic Flow"),
        3 => Some("Expression × Structure = Embodied Expansion"),
        4 => Some("Foundation × Stability = Grounded Growth"),
        5 => Some("Change × Freedom = Transformative Motion"),
        6 => Some("Love × Responsibility = Compassionate Service"),
        7 => Some("Wisdom × Reflection = Inner Knowing"),
        8 => Some("Power × Material = Abundant Manifestation"),
        9 => Some("Completion × Release = Transcendent Closure"),
        11 => Some("Intuition × Illumination = Awakened Vision"),
        22 => Some("Mastery × Structure = Monumental Creation"),
        33 => Some("Love × Teaching = Universal Healing"),
        _ => None,
    }
}

pub fn reflection_key_template(reduced: u32) -> Option<&'static str> {
    match reduced {
        1 => Some("What wants to begin through you?"),
        2 => Some("Where are you being called to receive?"),
        3 => Some("How can you express your truth more fully?"),
        4 => Some("What foundation requires your attention?"),
        5 => Some("What transformation is underway?"),
        6 => Some("Where can you bring more balance and love?"),
        7 => Some("What wisdom is seeking to emerge?"),
        8 => Some("How can you embody abundance?"),
        9 => Some("What is complete? What must be released?"),
        11 => Some("What awakening is calling you forward?"),
        22 => Some("What monumental work are you here to build?"),
        33 => Some("How are you being called to serve and heal?"),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════
// Essence (sparse element × reduced table, then master fallbacks)
// ═══════════════════════════════════════════════════════════

pub fn essence_template(element: ElementTag, reduced: u32) -> Option<&'static str> {
    use ElementTag::*;
    match (element, reduced) {
        (Fire, 1) => Some("You are standing at the threshold of initiation. The fire within calls for bold action."),
        (Fire, 3) => Some("Creative power flows through you. Express your truth with courage and clarity."),
        (Fire, 9) => Some("The cycle completes in flames of transformation. Release what no longer serves."),
        (Air, 1) => Some("A fresh wind carries new perspectives. Clarity emerges from mental stillness."),
        (Air, 7) => Some("Wisdom arrives through quiet contemplation. Trust the insights that surface."),
        (Earth, 2) => Some("Root deeply into receptive stillness. The earth supports your becoming."),
        (Earth, 4) => Some("Build your foundation stone by stone. Patience and presence create lasting structures."),
        (Earth, 8) => Some("Material mastery aligns with spiritual purpose. Abundance flows through grounded action."),
        (Water, 2) => Some("Emotional currents guide you toward balance. Flow with what is."),
        (Water, 6) => Some("Love becomes the organizing principle. Lead with compassion and care."),
        (Water, 9) => Some("Deep waters cleanse and renew. Surrender to the cycle of completion."),
        _ => None,
    }
}

pub fn master_essence_template(reduced: u32) -> Option<&'static str> {
    match reduced {
        11 => Some("You stand at a gateway of awakening. Intuition and illumination merge into vision."),
        22 => Some("You are a master builder. Your vision has the power to reshape reality."),
        33 => Some("Universal healing flows through you. You are called to teach and serve."),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════
// Chakra tables (exhaustive over the seven tags)
// ═══════════════════════════════════════════════════════════

pub fn intention_template(chakra: ChakraTag) -> &'static str {
    match chakra {
        ChakraTag::Root => "Ground into safety. Trust the foundation beneath you.",
        ChakraTag::Sacral => "Honor your creative power. Allow pleasure and play.",
        ChakraTag::SolarPlexus => "Claim your will. Direct your energy with confidence.",
        ChakraTag::Heart => "Open to love. Balance giving and receiving.",
        ChakraTag::Throat => "Speak your truth. Express authentically.",
        ChakraTag::ThirdEye => "Trust your inner vision. Wisdom lives within.",
        ChakraTag::Crown => "Connect to source. Remember your divine nature.",
    }
}

pub fn chakra_paragraph(chakra: ChakraTag) -> &'static str {
    match chakra {
        ChakraTag::Root => "Your Root chakra activates, calling you to ground deeply into safety and stability. This is a time to tend to your foundation—physical health, material security, and basic needs.",
        ChakraTag::Sacral => "Your Sacral chakra glows with creative and emotional energy. Honor your desires, embrace pleasure, and allow your creative power to flow freely.",
        ChakraTag::SolarPlexus => "Your Solar Plexus ignites with willpower and direction. This is your moment to claim your power, set clear intentions, and move forward with confidence.",
        ChakraTag::Heart => "Your Heart chakra opens, inviting love, compassion, and connection. Balance giving and receiving, and lead with heart-centered wisdom.",
        ChakraTag::Throat => "Your Throat chakra activates, urging authentic expression. Speak your truth, communicate clearly, and let your voice be heard.",
        ChakraTag::ThirdEye => "Your Third Eye awakens, enhancing intuition and inner vision. Trust the insights that arise and see beyond surface appearances.",
        ChakraTag::Crown => "Your Crown chakra illuminates, connecting you to divine consciousness and universal wisdom. You are remembering your spiritual nature.",
    }
}

pub const NEUTRAL_RESONANCE: &str = "Your energy centers are in a state of neutral equilibrium.";

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

    #[test]
    fn reduced_tables_cover_all_twelve_keys() {
        for key in KEYS {
            assert!(marker_title_template(key).is_some(), "title {key}");
            assert!(core_equation_template(key).is_some(), "equation {key}");
            assert!(reflection_key_template(key).is_some(), "reflection {key}");
        }
    }

    #[test]
    fn reduced_tables_have_no_zero_entry() {
        assert_eq!(marker_title_template(0), None);
        assert_eq!(core_equation_template(0), None);
        assert_eq!(reflection_key_template(0), None);
    }

    #[test]
    fn marker_titles_lead_with_their_key() {
        for key in KEYS {
            let title = marker_title_template(key).unwrap();
            assert!(title.starts_with(&format!("Marker {key} – ")), "{title}");
        }
    }

    #[test]
    fn essence_table_is_sparse() {
        assert!(essence_template(ElementTag::Fire, 1).is_some());
        assert!(essence_template(ElementTag::Earth, 2).is_some());
        assert_eq!(essence_template(ElementTag::Air, 3), None);
        assert_eq!(essence_template(ElementTag::Water, 11), None);
    }

    #[test]
    fn master_essences_only_for_masters() {
        for key in [11, 22, 33] {
            assert!(master_essence_template(key).is_some());
        }
        assert_eq!(master_essence_template(9), None);
    }

    #[test]
    fn chakra_tables_are_exhaustive() {
        for &chakra in ChakraTag::ALL {
            assert!(!intention_template(chakra).is_empty());
            assert!(chakra_paragraph(chakra).contains(chakra.as_str()), "{chakra}");
        }
    }
}
