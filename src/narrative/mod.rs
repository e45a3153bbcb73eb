//! Volume 2 composer: turns engine data into fixed narrative fields.
//!
//! Pure lookups over `templates`; no state, no randomness. Calling
//! `compose_reading` twice on equal data yields equal output.

pub mod templates;

use crate::config::COMPOSER_VERSION;
use crate::models::{ChakraTag, ComposedMeta, ComposedReading, ElementTag, ReadingData};

use templates::{
    chakra_paragraph, core_equation_template, essence_template, intention_template,
    marker_title_template, master_essence_template, reflection_key_template, NEUTRAL_RESONANCE,
};

/// Element assumed when the reading carries none.
pub const DEFAULT_ELEMENT: ElementTag = ElementTag::Air;
/// Chakra assumed when the reading carries none.
pub const DEFAULT_CHAKRA: ChakraTag = ChakraTag::Heart;

/// Compose the full narrative reading from engine data.
pub fn compose_reading(data: &ReadingData) -> ComposedReading {
    tracing::debug!(
        reduced = data.sums.reduced,
        elements = data.elements.len(),
        chakras = data.chakras.len(),
        "Composing reading"
    );

    ComposedReading {
        marker_title: marker_title(data),
        core_equation_tone: core_equation_tone(data),
        elemental_alignment: data.elements.clone(),
        chakra_focus: data.chakras.clone(),
        chakra_resonance: chakra_resonance(data),
        essence: essence(data),
        intention: intention(data),
        reflection_key: reflection_key(data),
        meta: ComposedMeta {
            engine: data.clone(),
            version: COMPOSER_VERSION.to_string(),
        },
    }
}

pub fn marker_title(data: &ReadingData) -> String {
    let reduced = data.sums.reduced;
    marker_title_template(reduced)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Marker {reduced}"))
}

pub fn core_equation_tone(data: &ReadingData) -> String {
    core_equation_template(data.sums.reduced)
        .unwrap_or("Energy × Form = Embodied Frequency")
        .to_string()
}

/// Essence keyed by primary element and reduced value, falling back to the
/// master sentence and finally a generic line naming the reduced value.
pub fn essence(data: &ReadingData) -> String {
    let reduced = data.sums.reduced;
    let element = data.primary_element().unwrap_or(DEFAULT_ELEMENT);

    if let Some(text) = essence_template(element, reduced) {
        return text.to_string();
    }

    if let Some(text) = data
        .sums
        .master
        .and_then(|m| master_essence_template(m.value()))
    {
        return text.to_string();
    }

    format!("The frequency of {reduced} activates within you. Patterns align, and purpose clarifies.")
}

pub fn intention(data: &ReadingData) -> String {
    let chakra = data.primary_chakra().unwrap_or(DEFAULT_CHAKRA);
    intention_template(chakra).to_string()
}

pub fn reflection_key(data: &ReadingData) -> String {
    reflection_key_template(data.sums.reduced)
        .unwrap_or("What is this moment asking of you?")
        .to_string()
}

pub fn chakra_resonance(data: &ReadingData) -> String {
    match data.chakras.as_slice() {
        [] => NEUTRAL_RESONANCE.to_string(),
        [only] => chakra_paragraph(*only).to_string(),
        many => format!(
            "Multiple energy centers activate: {}. This creates a complex energetic signature that invites integration across different levels of being. Notice how these frequencies interact within you.",
            join_names(many)
        ),
    }
}

/// "A, B and C" style list.
fn join_names(chakras: &[ChakraTag]) -> String {
    let names: Vec<&str> = chakras.iter().map(ChakraTag::as_str).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}
