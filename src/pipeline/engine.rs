//! Volume 1 reading pipeline: select text → extract → full-sum → classify → trace.
//!
//! Pure and synchronous. Identical input always yields identical
//! `ReadingData`; the trace only records what was computed.

use serde_json::{json, Map, Value};

use crate::config::ENGINE_VOLUME;
use crate::models::{Phase, ReadingData, ReadingInput};

use super::chakras::map_chakras;
use super::elements::map_elements;
use super::extract::extract_numbers;
use super::fullsum::full_sum;
use super::ReadingError;

/// Build the structured reading for one request.
pub fn build_reading(input: &ReadingInput) -> Result<ReadingData, ReadingError> {
    let _span = tracing::info_span!("build_reading", source_type = input.source_type.as_str()).entered();

    let source_text = input.source_text().ok_or(ReadingError::InputValidation)?;

    let tokens = extract_numbers(source_text);
    if tokens.is_empty() {
        tracing::debug!(text_len = source_text.len(), "No numeric tokens in source text");
        return Err(ReadingError::NoDataFound);
    }

    let values: Vec<f64> = tokens.iter().map(|t| t.value).collect();
    let sums = full_sum(&values);

    let context = input.context();
    let elements = map_elements(&tokens, &sums, context);
    let chakras = map_chakras(&tokens, &sums, context);

    let phase = Phase {
        volume: ENGINE_VOLUME,
        cycle: None,
        marker: None,
    };

    let mut trace = Map::new();
    trace.insert("sourceText".into(), Value::from(source_text));
    trace.insert("sourceType".into(), Value::from(input.source_type.as_str()));
    trace.insert("extractedTokens".into(), json!(tokens));

    let mut calculation = json!({
        "values": values,
        "fullSum": sums.full_sum,
        "reduced": sums.reduced,
    });
    if let Some(master) = sums.master {
        calculation["master"] = json!(master.value());
    }
    trace.insert("fullSumCalculation".into(), calculation);
    trace.insert(
        "elementMapping".into(),
        json!({ "context": context, "elements": elements }),
    );
    trace.insert(
        "chakraMapping".into(),
        json!({ "context": context, "chakras": chakras }),
    );
    trace.insert("phaseAssignment".into(), json!(phase));
    if let Some(meta) = &input.metadata {
        let mut recorded = Map::new();
        recorded.insert("locale".into(), Value::from(meta.locale.as_str()));
        if let Some(ts) = &meta.timestamp {
            recorded.insert("timestamp".into(), Value::from(ts.as_str()));
        }
        trace.insert("metadata".into(), Value::Object(recorded));
    }

    tracing::info!(
        tokens = tokens.len(),
        full_sum = sums.full_sum,
        reduced = sums.reduced,
        master = sums.master.is_some(),
        elements = elements.len(),
        chakras = chakras.len(),
        "Reading built"
    );

    Ok(ReadingData {
        tokens,
        sums,
        elements,
        chakras,
        phase,
        trace,
    })
}
