//! Reading orchestrator: engine pipeline followed by narrative composition.
//!
//! Single entry point for collaborators that want both halves:
//! input → build_reading → compose_reading.

use crate::models::{Reading, ReadingInput};
use crate::narrative::compose_reading;

use super::engine::build_reading;
use super::ReadingError;

/// Build and compose a reading in one call.
pub fn generate_reading(input: &ReadingInput) -> Result<Reading, ReadingError> {
    let engine = build_reading(input).inspect_err(|e| {
        tracing::warn!(code = e.code(), "Reading generation rejected: {e}");
    })?;
    let composed = compose_reading(&engine);
    Ok(Reading { engine, composed })
}

/// Decode a JSON request body, validate it, then generate the reading.
pub fn generate_reading_from_json(body: &str) -> Result<Reading, ReadingError> {
    let input = ReadingInput::from_json(body)?;
    generate_reading(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChakraTag;

    #[test]
    fn composes_from_engine_output() {
        let reading = generate_reading(&ReadingInput::text("1111 • 44")).unwrap();

        assert_eq!(reading.engine.sums.reduced, 3);
        assert_eq!(reading.composed.marker_title, "Marker 3 – Stabilized Momentum");
        assert_eq!(reading.composed.meta.engine, reading.engine);
        assert_eq!(reading.composed.elemental_alignment, reading.engine.elements);
    }

    #[test]
    fn master_reading_end_to_end() {
        // 9 + 2 = 11
        let reading = generate_reading(&ReadingInput::text("92")).unwrap();

        assert_eq!(reading.engine.sums.reduced, 11);
        assert_eq!(reading.engine.chakras, vec![ChakraTag::Crown]);
        assert_eq!(reading.composed.marker_title, "Marker 11 – Gateway Awakening");
        assert!(reading.composed.essence.starts_with("You stand at a gateway of awakening."));
        assert_eq!(reading.composed.intention, "Connect to source. Remember your divine nature.");
    }

    #[test]
    fn engine_errors_propagate() {
        assert_eq!(
            generate_reading(&ReadingInput::text("none")).unwrap_err(),
            ReadingError::NoDataFound
        );
    }

    #[test]
    fn json_body_round_trip() {
        let reading = generate_reading_from_json(
            r#"{"sourceType":"text","rawText":"11:11","metadata":{"timestamp":"2025-11-21T11:11:00Z"}}"#,
        )
        .unwrap();
        assert!(reading.engine.chakras.contains(&ChakraTag::Crown));
        assert_eq!(reading.engine.trace["metadata"]["timestamp"], "2025-11-21T11:11:00Z");
    }

    #[test]
    fn json_body_with_bad_timestamp_is_rejected() {
        let err = generate_reading_from_json(
            r#"{"sourceType":"text","rawText":"11:11","metadata":{"timestamp":"soon"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_TIMESTAMP");
    }
}
