use serde::{Deserialize, Serialize};

use super::enums::{ChakraTag, ElementTag, SourceType};
use crate::config::DEFAULT_LOCALE;
use crate::pipeline::ReadingError;

/// UTC date-time with a `T` separator, a literal `Z` and optional fractional seconds.
const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

// ---------------------------------------------------------------------------
// Engine input
// ---------------------------------------------------------------------------

/// A reading request as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingInput {
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReadingMetadata>,
}

/// Caller-supplied hints. Only `context` influences classification;
/// locale and timestamp are carried into the trace untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for ReadingMetadata {
    fn default() -> Self {
        Self {
            context: None,
            locale: default_locale(),
            timestamp: None,
        }
    }
}

impl ReadingInput {
    /// Plain-text request with no metadata.
    pub fn text(raw: impl Into<String>) -> Self {
        Self {
            source_type: SourceType::Text,
            raw_text: Some(raw.into()),
            ocr_text: None,
            metadata: None,
        }
    }

    /// Request carrying text recognised from an image.
    pub fn image(ocr: impl Into<String>) -> Self {
        Self {
            source_type: SourceType::Image,
            raw_text: None,
            ocr_text: Some(ocr.into()),
            metadata: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(ReadingMetadata::default)
            .context = Some(context.into());
        self
    }

    /// The text field selected by `source_type`, if populated.
    pub fn source_text(&self) -> Option<&str> {
        let field = match self.source_type {
            SourceType::Image => self.ocr_text.as_deref(),
            SourceType::Text => self.raw_text.as_deref(),
        };
        field.filter(|t| !t.is_empty())
    }

    /// Classification context, empty when absent.
    pub fn context(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.context.as_deref())
            .unwrap_or("")
    }

    /// Structural checks for inputs decoded from untrusted JSON.
    pub fn validate(&self) -> Result<(), ReadingError> {
        if let Some(ts) = self.metadata.as_ref().and_then(|m| m.timestamp.as_deref()) {
            chrono::NaiveDateTime::parse_from_str(ts, UTC_TIMESTAMP_FORMAT)
                .map_err(|e| ReadingError::InvalidTimestamp(format!("{ts}: {e}")))?;
        }
        Ok(())
    }

    /// Decode and validate a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, ReadingError> {
        let input: Self = serde_json::from_str(body)
            .map_err(|e| ReadingError::MalformedInput(e.to_string()))?;
        input.validate()?;
        Ok(input)
    }
}

// ---------------------------------------------------------------------------
// Engine output
// ---------------------------------------------------------------------------

/// A numeric substring found in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberToken {
    pub value: f64,
    pub raw: String,
    pub index: usize,
}

/// One of the three values the reducer never collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum MasterNumber {
    Eleven,
    TwentyTwo,
    ThirtyThree,
}

impl MasterNumber {
    pub fn from_value(n: u64) -> Option<Self> {
        match n {
            11 => Some(Self::Eleven),
            22 => Some(Self::TwentyTwo),
            33 => Some(Self::ThirtyThree),
            _ => None,
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            Self::Eleven => 11,
            Self::TwentyTwo => 22,
            Self::ThirtyThree => 33,
        }
    }
}

impl From<MasterNumber> for u32 {
    fn from(m: MasterNumber) -> u32 {
        m.value()
    }
}

impl TryFrom<u32> for MasterNumber {
    type Error = String;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::from_value(u64::from(n)).ok_or_else(|| format!("{n} is not a master number"))
    }
}

/// Digit total and its reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSumResult {
    pub full_sum: u64,
    pub reduced: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<MasterNumber>,
}

/// Volume bookkeeping. This engine always emits volume 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub volume: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<u32>,
}

/// Structured result of the engine pipeline.
///
/// `elements[0]` and `chakras[0]` are the primary tags; order is part of
/// the contract and survives serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingData {
    pub tokens: Vec<NumberToken>,
    pub sums: FullSumResult,
    pub elements: Vec<ElementTag>,
    pub chakras: Vec<ChakraTag>,
    pub phase: Phase,
    #[serde(default)]
    pub trace: serde_json::Map<String, serde_json::Value>,
}

impl ReadingData {
    pub fn primary_element(&self) -> Option<ElementTag> {
        self.elements.first().copied()
    }

    pub fn primary_chakra(&self) -> Option<ChakraTag> {
        self.chakras.first().copied()
    }

    /// Decode engine data received from a collaborator.
    pub fn from_json(body: &str) -> Result<Self, ReadingError> {
        serde_json::from_str(body).map_err(|e| ReadingError::MalformedInput(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Composer output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedMeta {
    pub engine: ReadingData,
    pub version: String,
}

/// Narrative fields derived from a `ReadingData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedReading {
    pub marker_title: String,
    pub core_equation_tone: String,
    pub elemental_alignment: Vec<ElementTag>,
    pub chakra_focus: Vec<ChakraTag>,
    pub chakra_resonance: String,
    pub essence: String,
    pub intention: String,
    pub reflection_key: String,
    pub meta: ComposedMeta,
}

/// Engine data together with its composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub engine: ReadingData,
    pub composed: ComposedReading,
}
