use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label string that does not name any variant of a closed tag set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} label: {value:?}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

/// Macro to generate a closed tag enum whose serde form is its exact label,
/// with as_str + std::str::FromStr over the same label.
macro_rules! label_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(UnknownLabel {
                        kind: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Labels are persisted and used as narrative lookup keys; never edit the text.
label_enum!(ElementTag {
    Fire => "🜂 Fire",
    Air => "🜁 Air",
    Earth => "🜃 Earth",
    Water => "🜄 Water",
});

label_enum!(ChakraTag {
    Root => "Root",
    Sacral => "Sacral",
    SolarPlexus => "Solar Plexus",
    Heart => "Heart",
    Throat => "Throat",
    ThirdEye => "Third Eye",
    Crown => "Crown",
});

impl ElementTag {
    /// Bare element name without the alchemical glyph.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Air => "Air",
            Self::Earth => "Earth",
            Self::Water => "Water",
        }
    }
}

/// Which caller-supplied field carries the reading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Text,
    Image,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn element_tag_round_trip() {
        for (variant, s) in [
            (ElementTag::Fire, "🜂 Fire"),
            (ElementTag::Air, "🜁 Air"),
            (ElementTag::Earth, "🜃 Earth"),
            (ElementTag::Water, "🜄 Water"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ElementTag::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn chakra_tag_round_trip() {
        for (variant, s) in [
            (ChakraTag::Root, "Root"),
            (ChakraTag::Sacral, "Sacral"),
            (ChakraTag::SolarPlexus, "Solar Plexus"),
            (ChakraTag::Heart, "Heart"),
            (ChakraTag::Throat, "Throat"),
            (ChakraTag::ThirdEye, "Third Eye"),
            (ChakraTag::Crown, "Crown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ChakraTag::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_exact_labels() {
        let json = serde_json::to_string(&vec![ElementTag::Water, ElementTag::Fire]).unwrap();
        assert_eq!(json, r#"["🜄 Water","🜂 Fire"]"#);

        let chakra: ChakraTag = serde_json::from_str(r#""Third Eye""#).unwrap();
        assert_eq!(chakra, ChakraTag::ThirdEye);
    }

    #[test]
    fn bare_names_are_not_labels() {
        assert!(ElementTag::from_str("Fire").is_err());
        assert!(serde_json::from_str::<ElementTag>(r#""Fire""#).is_err());
        assert!(ChakraTag::from_str("third eye").is_err());
    }

    #[test]
    fn unknown_label_error_names_the_kind() {
        let err = ChakraTag::from_str("Spleen").unwrap_err();
        assert_eq!(err.kind, "ChakraTag");
        assert!(err.to_string().contains("Spleen"));
    }

    #[test]
    fn source_type_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&SourceType::Image).unwrap(), r#""image""#);
        assert_eq!(SourceType::Text.as_str(), "text");
        assert!(serde_json::from_str::<SourceType>(r#""video""#).is_err());
    }
}
