// src/utils/topic_id.rs

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::AppError;

/// Composite topic identifier: a level tier plus a 1-based position inside it.
///
/// The canonical string form is `level<N>-topic-<NNN>` with the sequence
/// zero-padded to three digits, e.g. `level1-topic-007`. Identifiers are
/// assigned at content-authoring time and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopicId {
    pub level: i64,
    pub sequence: i64,
}

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^level(\d+)-topic-(\d+)$").unwrap())
}

impl TopicId {
    /// Builds an identifier from its components.
    /// Both components must be positive.
    pub fn new(level: i64, sequence: i64) -> Result<Self, AppError> {
        if level < 1 || sequence < 1 {
            return Err(AppError::InvalidIdentifier(format!(
                "Level and sequence must be positive, got level {} sequence {}",
                level, sequence
            )));
        }
        Ok(Self { level, sequence })
    }

    /// Parses the string form back into components.
    /// Unpadded sequence numbers (`level1-topic-7`) are accepted.
    pub fn decode(raw: &str) -> Result<Self, AppError> {
        let captures = id_pattern()
            .captures(raw)
            .ok_or_else(|| AppError::InvalidIdentifier(format!("Malformed topic id '{}'", raw)))?;

        let level = captures[1]
            .parse::<i64>()
            .map_err(|_| AppError::InvalidIdentifier(format!("Malformed topic id '{}'", raw)))?;
        let sequence = captures[2]
            .parse::<i64>()
            .map_err(|_| AppError::InvalidIdentifier(format!("Malformed topic id '{}'", raw)))?;

        Self::new(level, sequence)
    }

    /// Renders the canonical string form.
    pub fn encode(&self) -> String {
        format!("level{}-topic-{:03}", self.level, self.sequence)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let id = TopicId::new(3, 7).unwrap();
        assert_eq!(id.encode(), "level3-topic-007");

        let decoded = TopicId::decode(&id.encode()).unwrap();
        assert_eq!(decoded.level, 3);
        assert_eq!(decoded.sequence, 7);
    }

    #[test]
    fn test_decode_unpadded_sequence() {
        let decoded = TopicId::decode("level2-topic-7").unwrap();
        assert_eq!(decoded, TopicId { level: 2, sequence: 7 });
        // Canonical form restores the padding
        assert_eq!(decoded.encode(), "level2-topic-007");
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        for raw in [
            "",
            "intro",
            "level-topic-001",
            "level-1-topic-001",
            "levelx-topic-002",
            "level1-topic-",
            "level1_topic_001",
            "level1-topic-001-extra",
            " level1-topic-001",
        ] {
            assert!(
                TopicId::decode(raw).is_err(),
                "expected '{}' to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_positive_components() {
        assert!(TopicId::decode("level0-topic-001").is_err());
        assert!(TopicId::decode("level1-topic-000").is_err());
    }

    #[test]
    fn test_new_rejects_non_positive_components() {
        assert!(TopicId::new(0, 1).is_err());
        assert!(TopicId::new(1, 0).is_err());
        assert!(TopicId::new(-2, 5).is_err());
    }

    #[test]
    fn test_display_matches_encode() {
        let id = TopicId::new(12, 1).unwrap();
        assert_eq!(id.to_string(), "level12-topic-001");
    }
}
