// =============================================================================
// Shared types used across the Pulse Deck backend
// =============================================================================

use serde::{Deserialize, Serialize};

/// Discrete trading signal derived from a numeric indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Human-readable interpretation of an indicator value: the signal category,
/// a short uppercase tag, a display colour hint, and a one-line description.
///
/// Classifications are static records selected by the threshold ladder; they
/// carry no computed state, so they are `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub signal: Signal,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Signal::Sell).unwrap(), "\"sell\"");
        assert_eq!(
            serde_json::to_string(&Signal::Neutral).unwrap(),
            "\"neutral\""
        );
    }

    #[test]
    fn signal_display_matches_serde() {
        assert_eq!(Signal::Buy.to_string(), "buy");
        assert_eq!(Signal::Neutral.to_string(), "neutral");
    }
}
