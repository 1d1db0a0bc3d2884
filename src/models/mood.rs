//! The cat's mood

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display state of the tracker, derived from the latest evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Only ever the initial state
    #[default]
    Hungry,
    Happy,
    Neutral,
    Spa,
}

impl Mood {
    /// Emoji shown next to the mood in console output
    pub fn face(&self) -> &'static str {
        match self {
            Mood::Hungry => "🙀",
            Mood::Happy => "😺",
            Mood::Neutral => "😐",
            Mood::Spa => "🛁🐱",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Hungry => write!(f, "hungry"),
            Mood::Happy => write!(f, "happy"),
            Mood::Neutral => write!(f, "neutral"),
            Mood::Spa => write!(f, "spa"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hungry() {
        assert_eq!(Mood::default(), Mood::Hungry);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mood::Happy.to_string(), "happy");
        assert_eq!(Mood::Spa.to_string(), "spa");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Mood::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }
}
