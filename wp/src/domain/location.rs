//! Allowed class locations

use serde::{Deserialize, Serialize};

/// A place where classes may be held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Huntington Beach")]
    HuntingtonBeach,
    Irvine,
    #[serde(rename = "Long Beach")]
    LongBeach,
    #[serde(rename = "San Diego")]
    SanDiego,
    #[serde(rename = "Santa Monica")]
    SantaMonica,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Self::HuntingtonBeach,
        Self::Irvine,
        Self::LongBeach,
        Self::SanDiego,
        Self::SantaMonica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::HuntingtonBeach => "Huntington Beach",
            Self::Irvine => "Irvine",
            Self::LongBeach => "Long Beach",
            Self::SanDiego => "San Diego",
            Self::SantaMonica => "Santa Monica",
        }
    }

    /// Exact match against the allowed labels; anything else is no location
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.label() == label)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed() {
        assert_eq!(Location::parse("Irvine"), Some(Location::Irvine));
        assert_eq!(Location::parse("Santa Monica"), Some(Location::SantaMonica));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Location::parse("Los Angeles"), None);
        assert_eq!(Location::parse("irvine"), None);
        assert_eq!(Location::parse(""), None);
    }

    #[test]
    fn test_location_serde() {
        let json = serde_json::to_string(&Location::LongBeach).unwrap();
        assert_eq!(json, "\"Long Beach\"");
    }
}
