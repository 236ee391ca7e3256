//! Routine intensity levels

use serde::{Deserialize, Serialize};

/// How demanding a routine is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown intensity: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_display() {
        assert_eq!(Intensity::Low.to_string(), "Low");
        assert_eq!(Intensity::Medium.to_string(), "Medium");
        assert_eq!(Intensity::High.to_string(), "High");
    }

    #[test]
    fn test_intensity_parse() {
        assert_eq!("high".parse::<Intensity>().unwrap(), Intensity::High);
        assert_eq!("Low".parse::<Intensity>().unwrap(), Intensity::Low);
        assert!("extreme".parse::<Intensity>().is_err());
    }
}
