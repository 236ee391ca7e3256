//! Weekday keys for template and schedule lookup

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day of the week, ordered Monday..Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in index order
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Zero-based position, Monday = 0
    pub fn index(self) -> usize {
        self as usize
    }

    /// Weekday of a calendar date
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.name().to_lowercase() == lowered)
            .ok_or_else(|| format!("Unknown weekday: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_ordering() {
        assert!(Weekday::Monday < Weekday::Tuesday);
        assert!(Weekday::Saturday < Weekday::Sunday);
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
    }

    #[test]
    fn test_weekday_of_date() {
        let monday = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(Weekday::of(monday), Weekday::Monday);

        let sunday = NaiveDate::from_ymd_opt(2025, 12, 7).unwrap();
        assert_eq!(Weekday::of(sunday), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!(" FRIDAY ".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");

        let day: Weekday = serde_json::from_str("\"Saturday\"").unwrap();
        assert_eq!(day, Weekday::Saturday);
    }
}
