use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An accounting period, `YYYY-MM`.
///
/// Every balance, rate and report query is scoped to one. Serialized
/// as the plain string form on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: u16,
    month: u8,
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid period '{0}', expected YYYY-MM")]
pub struct PeriodParseError(String);

impl Period {
    pub fn new(year: u16, month: u8) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) || year == 0 {
            return Err(PeriodParseError(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// The period immediately before this one.
    pub fn previous(&self) -> Period {
        if self.month == 1 {
            Period { year: self.year - 1, month: 12 }
        } else {
            Period { year: self.year, month: self.month - 1 }
        }
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PeriodParseError(s.to_string());
        let (y, m) = s.split_once('-').ok_or_else(err)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(err());
        }
        let year: u16 = y.parse().map_err(|_| err())?;
        let month: u8 = m.parse().map_err(|_| err())?;
        Period::new(year, month).map_err(|_| err())
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Period> for String {
    fn from(p: Period) -> String {
        p.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let p: Period = "2026-07".parse().unwrap();
        assert_eq!(p.year(), 2026);
        assert_eq!(p.month(), 7);
        assert_eq!(p.to_string(), "2026-07");
    }

    #[test]
    fn rejects_bad_input() {
        assert!("2026-13".parse::<Period>().is_err());
        assert!("2026-00".parse::<Period>().is_err());
        assert!("26-07".parse::<Period>().is_err());
        assert!("2026-7".parse::<Period>().is_err());
        assert!("garbage".parse::<Period>().is_err());
    }

    #[test]
    fn previous_crosses_year_boundary() {
        let jan: Period = "2026-01".parse().unwrap();
        assert_eq!(jan.previous().to_string(), "2025-12");
        let jul: Period = "2026-07".parse().unwrap();
        assert_eq!(jul.previous().to_string(), "2026-06");
    }

    #[test]
    fn serde_round_trip() {
        let p: Period = serde_json::from_str("\"2026-07\"").unwrap();
        assert_eq!(p.to_string(), "2026-07");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"2026-07\"");
        assert!(serde_json::from_str::<Period>("\"2026-99\"").is_err());
    }
}
