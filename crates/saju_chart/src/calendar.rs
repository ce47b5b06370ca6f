//! Birth input and the calendar-provider boundary.
//!
//! Converting a civil birth instant into four pillars, lunar forms and the
//! governing solar term belongs to an external calendrical library. This
//! module defines what that provider receives and returns; the chart core
//! never does date arithmetic of its own.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use saju_base::SajuError;

use crate::error::CalendarError;
use crate::luck_types::LuckDirection;

/// Gender of the native; combines with stem polarity for luck direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남성" => Ok(Self::Male),
            "female" | "f" | "여" | "여성" => Ok(Self::Female),
            other => Err(SajuError::InvalidInput(format!("unknown gender '{other}'"))),
        }
    }
}

/// Calendar date, `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl BirthDate {
    /// Validated proleptic Gregorian date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, SajuError> {
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(|_| Self { year, month, day })
            .ok_or_else(|| {
                SajuError::InvalidInput(format!("{year:04}-{month:02}-{day:02} is not a date"))
            })
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BirthDate {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| SajuError::InvalidInput(format!("date '{s}': {e}")))?;
        Ok(Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        })
    }
}

impl TryFrom<String> for BirthDate {
    type Error = SajuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BirthDate> for String {
    fn from(d: BirthDate) -> Self {
        d.to_string()
    }
}

/// Wall-clock birth time, `HH:mm` (24-hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthTime {
    pub hour: u8,
    pub minute: u8,
}

impl Display for BirthTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for BirthTime {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| SajuError::InvalidInput(format!("time '{s}': {e}")))?;
        Ok(Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        })
    }
}

impl TryFrom<String> for BirthTime {
    type Error = SajuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BirthTime> for String {
    fn from(t: BirthTime) -> Self {
        t.to_string()
    }
}

/// Calendar in which the birth date is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CalendarSystem {
    Solar,
    Lunar {
        #[serde(rename = "leapMonth", default)]
        leap_month: bool,
    },
}

impl FromStr for CalendarSystem {
    type Err = SajuError;

    /// `solar`, `lunar`, or `lunar-leap`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" | "양력" => Ok(Self::Solar),
            "lunar" | "음력" => Ok(Self::Lunar { leap_month: false }),
            "lunar-leap" | "윤달" => Ok(Self::Lunar { leap_month: true }),
            other => Err(SajuError::InvalidInput(format!(
                "unknown calendar system '{other}'"
            ))),
        }
    }
}

/// Everything the surrounding application knows about a birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub date: BirthDate,
    pub time: BirthTime,
    pub gender: Gender,
    pub calendar: CalendarSystem,
}

/// Lunar form of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub is_leap_month: bool,
}

/// The solar term (절기) governing the birth month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTerm {
    pub name: String,
    pub date: BirthDate,
}

/// Raw provider answer for one birth.
///
/// Pillars arrive as two-character stem-branch strings and are validated by
/// the chart assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarChart {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub solar: BirthDate,
    pub lunar: LunarDate,
    pub solar_term: Option<SolarTerm>,
}

/// One raw decade as a provider generates it.
///
/// Providers emit a leading entry with an empty `gan_zhi` covering the
/// years before the first decade begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDecade {
    pub start_age: u32,
    pub start_year: i32,
    pub gan_zhi: String,
}

/// External calendar and lunar-conversion service.
///
/// Implementations must be safe for concurrent reentrant calls.
pub trait CalendarProvider {
    /// Four pillars, solar and lunar forms, and solar term for a birth.
    fn resolve(&self, input: &BirthInput) -> Result<CalendarChart, CalendarError>;

    /// Raw decade sequence stepping in `direction` from the month pillar.
    fn decade_cycle(
        &self,
        input: &BirthInput,
        direction: LuckDirection,
    ) -> Result<Vec<RawDecade>, CalendarError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date() {
        let d: BirthDate = "1990-05-15".parse().unwrap();
        assert_eq!((d.year, d.month, d.day), (1990, 5, 15));
        assert_eq!(d.to_string(), "1990-05-15");
        assert!("1990-02-30".parse::<BirthDate>().is_err());
        assert!("15/05/1990".parse::<BirthDate>().is_err());
        assert!(BirthDate::new(2024, 2, 29).is_ok());
        assert!(BirthDate::new(2023, 2, 29).is_err());
    }

    #[test]
    fn parse_time() {
        let t: BirthTime = "07:05".parse().unwrap();
        assert_eq!((t.hour, t.minute), (7, 5));
        assert_eq!(t.to_string(), "07:05");
        assert!("24:00".parse::<BirthTime>().is_err());
        assert!("7pm".parse::<BirthTime>().is_err());
    }

    #[test]
    fn parse_gender_and_calendar() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("여".parse::<Gender>().unwrap(), Gender::Female);
        assert!(matches!(
            "other".parse::<Gender>(),
            Err(SajuError::InvalidInput(_))
        ));
        assert_eq!(
            "lunar-leap".parse::<CalendarSystem>().unwrap(),
            CalendarSystem::Lunar { leap_month: true }
        );
    }

    #[test]
    fn birth_input_json() {
        let json = r#"{"date":"1990-05-15","time":"14:30","gender":"female","calendar":{"kind":"lunar","leapMonth":false}}"#;
        let input: BirthInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.time.to_string(), "14:30");
        assert_eq!(serde_json::to_string(&input).unwrap(), json);
    }
}
