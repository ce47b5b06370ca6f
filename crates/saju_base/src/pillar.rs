//! Pillars, pillar positions, and the 60-cycle (육십갑자).
//!
//! A pillar pairs one stem with one branch. Only the 60 pairs whose stem and
//! branch indices share parity occur in the cycle; 甲子 is index 0 and 癸亥
//! index 59.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::stem::Stem;

/// Year of the sexagenary epoch: CE 4 is 甲子.
pub const SEXAGENARY_EPOCH_YEAR: i32 = 4;

/// One of the four fixed pillar positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// 0-based index (Year=0 .. Hour=3).
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Hanja label of the pillar (年柱..時柱).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "時柱",
        }
    }
}

/// A stem-branch pair from the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch. Fails for mixed-parity pairs such as 甲丑,
    /// which never occur in the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, SajuError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(SajuError::InvalidReference(format!(
                "{stem}{branch} is not in the 60-cycle"
            )));
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at a 0-based cycle index (甲子=0 .. 癸亥=59).
    pub fn from_cycle_index(index: u8) -> Result<Self, SajuError> {
        if index >= 60 {
            return Err(SajuError::InvalidReference(format!("cycle index {index}")));
        }
        Ok(Self::from_cycle(i64::from(index)))
    }

    /// Pillar at any integer offset from 甲子, wrapping around the 60-cycle.
    pub fn from_cycle(offset: i64) -> Self {
        Self {
            stem: Stem::from_cycle(offset),
            branch: Branch::from_cycle(offset),
        }
    }

    /// 0-based cycle index.
    pub fn cycle_index(self) -> u8 {
        let s = i32::from(self.stem.index());
        let b = i32::from(self.branch.index());
        // Solve i ≡ s (mod 10), i ≡ b (mod 12).
        ((6 * s - 5 * b).rem_euclid(60)) as u8
    }

    /// Next pillar in the cycle.
    pub fn next(self) -> Self {
        Self::from_cycle(i64::from(self.cycle_index()) + 1)
    }

    /// Previous pillar in the cycle.
    pub fn prev(self) -> Self {
        Self::from_cycle(i64::from(self.cycle_index()) - 1)
    }

    /// Two-glyph hanja form, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Two-syllable Korean form, e.g. "갑자".
    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = SajuError;

    /// Parses a two-glyph pair in hanja ("甲子") or Korean ("갑자").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(stem), Some(branch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SajuError::InvalidReference(format!(
                "'{s}' is not a two-character stem-branch pair"
            )));
        };
        let stem: Stem = stem.to_string().parse()?;
        let branch: Branch = branch.to_string().parse()?;
        Self::new(stem, branch)
    }
}

impl TryFrom<String> for Pillar {
    type Error = SajuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.hanja()
    }
}

/// The four pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parse four two-glyph pairs in year, month, day, hour order.
    pub fn parse(year: &str, month: &str, day: &str, hour: &str) -> Result<Self, SajuError> {
        Ok(Self::new(
            year.parse()?,
            month.parse()?,
            day.parse()?,
            hour.parse()?,
        ))
    }

    /// Pillar at a position.
    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars paired with their positions, in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.iter().map(move |&pos| (pos, self.get(pos)))
    }

    /// The day master (day stem).
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Stems in chart order.
    pub const fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    /// Branches in chart order.
    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

/// Pillar of a CE year under the fixed epoch: stem index `(year - 4) mod 10`,
/// branch index `(year - 4) mod 12`.
pub fn year_pillar(ce_year: i32) -> Pillar {
    Pillar::from_cycle(i64::from(ce_year) - i64::from(SEXAGENARY_EPOCH_YEAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_round_trips_all_sixty() {
        for i in 0..60u8 {
            let p = Pillar::from_cycle_index(i).unwrap();
            assert_eq!(p.cycle_index(), i, "pillar {p}");
        }
    }

    #[test]
    fn year_pillar_at_i32_limits() {
        // i32::MIN - 4 = 60 * -35791395 + 48
        assert_eq!(year_pillar(i32::MIN).cycle_index(), 48);
        // i32::MAX - 4 = 60 * 35791394 + 3
        assert_eq!(year_pillar(i32::MAX).cycle_index(), 3);
    }

    #[test]
    fn first_and_last() {
        assert_eq!(Pillar::from_cycle_index(0).unwrap().hanja(), "甲子");
        assert_eq!(Pillar::from_cycle_index(59).unwrap().hanja(), "癸亥");
        assert!(Pillar::from_cycle_index(60).is_err());
    }

    #[test]
    fn next_and_prev_wrap() {
        let last = Pillar::from_cycle_index(59).unwrap();
        assert_eq!(last.next().hanja(), "甲子");
        assert_eq!(last.next().prev(), last);
    }

    #[test]
    fn mixed_parity_rejected() {
        assert!(Pillar::new(Stem::Gap, Branch::Chuk).is_err());
        assert!("甲丑".parse::<Pillar>().is_err());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!("甲".parse::<Pillar>().is_err());
        assert!("甲子丑".parse::<Pillar>().is_err());
        assert!("".parse::<Pillar>().is_err());
    }

    #[test]
    fn parse_korean() {
        let p: Pillar = "병오".parse().unwrap();
        assert_eq!(p.stem, Stem::Byeong);
        assert_eq!(p.branch, Branch::O);
    }

    #[test]
    fn year_2026_is_byeong_o() {
        assert_eq!(year_pillar(2026).hanja(), "丙午");
    }

    #[test]
    fn year_1984_is_gap_ja() {
        assert_eq!(year_pillar(1984).hanja(), "甲子");
        assert_eq!(year_pillar(4).hanja(), "甲子");
    }

    #[test]
    fn year_before_epoch_wraps() {
        // 3 CE is one step before 甲子
        assert_eq!(year_pillar(3).hanja(), "癸亥");
    }

    #[test]
    fn four_pillars_iter_order() {
        let fp = FourPillars::parse("庚午", "辛巳", "甲子", "丙寅").unwrap();
        let positions: Vec<_> = fp.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions, ALL_POSITIONS.to_vec());
        assert_eq!(fp.day_master(), Stem::Gap);
        assert_eq!(fp.branches()[1], Branch::Sa);
    }
}
