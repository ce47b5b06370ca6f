//! The 10 heavenly stems (천간).
//!
//! Each stem carries one element and one polarity. Stems alternate yang/yin
//! and pair off by element: 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal,
//! 壬癸 water.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::SajuError;

/// The 10 heavenly stems starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at a 0-based index.
    pub fn from_index(index: u8) -> Result<Self, SajuError> {
        ALL_STEMS
            .get(index as usize)
            .copied()
            .ok_or_else(|| SajuError::InvalidReference(format!("stem index {index}")))
    }

    /// Stem at any integer offset, wrapping around the 10-cycle.
    pub fn from_cycle(offset: i64) -> Self {
        ALL_STEMS[offset.rem_euclid(10) as usize]
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    /// Korean reading.
    pub const fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Polarity of the stem (even index = yang).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for Stem {
    type Err = SajuError;

    /// Accepts the hanja glyph, the Korean reading, or the romanized name
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| {
                stem.hanja() == s || stem.korean() == s || stem.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| SajuError::InvalidReference(format!("unknown stem '{s}'")))
    }
}

impl TryFrom<String> for Stem {
    type Error = SajuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stem> for String {
    fn from(stem: Stem) -> Self {
        stem.hanja().to_string()
    }
}
