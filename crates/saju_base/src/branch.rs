//! The 12 earthly branches (지지) and their hidden stems (지장간).
//!
//! Hidden stems are listed dominant first. The tier of a hidden stem is its
//! position in the list: dominant (정기), middle (중기), residual (여기).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::stem::Stem;

/// The 12 earthly branches starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];
const BRANCH_ANIMALS: [&str; 12] = [
    "rat", "ox", "tiger", "rabbit", "dragon", "snake", "horse", "goat", "monkey", "rooster",
    "dog", "pig",
];

/// Hidden stems per branch, dominant first.
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Gye],                         // 子
    &[Stem::Gi, Stem::Gye, Stem::Sin],    // 丑
    &[Stem::Gap, Stem::Byeong, Stem::Mu], // 寅
    &[Stem::Eul],                         // 卯
    &[Stem::Mu, Stem::Eul, Stem::Gye],    // 辰
    &[Stem::Byeong, Stem::Gyeong, Stem::Mu], // 巳
    &[Stem::Jeong, Stem::Gi],             // 午
    &[Stem::Gi, Stem::Jeong, Stem::Eul],  // 未
    &[Stem::Gyeong, Stem::Im, Stem::Mu],  // 申
    &[Stem::Sin],                         // 酉
    &[Stem::Mu, Stem::Sin, Stem::Jeong],  // 戌
    &[Stem::Im, Stem::Gap],               // 亥
];

/// Weight tier of a hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HiddenTier {
    Dominant,
    Middle,
    Residual,
}

impl HiddenTier {
    /// Weight used by the five-element distribution.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Dominant => 0.6,
            Self::Middle => 0.3,
            Self::Residual => 0.2,
        }
    }

    /// Korean label (정기/중기/여기).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Dominant => "정기",
            Self::Middle => "중기",
            Self::Residual => "여기",
        }
    }

    const fn from_position(pos: usize) -> Self {
        match pos {
            0 => Self::Dominant,
            1 => Self::Middle,
            _ => Self::Residual,
        }
    }
}

/// A hidden stem with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HiddenStem {
    pub stem: Stem,
    pub tier: HiddenTier,
}

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at a 0-based index.
    pub fn from_index(index: u8) -> Result<Self, SajuError> {
        ALL_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or_else(|| SajuError::InvalidReference(format!("branch index {index}")))
    }

    /// Branch at any integer offset, wrapping around the 12-cycle.
    pub fn from_cycle(offset: i64) -> Self {
        ALL_BRANCHES[offset.rem_euclid(12) as usize]
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    /// Korean reading.
    pub const fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    /// Romanized name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    /// Main element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Polarity of the branch (even index = yang).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems, dominant first (1 to 3 entries).
    pub const fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Dominant (first) hidden stem.
    pub const fn dominant_stem(self) -> Stem {
        HIDDEN_STEMS[self.index() as usize][0]
    }

    /// Hidden stems paired with their weight tier.
    pub fn hidden_stem_tiers(self) -> impl Iterator<Item = HiddenStem> {
        self.hidden_stems()
            .iter()
            .enumerate()
            .map(|(pos, &stem)| HiddenStem {
                stem,
                tier: HiddenTier::from_position(pos),
            })
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for Branch {
    type Err = SajuError;

    /// Accepts the hanja glyph, the Korean reading, or the romanized name
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.hanja() == s || b.korean() == s || b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SajuError::InvalidReference(format!("unknown branch '{s}'")))
    }
}

impl TryFrom<String> for Branch {
    type Error = SajuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Branch> for String {
    fn from(branch: Branch) -> Self {
        branch.hanja().to_string()
    }
}
