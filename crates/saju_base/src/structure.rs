//! Structure (격국) classification from the month branch.

use serde::Serialize;

use crate::pillar::FourPillars;
use crate::stem::Stem;
use crate::ten_gods::{TenGod, ten_god};

/// Chart structure named after the month branch's dominant hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StructurePattern {
    /// 建祿格, from a peer.
    EstablishedFortune,
    /// 羊刃格, from a rival.
    Blade,
    Expression,
    Output,
    IndirectWealth,
    DirectWealth,
    IndirectAuthority,
    DirectAuthority,
    IndirectResource,
    DirectResource,
}

impl StructurePattern {
    pub const fn from_ten_god(god: TenGod) -> Self {
        match god {
            TenGod::Peer => Self::EstablishedFortune,
            TenGod::Rival => Self::Blade,
            TenGod::Expression => Self::Expression,
            TenGod::Output => Self::Output,
            TenGod::IndirectWealth => Self::IndirectWealth,
            TenGod::DirectWealth => Self::DirectWealth,
            TenGod::IndirectAuthority => Self::IndirectAuthority,
            TenGod::DirectAuthority => Self::DirectAuthority,
            TenGod::IndirectResource => Self::IndirectResource,
            TenGod::DirectResource => Self::DirectResource,
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::EstablishedFortune => "建祿格",
            Self::Blade => "羊刃格",
            Self::Expression => "食神格",
            Self::Output => "傷官格",
            Self::IndirectWealth => "偏財格",
            Self::DirectWealth => "正財格",
            Self::IndirectAuthority => "偏官格",
            Self::DirectAuthority => "正官格",
            Self::IndirectResource => "偏印格",
            Self::DirectResource => "正印格",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::EstablishedFortune => "건록격",
            Self::Blade => "양인격",
            Self::Expression => "식신격",
            Self::Output => "상관격",
            Self::IndirectWealth => "편재격",
            Self::DirectWealth => "정재격",
            Self::IndirectAuthority => "편관격",
            Self::DirectAuthority => "정관격",
            Self::IndirectResource => "편인격",
            Self::DirectResource => "정인격",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureClass {
    pub pattern: StructurePattern,
    /// e.g. "month branch 寅 dominant stem 甲 is peer".
    pub basis: String,
    pub month_hidden_stem: Stem,
    pub ten_god: TenGod,
}

/// Classify the chart structure from the month branch's dominant hidden stem.
pub fn classify_structure(pillars: &FourPillars) -> StructureClass {
    let month_branch = pillars.month.branch;
    let month_hidden_stem = month_branch.dominant_stem();
    let god = ten_god(pillars.day_master(), month_hidden_stem);
    StructureClass {
        pattern: StructurePattern::from_ten_god(god),
        basis: format!(
            "month branch {month_branch} dominant stem {month_hidden_stem} is {}",
            god.name()
        ),
        month_hidden_stem,
        ten_god: god,
    }
}
