//! Types for decade and annual luck.

use serde::Serialize;

use saju_base::{
    Branch, Element, InteractionKind, LifeStage, Pillar, PillarPosition, Polarity, TenGod,
};

use crate::calendar::Gender;

/// Direction in which decade pillars step from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Yang male or yin female runs forward; the other two run backward.
    pub const fn resolve(gender: Gender, polarity: Polarity) -> Self {
        match (gender, polarity) {
            (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Self::Forward,
            _ => Self::Backward,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// One annotated 10-year luck period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeEntry {
    pub start_age: u32,
    /// Inclusive, `start_age + 9`.
    pub end_age: u32,
    pub start_year: i32,
    /// Inclusive, `start_year + 9`.
    pub end_year: i32,
    pub pillar: Pillar,
    /// Decade stem against the day master.
    pub ten_god: TenGod,
    /// Decade branch (through its dominant hidden stem) against the day master.
    pub branch_ten_god: TenGod,
    /// Day master's stage at the decade branch.
    pub life_stage: LifeStage,
    pub stem_element: Element,
    pub branch_element: Element,
    pub is_current: bool,
}

/// A relation between the annual branch and one natal branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualRelation {
    /// `SixHarmony` or `Clash`.
    pub kind: InteractionKind,
    pub position: PillarPosition,
    pub natal_branch: Branch,
    /// Element formed by a harmony.
    pub element: Option<Element>,
    pub description: String,
}

/// The luck of one calendar year against a natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualLuckEntry {
    pub year: i32,
    pub pillar: Pillar,
    /// Element of the year stem.
    pub element: Element,
    pub branch_element: Element,
    pub ten_god: TenGod,
    pub branch_ten_god: TenGod,
    pub keywords: Vec<&'static str>,
    pub relations: Vec<AnnualRelation>,
}
