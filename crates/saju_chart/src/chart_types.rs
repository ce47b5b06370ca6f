//! Configuration and result types for chart assembly.

use serde::{Deserialize, Serialize};

use saju_base::{
    AuxiliaryStar, DayMasterProfile, Element, ElementDistribution, FourPillars, HiddenTier,
    Interaction, LifeStage, Pillar, PillarPosition, Polarity, Stem, StemRelation,
    StructureClass, TenGod, UsefulElementProfile,
};

use crate::calendar::{BirthDate, Gender, LunarDate, SolarTerm};
use crate::luck_types::{AnnualLuckEntry, DecadeEntry, LuckDirection};

/// Which stem's polarity combines with gender to pick the luck direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionBasis {
    #[default]
    DayStem,
    YearStem,
}

/// Configuration for chart assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Year for the current-decade flag and the annual entry. `None` flags
    /// no decade and produces no annual entry.
    pub reference_year: Option<i32>,
    /// Detect branch and stem interactions.
    pub include_interactions: bool,
    /// Locate auxiliary stars.
    pub include_stars: bool,
    /// Produce decade and annual luck.
    pub include_luck: bool,
    /// Decades produced by the local cycle generator.
    pub decade_count: u8,
    pub direction_basis: DirectionBasis,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            include_interactions: true,
            include_stars: true,
            include_luck: true,
            decade_count: 10,
            direction_basis: DirectionBasis::DayStem,
        }
    }
}

/// One hidden stem of a pillar branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenStemDetail {
    pub stem: Stem,
    pub tier: HiddenTier,
    pub weight: f64,
    pub ten_god: TenGod,
}

/// Everything derived for a single pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarDetail {
    pub position: PillarPosition,
    pub pillar: Pillar,
    pub stem_element: Element,
    pub stem_polarity: Polarity,
    pub branch_element: Element,
    /// `self` for the day pillar.
    pub stem_relation: StemRelation,
    pub branch_ten_god: TenGod,
    pub hidden_stems: Vec<HiddenStemDetail>,
    /// Day master's stage at this branch.
    pub life_stage: LifeStage,
    /// This pillar's own stem at its branch.
    pub own_stage: LifeStage,
}

/// Calendar facts reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarInfo {
    pub solar: BirthDate,
    pub lunar: LunarDate,
    pub solar_term: Option<SolarTerm>,
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuChart {
    pub pillars: FourPillars,
    pub gender: Gender,
    /// Year, month, day, hour.
    pub details: Vec<PillarDetail>,
    pub day_master: DayMasterProfile,
    pub elements: ElementDistribution,
    /// Empty when interactions are disabled.
    pub interactions: Vec<Interaction>,
    /// Empty when stars are disabled.
    pub stars: Vec<AuxiliaryStar>,
    pub useful_element: UsefulElementProfile,
    pub structure: StructureClass,
    pub luck_direction: LuckDirection,
    /// Empty when luck is disabled.
    pub decades: Vec<DecadeEntry>,
    pub annual: Option<AnnualLuckEntry>,
    pub calendar: Option<CalendarInfo>,
}

impl SajuChart {
    /// The decade flagged current, if any.
    pub fn current_decade(&self) -> Option<&DecadeEntry> {
        self.decades.iter().find(|d| d.is_current)
    }
}
