//! Reference tables and pure analyzers for four-pillars (saju) charts.
//!
//! This crate provides:
//! - The 10 stems, 12 branches with hidden stems, and the 60-cycle
//! - Ten gods, twelve life stages, and five-element distribution
//! - Branch and stem interactions and auxiliary stars
//! - Day-master strength, useful element, and structure classification
//!
//! Everything here is a total, deterministic function of typed inputs.
//! The only fallible operations parse identifiers from strings or indices.

pub mod branch;
pub mod element;
pub mod error;
pub mod five_elements;
pub mod interactions;
pub mod pillar;
pub mod stars;
pub mod stem;
pub mod strength;
pub mod structure;
pub mod ten_gods;
pub mod twelve_stages;
pub mod useful_element;

pub use branch::{ALL_BRANCHES, Branch, HiddenStem, HiddenTier};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::SajuError;
pub use five_elements::{BalanceVerdict, ElementDistribution, ElementShare, element_distribution};
pub use interactions::{
    Glyph, Interaction, InteractionKind, InteractionMember, detect_interactions, is_clash,
    six_harmony,
};
pub use pillar::{
    ALL_POSITIONS, FourPillars, Pillar, PillarPosition, SEXAGENARY_EPOCH_YEAR, year_pillar,
};
pub use stars::{ALL_STARS, AuxiliaryStar, StarBasis, StarKind, StarNature, locate_stars};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{DayMasterProfile, StrengthBreakdown, day_master_strength};
pub use structure::{StructureClass, StructurePattern, classify_structure};
pub use ten_gods::{ALL_TEN_GODS, StemRelation, TenGod, TenGodFamily, branch_ten_god, ten_god};
pub use twelve_stages::{ALL_LIFE_STAGES, LifeStage, life_stage};
pub use useful_element::{
    LuckyAttributes, ResolutionMethod, UsefulElementProfile, lucky_attributes, useful_element,
};
