//! Chart assembly.
//!
//! Three stages run in sequence over four pillars:
//! 1. `analyze_natal`: per-pillar detail, element distribution,
//!    interactions and stars, each independent of the others;
//! 2. `resolve_balance`: day-master strength, then the useful element and
//!    structure that depend on it;
//! 3. `project_luck`: decades from a raw sequence and the annual entry.
//!
//! Entry points differ only in where pillars and the raw decade sequence
//! come from.

use saju_base::{
    AuxiliaryStar, DayMasterProfile, ElementDistribution, FourPillars, Interaction,
    PillarPosition, StemRelation, StructureClass, UsefulElementProfile, branch_ten_god,
    classify_structure, day_master_strength, detect_interactions, element_distribution,
    life_stage, locate_stars, ten_god, useful_element,
};

use crate::calendar::{BirthInput, CalendarChart, CalendarProvider, Gender, RawDecade};
use crate::chart_types::{
    CalendarInfo, ChartConfig, DirectionBasis, HiddenStemDetail, PillarDetail, SajuChart,
};
use crate::error::ChartError;
use crate::luck::{annotate_decades, annual_luck, decade_cycle};
use crate::luck_types::{AnnualLuckEntry, DecadeEntry, LuckDirection};

struct NatalAnalysis {
    details: Vec<PillarDetail>,
    elements: ElementDistribution,
    interactions: Vec<Interaction>,
    stars: Vec<AuxiliaryStar>,
}

struct Balance {
    day_master: DayMasterProfile,
    useful_element: UsefulElementProfile,
    structure: StructureClass,
}

struct LuckProjection {
    decades: Vec<DecadeEntry>,
    annual: Option<AnnualLuckEntry>,
}

/// Per-pillar detail against the day master.
pub fn pillar_details(pillars: &FourPillars) -> Vec<PillarDetail> {
    let dm = pillars.day_master();
    pillars
        .iter()
        .map(|(position, pillar)| {
            let stem_relation = if position == PillarPosition::Day {
                StemRelation::SelfReference
            } else {
                StemRelation::TenGod(ten_god(dm, pillar.stem))
            };
            let hidden_stems = pillar
                .branch
                .hidden_stem_tiers()
                .map(|h| HiddenStemDetail {
                    stem: h.stem,
                    tier: h.tier,
                    weight: h.tier.weight(),
                    ten_god: ten_god(dm, h.stem),
                })
                .collect();
            PillarDetail {
                position,
                pillar,
                stem_element: pillar.stem.element(),
                stem_polarity: pillar.stem.polarity(),
                branch_element: pillar.branch.element(),
                stem_relation,
                branch_ten_god: branch_ten_god(dm, pillar.branch),
                hidden_stems,
                life_stage: life_stage(dm, pillar.branch),
                own_stage: life_stage(pillar.stem, pillar.branch),
            }
        })
        .collect()
}

/// Luck direction for a chart under the configured polarity basis.
pub fn luck_direction(
    pillars: &FourPillars,
    gender: Gender,
    basis: DirectionBasis,
) -> LuckDirection {
    let stem = match basis {
        DirectionBasis::DayStem => pillars.day.stem,
        DirectionBasis::YearStem => pillars.year.stem,
    };
    LuckDirection::resolve(gender, stem.polarity())
}

fn analyze_natal(pillars: &FourPillars, config: &ChartConfig) -> NatalAnalysis {
    log::debug!(
        "analyzing natal chart {} {} {} {}",
        pillars.year,
        pillars.month,
        pillars.day,
        pillars.hour
    );
    let interactions = if config.include_interactions {
        detect_interactions(pillars)
    } else {
        Vec::new()
    };
    let stars = if config.include_stars {
        locate_stars(pillars)
    } else {
        Vec::new()
    };
    log::debug!("{} interactions, {} stars", interactions.len(), stars.len());
    NatalAnalysis {
        details: pillar_details(pillars),
        elements: element_distribution(pillars),
        interactions,
        stars,
    }
}

fn resolve_balance(pillars: &FourPillars, natal: &NatalAnalysis) -> Balance {
    let day_master = day_master_strength(pillars);
    let useful_element = useful_element(pillars, &natal.elements, &day_master);
    let structure = classify_structure(pillars);
    log::debug!(
        "balance: {} day master, useful {}, structure {}",
        day_master.label(),
        useful_element.useful.name(),
        structure.pattern.hanja()
    );
    Balance {
        day_master,
        useful_element,
        structure,
    }
}

fn project_luck(
    pillars: &FourPillars,
    raw: &[RawDecade],
    config: &ChartConfig,
) -> Result<LuckProjection, ChartError> {
    if !config.include_luck {
        return Ok(LuckProjection {
            decades: Vec::new(),
            annual: None,
        });
    }
    let decades = annotate_decades(raw, pillars.day_master(), config.reference_year)?;
    let annual = config.reference_year.map(|year| annual_luck(year, pillars));
    log::debug!("luck: {} decades, annual {}", decades.len(), annual.is_some());
    Ok(LuckProjection { decades, annual })
}

fn assemble(
    pillars: FourPillars,
    gender: Gender,
    raw: &[RawDecade],
    calendar: Option<CalendarInfo>,
    config: &ChartConfig,
) -> Result<SajuChart, ChartError> {
    let natal = analyze_natal(&pillars, config);
    let balance = resolve_balance(&pillars, &natal);
    let luck = project_luck(&pillars, raw, config)?;

    Ok(SajuChart {
        pillars,
        gender,
        details: natal.details,
        day_master: balance.day_master,
        elements: natal.elements,
        interactions: natal.interactions,
        stars: natal.stars,
        useful_element: balance.useful_element,
        structure: balance.structure,
        luck_direction: luck_direction(&pillars, gender, config.direction_basis),
        decades: luck.decades,
        annual: luck.annual,
        calendar,
    })
}

/// Assemble a chart from four pillars and a raw decade sequence.
pub fn chart_from_pillars(
    pillars: FourPillars,
    gender: Gender,
    raw_decades: &[RawDecade],
    config: &ChartConfig,
) -> Result<SajuChart, ChartError> {
    assemble(pillars, gender, raw_decades, None, config)
}

/// Assemble a chart from four pillars, generating decades locally from the
/// month pillar.
pub fn chart_with_local_cycle(
    pillars: FourPillars,
    gender: Gender,
    start_age: u32,
    birth_year: i32,
    config: &ChartConfig,
) -> Result<SajuChart, ChartError> {
    let direction = luck_direction(&pillars, gender, config.direction_basis);
    let raw = decade_cycle(
        pillars.month,
        direction,
        start_age,
        birth_year,
        config.decade_count,
    )?;
    assemble(pillars, gender, &raw, None, config)
}

fn parse_calendar_pillars(chart: &CalendarChart) -> Result<FourPillars, ChartError> {
    Ok(FourPillars::parse(
        &chart.year,
        &chart.month,
        &chart.day,
        &chart.hour,
    )?)
}

/// Assemble a chart for a birth through a calendar provider.
pub fn chart_for_birth<P: CalendarProvider + ?Sized>(
    provider: &P,
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<SajuChart, ChartError> {
    let resolved = provider.resolve(input)?;
    let pillars = parse_calendar_pillars(&resolved)?;
    let direction = luck_direction(&pillars, input.gender, config.direction_basis);
    let raw = if config.include_luck {
        provider.decade_cycle(input, direction)?
    } else {
        Vec::new()
    };
    let calendar = CalendarInfo {
        solar: resolved.solar,
        lunar: resolved.lunar,
        solar_term: resolved.solar_term,
    };
    assemble(pillars, input.gender, &raw, Some(calendar), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{LifeStage, TenGod};

    fn pillars() -> FourPillars {
        FourPillars::parse("庚午", "辛巳", "甲子", "丙寅").unwrap()
    }

    #[test]
    fn details_label_day_stem_as_self() {
        let details = pillar_details(&pillars());
        assert_eq!(details.len(), 4);
        assert_eq!(details[2].stem_relation, StemRelation::SelfReference);
        assert_eq!(
            details[0].stem_relation,
            StemRelation::TenGod(TenGod::IndirectAuthority)
        );
        // 子 hides only 癸
        assert_eq!(details[2].hidden_stems.len(), 1);
        assert_eq!(details[2].hidden_stems[0].ten_god, TenGod::DirectResource);
        // 甲 at 子 is bath, 丙 at 寅 is long life
        assert_eq!(details[2].life_stage, LifeStage::Bath);
        assert_eq!(details[3].own_stage, LifeStage::LongLife);
    }

    #[test]
    fn direction_basis() {
        let p = pillars();
        // day stem 甲 yang, year stem 庚 yang
        assert_eq!(
            luck_direction(&p, Gender::Male, DirectionBasis::DayStem),
            LuckDirection::Forward
        );
        assert_eq!(
            luck_direction(&p, Gender::Female, DirectionBasis::YearStem),
            LuckDirection::Backward
        );
    }

    #[test]
    fn sections_can_be_disabled() {
        let config = ChartConfig {
            include_interactions: false,
            include_stars: false,
            include_luck: false,
            reference_year: Some(2026),
            ..ChartConfig::default()
        };
        let chart = chart_with_local_cycle(pillars(), Gender::Male, 3, 1990, &config).unwrap();
        assert!(chart.interactions.is_empty());
        assert!(chart.stars.is_empty());
        assert!(chart.decades.is_empty());
        assert!(chart.annual.is_none());
    }

    #[test]
    fn oversized_start_age_is_invalid_input() {
        let config = config_2026();
        let err = chart_with_local_cycle(pillars(), Gender::Male, u32::MAX - 5, 1990, &config)
            .unwrap_err();
        assert!(err.is_invalid_input(), "{err}");
    }

    fn config_2026() -> ChartConfig {
        ChartConfig {
            reference_year: Some(2026),
            ..ChartConfig::default()
        }
    }

    #[test]
    fn local_cycle_respects_count() {
        let config = ChartConfig {
            decade_count: 8,
            reference_year: Some(2026),
            ..ChartConfig::default()
        };
        let chart = chart_with_local_cycle(pillars(), Gender::Male, 3, 1990, &config).unwrap();
        assert_eq!(chart.decades.len(), 8);
        assert_eq!(chart.current_decade().map(|d| d.start_age), Some(33));
        assert_eq!(chart.annual.as_ref().map(|a| a.year), Some(2026));
    }
}
