//! Chart assembly for four-pillars (saju) charts.
//!
//! This crate provides:
//! - The calendar-provider boundary and birth input types
//! - Decade and annual luck
//! - The chart assembler that composes every analyzer in `saju_base`

pub mod calendar;
pub mod chart;
pub mod chart_types;
pub mod error;
pub mod luck;
pub mod luck_types;

pub use calendar::{
    BirthDate, BirthInput, BirthTime, CalendarChart, CalendarProvider, CalendarSystem, Gender,
    LunarDate, RawDecade, SolarTerm,
};
pub use chart::{
    chart_for_birth, chart_from_pillars, chart_with_local_cycle, luck_direction, pillar_details,
};
pub use chart_types::{
    CalendarInfo, ChartConfig, DirectionBasis, HiddenStemDetail, PillarDetail, SajuChart,
};
pub use error::{CalendarError, ChartError};
pub use luck::{DECADE_SPAN, annotate_decades, annual_keywords, annual_luck, decade_cycle};
pub use luck_types::{AnnualLuckEntry, AnnualRelation, DecadeEntry, LuckDirection};
