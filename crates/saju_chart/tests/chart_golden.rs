//! Integration tests for chart assembly through a calendar provider.
//!
//! Uses a fixed in-memory provider; no calendar library needed.

use saju_base::{FourPillars, Pillar, PillarPosition, StemRelation};
use saju_chart::{
    BirthDate, BirthInput, CalendarChart, CalendarError, CalendarProvider, ChartConfig,
    ChartError, Gender, LuckDirection, LunarDate, RawDecade, SolarTerm, chart_for_birth,
    chart_from_pillars, chart_with_local_cycle, decade_cycle,
};

/// Answers every supported date with the same chart: 庚午 辛巳 甲子 丙寅.
struct FixedProvider;

const START_AGE: u32 = 5;

impl FixedProvider {
    fn check(input: &BirthInput) -> Result<(), CalendarError> {
        if !(1900..=2100).contains(&input.date.year) {
            return Err(CalendarError::OutOfRange {
                year: input.date.year,
            });
        }
        Ok(())
    }
}

impl CalendarProvider for FixedProvider {
    fn resolve(&self, input: &BirthInput) -> Result<CalendarChart, CalendarError> {
        Self::check(input)?;
        Ok(CalendarChart {
            year: "庚午".into(),
            month: "辛巳".into(),
            day: "甲子".into(),
            hour: "丙寅".into(),
            solar: input.date,
            lunar: LunarDate {
                year: input.date.year,
                month: 4,
                day: 21,
                is_leap_month: false,
            },
            solar_term: Some(SolarTerm {
                name: "立夏".into(),
                date: BirthDate::new(input.date.year, 5, 6).unwrap(),
            }),
        })
    }

    fn decade_cycle(
        &self,
        input: &BirthInput,
        direction: LuckDirection,
    ) -> Result<Vec<RawDecade>, CalendarError> {
        Self::check(input)?;
        let month: Pillar = "辛巳".parse().unwrap();
        decade_cycle(month, direction, START_AGE, input.date.year, 10)
            .map_err(|e| CalendarError::Unavailable(e.to_string()))
    }
}

/// Reports a mixed-parity day pillar and no decades.
struct BrokenProvider;

impl CalendarProvider for BrokenProvider {
    fn resolve(&self, input: &BirthInput) -> Result<CalendarChart, CalendarError> {
        let mut chart = FixedProvider.resolve(input)?;
        chart.day = "甲丑".into();
        Ok(chart)
    }

    fn decade_cycle(
        &self,
        _input: &BirthInput,
        _direction: LuckDirection,
    ) -> Result<Vec<RawDecade>, CalendarError> {
        Err(CalendarError::Unavailable("offline".into()))
    }
}

fn input(gender: Gender) -> BirthInput {
    let json = format!(
        r#"{{"date":"1990-05-15","time":"04:30","gender":"{}","calendar":{{"kind":"solar"}}}}"#,
        gender.name()
    );
    serde_json::from_str(&json).unwrap()
}

fn config() -> ChartConfig {
    ChartConfig {
        reference_year: Some(2026),
        ..ChartConfig::default()
    }
}

#[test]
fn full_chart_through_provider() {
    let chart = chart_for_birth(&FixedProvider, &input(Gender::Male), &config()).unwrap();
    assert_eq!(chart.pillars.day.to_string(), "甲子");
    assert_eq!(chart.details.len(), 4);
    assert_eq!(chart.luck_direction, LuckDirection::Forward);
    assert_eq!(chart.decades.len(), 10);
    assert_eq!(chart.decades[0].pillar.hanja(), "壬午");
    let cal = chart.calendar.as_ref().unwrap();
    assert_eq!(cal.solar.to_string(), "1990-05-15");
    assert_eq!(cal.solar_term.as_ref().unwrap().name, "立夏");
    assert_eq!(chart.annual.as_ref().unwrap().pillar.hanja(), "丙午");
}

#[test]
fn gender_reverses_decades() {
    let male = chart_for_birth(&FixedProvider, &input(Gender::Male), &config()).unwrap();
    let female = chart_for_birth(&FixedProvider, &input(Gender::Female), &config()).unwrap();
    assert_eq!(female.luck_direction, LuckDirection::Backward);
    assert_ne!(male.decades[0].pillar, female.decades[0].pillar);
    assert_eq!(female.decades[0].pillar.hanja(), "庚辰");

    for chart in [&male, &female] {
        for d in &chart.decades {
            assert_eq!(d.pillar.hanja().chars().count(), 2);
        }
        for w in chart.decades.windows(2) {
            assert!(w[0].start_age < w[1].start_age);
        }
        assert!(chart.decades.iter().filter(|d| d.is_current).count() <= 1);
    }
}

#[test]
fn calendar_failures_are_invalid_input() {
    let mut birth = input(Gender::Male);
    birth.date = BirthDate::new(1850, 1, 1).unwrap();
    let err = chart_for_birth(&FixedProvider, &birth, &config()).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err, ChartError::Calendar(CalendarError::OutOfRange { year: 1850 }));
}

#[test]
fn bad_provider_pillars_are_invalid_reference() {
    let err = chart_for_birth(&BrokenProvider, &input(Gender::Male), &config()).unwrap_err();
    assert!(matches!(err, ChartError::Saju(_)));
    assert!(!err.is_invalid_input());
}

#[test]
fn provider_decade_failure_propagates() {
    // pillars resolve, decades fail
    struct DecadesDown;
    impl CalendarProvider for DecadesDown {
        fn resolve(&self, input: &BirthInput) -> Result<CalendarChart, CalendarError> {
            FixedProvider.resolve(input)
        }
        fn decade_cycle(
            &self,
            input: &BirthInput,
            direction: LuckDirection,
        ) -> Result<Vec<RawDecade>, CalendarError> {
            BrokenProvider.decade_cycle(input, direction)
        }
    }
    let err = chart_for_birth(&DecadesDown, &input(Gender::Male), &config()).unwrap_err();
    assert!(matches!(err, ChartError::Calendar(CalendarError::Unavailable(_))));

    let no_luck = ChartConfig {
        include_luck: false,
        ..config()
    };
    assert!(chart_for_birth(&DecadesDown, &input(Gender::Male), &no_luck).is_ok());
}

#[test]
fn from_pillars_matches_provider_chart() {
    let pillars = FourPillars::parse("庚午", "辛巳", "甲子", "丙寅").unwrap();
    let month: Pillar = "辛巳".parse().unwrap();
    let raw = decade_cycle(month, LuckDirection::Forward, START_AGE, 1990, 10).unwrap();
    let direct = chart_from_pillars(pillars, Gender::Male, &raw, &config()).unwrap();
    let local = chart_with_local_cycle(pillars, Gender::Male, START_AGE, 1990, &config()).unwrap();
    let via = chart_for_birth(&FixedProvider, &input(Gender::Male), &config()).unwrap();

    assert_eq!(direct, local);
    assert_eq!(direct.decades, via.decades);
    assert_eq!(direct.elements, via.elements);
    assert!(direct.calendar.is_none());
}

#[test]
fn json_output_contract() {
    let chart = chart_for_birth(&FixedProvider, &input(Gender::Male), &config()).unwrap();
    let v = serde_json::to_value(&chart).unwrap();

    assert_eq!(v["pillars"]["year"], "庚午");
    assert_eq!(v["gender"], "male");
    assert_eq!(v["details"][2]["stemRelation"], "self");
    assert_eq!(v["details"][0]["stemRelation"], "indirectAuthority");
    assert_eq!(v["details"][2]["position"], "day");
    assert_eq!(v["details"][2]["lifeStage"], "bath");
    assert_eq!(v["dayMaster"]["stem"], "甲");
    assert!(v["dayMaster"]["breakdown"]["factors"].is_array());
    assert_eq!(v["elements"]["shares"].as_array().unwrap().len(), 5);
    assert!(v["usefulElement"]["lucky"]["colors"].is_array());
    assert!(v["structure"]["pattern"].is_string());
    assert_eq!(v["luckDirection"], "forward");
    assert_eq!(v["decades"][0]["pillar"], "壬午");
    assert_eq!(v["annual"]["year"], 2026);
    assert_eq!(v["calendar"]["solar"], "1990-05-15");
    assert_eq!(v["calendar"]["lunar"]["isLeapMonth"], false);

    let day = &chart.details[2];
    assert_eq!(day.position, PillarPosition::Day);
    assert_eq!(day.stem_relation, StemRelation::SelfReference);
}
