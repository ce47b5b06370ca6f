//! Decade and annual luck.
//!
//! Decades come from a raw stem-branch sequence, either generated by the
//! calendar provider or locally by [`decade_cycle`]. Annual luck is derived
//! from the year alone through the fixed 60-cycle epoch.

use saju_base::{
    ALL_POSITIONS, FourPillars, InteractionKind, Pillar, SajuError, Stem, TenGod, branch_ten_god,
    is_clash, life_stage, six_harmony, ten_god, year_pillar,
};

use crate::calendar::RawDecade;
use crate::luck_types::{AnnualLuckEntry, AnnualRelation, DecadeEntry, LuckDirection};

/// Years covered by one decade.
pub const DECADE_SPAN: u32 = 10;

/// Generate a raw decade sequence by stepping the month pillar through the
/// 60-cycle.
///
/// The first entry has an empty `gan_zhi` and covers birth up to
/// `start_age`, matching what calendar providers emit. Entry `n` (from 1)
/// starts at age `start_age + (n - 1) * 10`. Ages or years outside the
/// integer range are `InvalidInput`.
pub fn decade_cycle(
    month_pillar: Pillar,
    direction: LuckDirection,
    start_age: u32,
    birth_year: i32,
    count: u8,
) -> Result<Vec<RawDecade>, SajuError> {
    let mut out = Vec::with_capacity(usize::from(count) + 1);
    out.push(RawDecade {
        start_age: 0,
        start_year: birth_year,
        gan_zhi: String::new(),
    });

    let mut pillar = month_pillar;
    for n in 0..u32::from(count) {
        pillar = match direction {
            LuckDirection::Forward => pillar.next(),
            LuckDirection::Backward => pillar.prev(),
        };
        let age = n
            .checked_mul(DECADE_SPAN)
            .and_then(|offset| start_age.checked_add(offset))
            .ok_or_else(|| {
                SajuError::InvalidInput(format!("decade {n} age overflows from {start_age}"))
            })?;
        let start_year = i32::try_from(age)
            .ok()
            .and_then(|age| birth_year.checked_add(age))
            .ok_or_else(|| {
                SajuError::InvalidInput(format!(
                    "decade at age {age} from {birth_year} out of range"
                ))
            })?;
        out.push(RawDecade {
            start_age: age,
            start_year,
            gan_zhi: pillar.hanja(),
        });
    }
    Ok(out)
}

/// Annotate a raw decade sequence against the day master.
///
/// A leading empty entry is skipped. Later empty entries are skipped with a
/// warning. Start ages must strictly increase. When `reference_year` is
/// given, the first decade covering it is flagged current.
pub fn annotate_decades(
    raw: &[RawDecade],
    day_master: Stem,
    reference_year: Option<i32>,
) -> Result<Vec<DecadeEntry>, SajuError> {
    let mut out: Vec<DecadeEntry> = Vec::with_capacity(raw.len());
    let mut current_found = false;

    for (i, entry) in raw.iter().enumerate() {
        if entry.gan_zhi.trim().is_empty() {
            if i > 0 {
                log::warn!("skipping empty decade at index {i} (age {})", entry.start_age);
            }
            continue;
        }
        let pillar: Pillar = entry.gan_zhi.parse()?;

        if let Some(prev) = out.last() {
            if entry.start_age <= prev.start_age {
                return Err(SajuError::InvalidInput(format!(
                    "decade start ages not increasing: {} then {}",
                    prev.start_age, entry.start_age
                )));
            }
        }

        let (Some(end_age), Some(end_year)) = (
            entry.start_age.checked_add(DECADE_SPAN - 1),
            entry.start_year.checked_add(DECADE_SPAN as i32 - 1),
        ) else {
            return Err(SajuError::InvalidInput(format!(
                "decade {} at age {} ({}) runs past the integer range",
                entry.gan_zhi, entry.start_age, entry.start_year
            )));
        };
        let covers = reference_year.is_some_and(|y| (entry.start_year..=end_year).contains(&y));
        let is_current = covers && !current_found;
        current_found |= is_current;

        out.push(DecadeEntry {
            start_age: entry.start_age,
            end_age,
            start_year: entry.start_year,
            end_year,
            pillar,
            ten_god: ten_god(day_master, pillar.stem),
            branch_ten_god: branch_ten_god(day_master, pillar.branch),
            life_stage: life_stage(day_master, pillar.branch),
            stem_element: pillar.stem.element(),
            branch_element: pillar.branch.element(),
            is_current,
        });
    }

    log::debug!("annotated {} decades", out.len());
    Ok(out)
}

/// Keywords for a year whose stem stands in `god` to the day master:
/// two for the family, one for the member.
pub fn annual_keywords(god: TenGod) -> Vec<&'static str> {
    use saju_base::TenGodFamily as F;

    let family: [&'static str; 2] = match god.family() {
        F::Companion => ["independence", "peers"],
        F::Output => ["expression", "creativity"],
        F::Wealth => ["money", "practical gains"],
        F::Authority => ["career", "responsibility"],
        F::Resource => ["learning", "support"],
    };
    let member = match god {
        TenGod::Peer => "self-reliance",
        TenGod::Rival => "competition over resources",
        TenGod::Expression => "ease and enjoyment",
        TenGod::Output => "breaking convention",
        TenGod::IndirectWealth => "windfalls and ventures",
        TenGod::DirectWealth => "steady income",
        TenGod::IndirectAuthority => "pressure and challenge",
        TenGod::DirectAuthority => "promotion and recognition",
        TenGod::IndirectResource => "intuition and unconventional study",
        TenGod::DirectResource => "mentors and credentials",
    };
    vec![family[0], family[1], member]
}

/// Luck of calendar year `year` against a natal chart.
pub fn annual_luck(year: i32, pillars: &FourPillars) -> AnnualLuckEntry {
    let pillar = year_pillar(year);
    let dm = pillars.day_master();
    let god = ten_god(dm, pillar.stem);

    let mut relations = Vec::new();
    for pos in ALL_POSITIONS {
        let natal = pillars.get(pos).branch;
        if let Some(element) = six_harmony(pillar.branch, natal) {
            relations.push(AnnualRelation {
                kind: InteractionKind::SixHarmony,
                position: pos,
                natal_branch: natal,
                element: Some(element),
                description: format!(
                    "{} {} with {} branch {natal} → {}",
                    pillar.branch,
                    InteractionKind::SixHarmony.hanja(),
                    pos.name(),
                    element.name()
                ),
            });
        }
        if is_clash(pillar.branch, natal) {
            relations.push(AnnualRelation {
                kind: InteractionKind::Clash,
                position: pos,
                natal_branch: natal,
                element: None,
                description: format!(
                    "{} {} with {} branch {natal}",
                    pillar.branch,
                    InteractionKind::Clash.hanja(),
                    pos.name()
                ),
            });
        }
    }

    AnnualLuckEntry {
        year,
        pillar,
        element: pillar.stem.element(),
        branch_element: pillar.branch.element(),
        ten_god: god,
        branch_ten_god: branch_ten_god(dm, pillar.branch),
        keywords: annual_keywords(god),
        relations,
    }
}
