//! Auxiliary stars (신살).
//!
//! Each star has its own keying rule:
//! - day stem → target branches, checked at all four branch positions;
//! - month branch → a target stem or branch, found anywhere in the chart;
//! - day branch and year branch → a derived target branch, checked at all
//!   four branch positions.
//!
//! Stars keyed by both day and year branch differ in how they report a
//! position reached by both keys. 驛馬, 桃花 and 華蓋 annotate such a
//! position once. 劫殺 annotates it once per key.

use serde::Serialize;

use crate::branch::Branch;
use crate::interactions::Glyph;
use crate::pillar::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::stem::Stem;

/// The auxiliary stars located by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StarKind {
    /// 天乙貴人
    HeavenlyNoble,
    /// 文昌貴人
    Literary,
    /// 羊刃
    Blade,
    /// 建祿
    Prosperity,
    /// 紅艶殺
    Romance,
    /// 學堂貴人
    Academy,
    /// 金輿
    GoldenCarriage,
    /// 天德貴人
    HeavenlyVirtue,
    /// 月德貴人
    MonthlyVirtue,
    /// 驛馬
    TravelingHorse,
    /// 桃花
    PeachBlossom,
    /// 華蓋
    CanopyStar,
    /// 劫殺
    Robbery,
}

/// All stars in locator order.
pub const ALL_STARS: [StarKind; 13] = [
    StarKind::HeavenlyNoble,
    StarKind::Literary,
    StarKind::Blade,
    StarKind::Prosperity,
    StarKind::Romance,
    StarKind::Academy,
    StarKind::GoldenCarriage,
    StarKind::HeavenlyVirtue,
    StarKind::MonthlyVirtue,
    StarKind::TravelingHorse,
    StarKind::PeachBlossom,
    StarKind::CanopyStar,
    StarKind::Robbery,
];

/// Benefic or malefic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StarNature {
    Benefic,
    Malefic,
}

/// Which chart glyph keyed the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StarBasis {
    DayStem,
    MonthBranch,
    DayBranch,
    YearBranch,
}

impl StarKind {
    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "天乙貴人",
            Self::Literary => "文昌貴人",
            Self::Blade => "羊刃",
            Self::Prosperity => "建祿",
            Self::Romance => "紅艶殺",
            Self::Academy => "學堂貴人",
            Self::GoldenCarriage => "金輿",
            Self::HeavenlyVirtue => "天德貴人",
            Self::MonthlyVirtue => "月德貴人",
            Self::TravelingHorse => "驛馬",
            Self::PeachBlossom => "桃花",
            Self::CanopyStar => "華蓋",
            Self::Robbery => "劫殺",
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "천을귀인",
            Self::Literary => "문창귀인",
            Self::Blade => "양인",
            Self::Prosperity => "건록",
            Self::Romance => "홍염살",
            Self::Academy => "학당귀인",
            Self::GoldenCarriage => "금여",
            Self::HeavenlyVirtue => "천덕귀인",
            Self::MonthlyVirtue => "월덕귀인",
            Self::TravelingHorse => "역마",
            Self::PeachBlossom => "도화",
            Self::CanopyStar => "화개",
            Self::Robbery => "겁살",
        }
    }

    pub const fn nature(self) -> StarNature {
        match self {
            Self::Blade | Self::Romance | Self::PeachBlossom | Self::Robbery => {
                StarNature::Malefic
            }
            _ => StarNature::Benefic,
        }
    }

    /// Short traditional meaning.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::HeavenlyNoble => "help from benefactors; danger turns to safety",
            Self::Literary => "intelligence, scholarship and writing",
            Self::Blade => "forceful drive; prone to conflict and injury",
            Self::Prosperity => "self-made stability and steady income",
            Self::Romance => "strong attraction and romantic entanglement",
            Self::Academy => "aptitude for study and credentials",
            Self::GoldenCarriage => "comfort, refinement and a supportive spouse",
            Self::HeavenlyVirtue => "heavenly protection that softens misfortune",
            Self::MonthlyVirtue => "virtue and goodwill that ward off harm",
            Self::TravelingHorse => "movement, travel and change of place",
            Self::PeachBlossom => "charm and popularity; risk of scandal",
            Self::CanopyStar => "solitude, spirituality and the arts",
            Self::Robbery => "sudden loss or being taken advantage of",
        }
    }
}

/// A star found at one chart position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryStar {
    pub star: StarKind,
    pub name: &'static str,
    pub nature: StarNature,
    pub position: PillarPosition,
    /// The glyph at `position` that matched.
    pub glyph: Glyph,
    pub basis: StarBasis,
    pub meaning: &'static str,
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

use Branch::{Chuk, Hae, In, Ja, Jin, Mi, Myo, O, Sa, Sul, Yu};
const SHEN: Branch = Branch::Sin;

/// 天乙貴人 by day stem (甲..癸).
const HEAVENLY_NOBLE: [&[Branch]; 10] = [
    &[Chuk, Mi], // 甲
    &[Ja, SHEN], // 乙
    &[Hae, Yu],  // 丙
    &[Hae, Yu],  // 丁
    &[Chuk, Mi], // 戊
    &[Ja, SHEN], // 己
    &[Chuk, Mi], // 庚
    &[In, O],    // 辛
    &[Sa, Myo],  // 壬
    &[Sa, Myo],  // 癸
];

/// 文昌貴人 by day stem.
const LITERARY: [Branch; 10] = [Sa, O, SHEN, Yu, SHEN, Yu, Hae, Ja, In, Myo];

/// 羊刃 by day stem.
const BLADE: [Branch; 10] = [Myo, Jin, O, Mi, O, Mi, Yu, Sul, Ja, Chuk];

/// 建祿 by day stem.
const PROSPERITY: [Branch; 10] = [In, Myo, Sa, O, Sa, O, SHEN, Yu, Hae, Ja];

/// 紅艶殺 by day stem.
const ROMANCE: [Branch; 10] = [O, O, In, Mi, Jin, Jin, Sul, Yu, Ja, SHEN];

/// 學堂貴人 by day stem.
const ACADEMY: [Branch; 10] = [Hae, O, In, Yu, In, Yu, Sa, Ja, SHEN, Myo];

/// 金輿 by day stem.
const GOLDEN_CARRIAGE: [Branch; 10] = [Jin, Sa, Mi, SHEN, Mi, SHEN, Sul, Hae, Chuk, In];

/// 天德貴人 by month branch (子..亥); the target is a stem or a branch.
const HEAVENLY_VIRTUE: [Glyph; 12] = [
    Glyph::Branch(Sa),         // 子
    Glyph::Stem(Stem::Gyeong), // 丑
    Glyph::Stem(Stem::Jeong),  // 寅
    Glyph::Branch(SHEN),       // 卯
    Glyph::Stem(Stem::Im),     // 辰
    Glyph::Stem(Stem::Sin),    // 巳
    Glyph::Branch(Hae),        // 午
    Glyph::Stem(Stem::Gap),    // 未
    Glyph::Stem(Stem::Gye),    // 申
    Glyph::Branch(In),         // 酉
    Glyph::Stem(Stem::Byeong), // 戌
    Glyph::Stem(Stem::Eul),    // 亥
];

/// 月德貴人 by month branch.
const MONTHLY_VIRTUE: [Stem; 12] = [
    Stem::Im,     // 子
    Stem::Gyeong, // 丑
    Stem::Byeong, // 寅
    Stem::Gap,    // 卯
    Stem::Im,     // 辰
    Stem::Gyeong, // 巳
    Stem::Byeong, // 午
    Stem::Gap,    // 未
    Stem::Im,     // 申
    Stem::Gyeong, // 酉
    Stem::Byeong, // 戌
    Stem::Gap,    // 亥
];

/// 驛馬 by day/year branch.
const TRAVELING_HORSE: [Branch; 12] = [In, Hae, SHEN, Sa, In, Hae, SHEN, Sa, In, Hae, SHEN, Sa];

/// 桃花 by day/year branch.
const PEACH_BLOSSOM: [Branch; 12] = [Yu, O, Myo, Ja, Yu, O, Myo, Ja, Yu, O, Myo, Ja];

/// 華蓋 by day/year branch.
const CANOPY: [Branch; 12] = [Jin, Chuk, Sul, Mi, Jin, Chuk, Sul, Mi, Jin, Chuk, Sul, Mi];

/// 劫殺 by day/year branch.
const ROBBERY: [Branch; 12] = [Sa, In, Hae, SHEN, Sa, In, Hae, SHEN, Sa, In, Hae, SHEN];

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

fn annotate(
    star: StarKind,
    position: PillarPosition,
    glyph: Glyph,
    basis: StarBasis,
) -> AuxiliaryStar {
    log::trace!("star {} at {} {glyph}", star.hanja(), position.name());
    AuxiliaryStar {
        star,
        name: star.hanja(),
        nature: star.nature(),
        position,
        glyph,
        basis,
        meaning: star.meaning(),
    }
}

/// Annotate every branch position whose branch is in `targets`.
fn locate_branches(
    pillars: &FourPillars,
    star: StarKind,
    targets: &[Branch],
    basis: StarBasis,
    out: &mut Vec<AuxiliaryStar>,
) {
    for pos in ALL_POSITIONS {
        let branch = pillars.get(pos).branch;
        if targets.contains(&branch) {
            out.push(annotate(star, pos, Glyph::Branch(branch), basis));
        }
    }
}

/// Annotate every position holding `target` (stem or branch).
fn locate_glyph(
    pillars: &FourPillars,
    star: StarKind,
    target: Glyph,
    basis: StarBasis,
    out: &mut Vec<AuxiliaryStar>,
) {
    for pos in ALL_POSITIONS {
        let pillar = pillars.get(pos);
        let hit = match target {
            Glyph::Stem(s) => pillar.stem == s,
            Glyph::Branch(b) => pillar.branch == b,
        };
        if hit {
            out.push(annotate(star, pos, target, basis));
        }
    }
}

/// Day- and year-branch keyed star; each position annotated at most once.
fn locate_deduped(
    pillars: &FourPillars,
    star: StarKind,
    table: &[Branch; 12],
    out: &mut Vec<AuxiliaryStar>,
) {
    let by_day = table[pillars.day.branch.index() as usize];
    let by_year = table[pillars.year.branch.index() as usize];
    for pos in ALL_POSITIONS {
        let branch = pillars.get(pos).branch;
        let basis = if branch == by_day {
            StarBasis::DayBranch
        } else if branch == by_year {
            StarBasis::YearBranch
        } else {
            continue;
        };
        out.push(annotate(star, pos, Glyph::Branch(branch), basis));
    }
}

/// Day- and year-branch keyed star; one annotation per key per position.
fn locate_per_key(
    pillars: &FourPillars,
    star: StarKind,
    table: &[Branch; 12],
    out: &mut Vec<AuxiliaryStar>,
) {
    let by_day = table[pillars.day.branch.index() as usize];
    let by_year = table[pillars.year.branch.index() as usize];
    locate_branches(pillars, star, &[by_day], StarBasis::DayBranch, out);
    locate_branches(pillars, star, &[by_year], StarBasis::YearBranch, out);
}

/// Locate all auxiliary stars in a chart, in [`ALL_STARS`] order.
pub fn locate_stars(pillars: &FourPillars) -> Vec<AuxiliaryStar> {
    let day = pillars.day_master().index() as usize;
    let month = pillars.month.branch.index() as usize;
    let mut out = Vec::new();

    locate_branches(
        pillars,
        StarKind::HeavenlyNoble,
        HEAVENLY_NOBLE[day],
        StarBasis::DayStem,
        &mut out,
    );
    let by_day_stem: [(StarKind, &[Branch; 10]); 6] = [
        (StarKind::Literary, &LITERARY),
        (StarKind::Blade, &BLADE),
        (StarKind::Prosperity, &PROSPERITY),
        (StarKind::Romance, &ROMANCE),
        (StarKind::Academy, &ACADEMY),
        (StarKind::GoldenCarriage, &GOLDEN_CARRIAGE),
    ];
    for (star, table) in by_day_stem {
        locate_branches(pillars, star, &[table[day]], StarBasis::DayStem, &mut out);
    }

    locate_glyph(
        pillars,
        StarKind::HeavenlyVirtue,
        HEAVENLY_VIRTUE[month],
        StarBasis::MonthBranch,
        &mut out,
    );
    locate_glyph(
        pillars,
        StarKind::MonthlyVirtue,
        Glyph::Stem(MONTHLY_VIRTUE[month]),
        StarBasis::MonthBranch,
        &mut out,
    );

    locate_deduped(pillars, StarKind::TravelingHorse, &TRAVELING_HORSE, &mut out);
    locate_deduped(pillars, StarKind::PeachBlossom, &PEACH_BLOSSOM, &mut out);
    locate_deduped(pillars, StarKind::CanopyStar, &CANOPY, &mut out);
    locate_per_key(pillars, StarKind::Robbery, &ROBBERY, &mut out);

    out
}
