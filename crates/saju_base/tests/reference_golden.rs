//! Golden vectors for the reference tables: ten gods, twelve stages,
//! hidden stems, the 60-cycle and the auxiliary star tables.

use saju_base::{
    ALL_BRANCHES, ALL_STEMS, ALL_TEN_GODS, Branch, FourPillars, LifeStage, Pillar,
    PillarPosition, Stem, StarKind, TenGod, life_stage, locate_stars, ten_god, year_pillar,
};

fn stem(s: &str) -> Stem {
    s.parse().unwrap()
}

fn branch(s: &str) -> Branch {
    s.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Ten gods
// ---------------------------------------------------------------------------

#[test]
fn ten_gods_total_over_all_pairs() {
    let mut seen = 0;
    for r in ALL_STEMS {
        for t in ALL_STEMS {
            let god = ten_god(r, t);
            assert!(ALL_TEN_GODS.contains(&god), "{r} vs {t}");
            seen += 1;
        }
    }
    assert_eq!(seen, 100);
}

#[test]
fn ten_gods_gap_row() {
    let expected = [
        "比肩", "劫財", "食神", "傷官", "偏財", "正財", "偏官", "正官", "偏印", "正印",
    ];
    for (t, want) in ALL_STEMS.iter().zip(expected) {
        assert_eq!(ten_god(Stem::Gap, *t).hanja(), want, "甲 vs {t}");
    }
}

#[test]
fn ten_gods_eul_row() {
    let expected = [
        "劫財", "比肩", "傷官", "食神", "正財", "偏財", "正官", "偏官", "正印", "偏印",
    ];
    for (t, want) in ALL_STEMS.iter().zip(expected) {
        assert_eq!(ten_god(Stem::Eul, *t).hanja(), want, "乙 vs {t}");
    }
}

#[test]
fn ten_gods_scenarios() {
    assert_eq!(ten_god(stem("甲"), stem("甲")), TenGod::Peer);
    assert_eq!(ten_god(stem("甲"), stem("己")), TenGod::DirectWealth);
    assert_eq!(ten_god(stem("庚"), stem("丙")), TenGod::IndirectAuthority);
    assert_eq!(ten_god(stem("癸"), stem("庚")), TenGod::DirectResource);
}

// ---------------------------------------------------------------------------
// Twelve stages
// ---------------------------------------------------------------------------

#[test]
fn twelve_stages_cover_all_cells() {
    let mut cells = 0;
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            let _ = life_stage(s, b);
            cells += 1;
        }
    }
    assert_eq!(cells, 120);
}

#[test]
fn twelve_stages_reference_cells() {
    let cases = [
        ("甲", "亥", LifeStage::LongLife),
        ("甲", "卯", LifeStage::Peak),
        ("甲", "未", LifeStage::Tomb),
        ("乙", "午", LifeStage::LongLife),
        ("乙", "寅", LifeStage::Peak),
        ("丙", "午", LifeStage::Peak),
        ("丁", "酉", LifeStage::LongLife),
        ("庚", "酉", LifeStage::Peak),
        ("辛", "子", LifeStage::LongLife),
        ("壬", "子", LifeStage::Peak),
        ("癸", "卯", LifeStage::LongLife),
        ("癸", "亥", LifeStage::Peak),
    ];
    for (s, b, want) in cases {
        assert_eq!(life_stage(stem(s), branch(b)), want, "{s} at {b}");
    }
}

#[test]
fn earth_stems_follow_fire() {
    for b in ALL_BRANCHES {
        assert_eq!(life_stage(Stem::Mu, b), life_stage(Stem::Byeong, b));
        assert_eq!(life_stage(Stem::Gi, b), life_stage(Stem::Jeong, b));
    }
}

// ---------------------------------------------------------------------------
// Hidden stems and the 60-cycle
// ---------------------------------------------------------------------------

#[test]
fn hidden_stem_table() {
    let expected = [
        "癸", "己癸辛", "甲丙戊", "乙", "戊乙癸", "丙庚戊", "丁己", "己丁乙", "庚壬戊", "辛",
        "戊辛丁", "壬甲",
    ];
    for (b, want) in ALL_BRANCHES.iter().zip(expected) {
        let got: String = b.hidden_stems().iter().map(|s| s.hanja()).collect();
        assert_eq!(got, want, "hidden stems of {b}");
    }
}

#[test]
fn year_pillars() {
    assert_eq!(year_pillar(2026).hanja(), "丙午");
    assert_eq!(year_pillar(2024).hanja(), "甲辰");
    assert_eq!(year_pillar(1984).hanja(), "甲子");
    assert_eq!(year_pillar(4).hanja(), "甲子");
    assert_eq!(year_pillar(3).hanja(), "癸亥");
}

#[test]
fn sixty_cycle_walk() {
    let mut p = Pillar::from_cycle_index(0).unwrap();
    for i in 0..60u8 {
        assert_eq!(p.cycle_index(), i);
        assert_eq!(p.stem.index() % 2, p.branch.index() % 2, "parity of {p}");
        p = p.next();
    }
    assert_eq!(p.hanja(), "甲子");
    assert_eq!(p.prev().hanja(), "癸亥");
}

#[test]
fn mixed_parity_is_invalid_reference() {
    let err = "甲丑".parse::<Pillar>().unwrap_err();
    assert!(matches!(err, saju_base::SajuError::InvalidReference(_)));
    assert!("X子".parse::<Pillar>().is_err());
    assert!("甲子丑".parse::<Pillar>().is_err());
}

// ---------------------------------------------------------------------------
// Auxiliary stars
// ---------------------------------------------------------------------------

/// A valid pillar on `b`, with the first stem of matching parity.
fn pillar_on(b: Branch) -> Pillar {
    Pillar::new(ALL_STEMS[usize::from(b.index()) % 10], b).unwrap()
}

/// A valid pillar carrying stem `s`.
fn pillar_with(s: Stem) -> Pillar {
    Pillar::new(s, ALL_BRANCHES[usize::from(s.index())]).unwrap()
}

/// Distinct glyphs at which `star` fires in the hour pillar, over the given
/// hour pillars, in sweep order.
fn hour_hits(star: StarKind, base: Pillar, hours: impl Iterator<Item = Pillar>) -> String {
    let mut out = String::new();
    for hour in hours {
        let chart = FourPillars::new(base, base, base, hour);
        for hit in locate_stars(&chart) {
            if hit.star == star && hit.position == PillarPosition::Hour {
                let glyph = hit.glyph.to_string();
                if !out.contains(&glyph) {
                    out.push_str(&glyph);
                }
            }
        }
    }
    out
}

fn every_branch() -> impl Iterator<Item = Pillar> {
    ALL_BRANCHES.into_iter().map(pillar_on)
}

fn every_pillar() -> impl Iterator<Item = Pillar> {
    (0..60u8).map(|i| Pillar::from_cycle_index(i).unwrap())
}

#[test]
fn heavenly_noble_rows() {
    // targets come back in branch order
    let expected = [
        "丑未", "子申", "酉亥", "酉亥", "丑未", "子申", "丑未", "寅午", "卯巳", "卯巳",
    ];
    for (dm, want) in ALL_STEMS.iter().zip(expected) {
        let got = hour_hits(StarKind::HeavenlyNoble, pillar_with(*dm), every_branch());
        assert_eq!(got, want, "天乙 for {dm}");
    }
}

#[test]
fn day_stem_star_rows() {
    let rows = [
        (StarKind::Literary, "巳午申酉申酉亥子寅卯"),
        (StarKind::Blade, "卯辰午未午未酉戌子丑"),
        (StarKind::Prosperity, "寅卯巳午巳午申酉亥子"),
        (StarKind::Romance, "午午寅未辰辰戌酉子申"),
        (StarKind::Academy, "亥午寅酉寅酉巳子申卯"),
        (StarKind::GoldenCarriage, "辰巳未申未申戌亥丑寅"),
    ];
    for (star, row) in rows {
        for (dm, want) in ALL_STEMS.iter().zip(row.chars()) {
            let got = hour_hits(star, pillar_with(*dm), every_branch());
            assert_eq!(got, want.to_string(), "{} for {dm}", star.hanja());
        }
    }
}

#[test]
fn month_branch_star_rows() {
    let rows = [
        (StarKind::HeavenlyVirtue, "巳庚丁申壬辛亥甲癸寅丙乙"),
        (StarKind::MonthlyVirtue, "壬庚丙甲壬庚丙甲壬庚丙甲"),
    ];
    for (star, row) in rows {
        for (month, want) in ALL_BRANCHES.iter().zip(row.chars()) {
            let got = hour_hits(star, pillar_on(*month), every_pillar());
            assert_eq!(got, want.to_string(), "{} for month {month}", star.hanja());
        }
    }
}

#[test]
fn branch_keyed_star_rows() {
    let rows = [
        (StarKind::TravelingHorse, "寅亥申巳寅亥申巳寅亥申巳"),
        (StarKind::PeachBlossom, "酉午卯子酉午卯子酉午卯子"),
        (StarKind::CanopyStar, "辰丑戌未辰丑戌未辰丑戌未"),
        (StarKind::Robbery, "巳寅亥申巳寅亥申巳寅亥申"),
    ];
    for (star, row) in rows {
        for (key, want) in ALL_BRANCHES.iter().zip(row.chars()) {
            let got = hour_hits(star, pillar_on(*key), every_branch());
            assert_eq!(got, want.to_string(), "{} for {key}", star.hanja());
        }
    }
}
