//! Branch and stem interactions (합충형파해).
//!
//! Pairwise rules run over every pair of the four branches: six harmonies,
//! six clashes, six destructions, six harms, the uncivil punishment, and
//! self-punishment. Set rules run over all four branches jointly: the two
//! three-member punishments, the four trines (two members = half, three =
//! full), and the four directional triads (all three required). Stem rules
//! run over every pair of the four stems: five combinations and four clashes.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::stem::Stem;

use Branch::{Chuk, Hae, In, Ja, Jin, Mi, Myo, O, Sa, Sin, Sul, Yu};

/// Interaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionKind {
    /// 六合
    SixHarmony,
    /// 六沖
    Clash,
    /// 刑 between different branches
    Punishment,
    /// 自刑
    SelfPunishment,
    /// 破
    Destruction,
    /// 害
    Harm,
    /// 三合 with two of three members
    HalfTrine,
    /// 三合 complete
    Trine,
    /// 方合
    DirectionalTriad,
    /// 天干合
    StemCombination,
    /// 天干沖
    StemClash,
}

impl InteractionKind {
    /// Hanja label.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::SixHarmony => "六合",
            Self::Clash => "沖",
            Self::Punishment => "刑",
            Self::SelfPunishment => "自刑",
            Self::Destruction => "破",
            Self::Harm => "害",
            Self::HalfTrine => "半合",
            Self::Trine => "三合",
            Self::DirectionalTriad => "方合",
            Self::StemCombination => "天干合",
            Self::StemClash => "天干沖",
        }
    }

    /// English label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SixHarmony => "six harmony",
            Self::Clash => "clash",
            Self::Punishment => "punishment",
            Self::SelfPunishment => "self punishment",
            Self::Destruction => "destruction",
            Self::Harm => "harm",
            Self::HalfTrine => "half trine",
            Self::Trine => "trine",
            Self::DirectionalTriad => "directional triad",
            Self::StemCombination => "stem combination",
            Self::StemClash => "stem clash",
        }
    }
}

/// A stem or branch glyph taking part in an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Stem(Stem),
    Branch(Branch),
}

impl Display for Glyph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stem(s) => s.fmt(f),
            Self::Branch(b) => b.fmt(f),
        }
    }
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One participant of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionMember {
    pub position: PillarPosition,
    pub glyph: Glyph,
}

impl InteractionMember {
    fn label(self) -> String {
        let part = match self.glyph {
            Glyph::Stem(_) => "stem",
            Glyph::Branch(_) => "branch",
        };
        format!("{} {} {}", self.position.name(), part, self.glyph)
    }
}

/// A detected interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub kind: InteractionKind,
    pub members: Vec<InteractionMember>,
    /// Element produced by a combination, if any.
    pub element: Option<Element>,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Six harmonies and the element each produces.
pub const SIX_HARMONIES: [(Branch, Branch, Element); 6] = [
    (Ja, Chuk, Element::Earth),
    (In, Hae, Element::Wood),
    (Myo, Sul, Element::Fire),
    (Jin, Yu, Element::Metal),
    (Sa, Sin, Element::Water),
    (O, Mi, Element::Fire),
];

/// Six direct clashes.
pub const SIX_CLASHES: [(Branch, Branch); 6] =
    [(Ja, O), (Chuk, Mi), (In, Sin), (Myo, Yu), (Jin, Sul), (Sa, Hae)];

/// Six destructions.
pub const SIX_DESTRUCTIONS: [(Branch, Branch); 6] =
    [(Ja, Yu), (Chuk, Jin), (In, Hae), (Myo, O), (Sa, Sin), (Mi, Sul)];

/// Six harms.
pub const SIX_HARMS: [(Branch, Branch); 6] =
    [(Ja, Mi), (Chuk, O), (In, Sa), (Myo, Jin), (Sin, Hae), (Yu, Sul)];

/// Uncivil punishment (無禮之刑).
pub const UNCIVIL_PUNISHMENT: (Branch, Branch) = (Ja, Myo);

/// Three-member punishments: ungrateful (無恩之刑) and power-abuse (恃勢之刑).
pub const TRIPLE_PUNISHMENTS: [([Branch; 3], &str); 2] = [
    ([In, Sa, Sin], "ungrateful punishment (無恩之刑)"),
    ([Chuk, Sul, Mi], "power-abuse punishment (恃勢之刑)"),
];

/// Branches that punish themselves when doubled.
pub const SELF_PUNISHING: [Branch; 4] = [Jin, O, Yu, Hae];

/// Trines and their element.
pub const TRINES: [([Branch; 3], Element); 4] = [
    ([Sin, Ja, Jin], Element::Water),
    ([Hae, Myo, Mi], Element::Wood),
    ([In, O, Sul], Element::Fire),
    ([Sa, Yu, Chuk], Element::Metal),
];

/// Directional triads and their element.
pub const DIRECTIONAL_TRIADS: [([Branch; 3], Element); 4] = [
    ([In, Myo, Jin], Element::Wood),
    ([Sa, O, Mi], Element::Fire),
    ([Sin, Yu, Sul], Element::Metal),
    ([Hae, Ja, Chuk], Element::Water),
];

/// Stem five-combinations and the element each produces.
pub const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Gap, Stem::Gi, Element::Earth),
    (Stem::Eul, Stem::Gyeong, Element::Metal),
    (Stem::Byeong, Stem::Sin, Element::Water),
    (Stem::Jeong, Stem::Im, Element::Wood),
    (Stem::Mu, Stem::Gye, Element::Fire),
];

/// Stem clashes.
pub const STEM_CLASHES: [(Stem, Stem); 4] = [
    (Stem::Gap, Stem::Gyeong),
    (Stem::Eul, Stem::Sin),
    (Stem::Byeong, Stem::Im),
    (Stem::Jeong, Stem::Gye),
];

fn pair_matches<T: PartialEq>(pair: &(T, T), a: T, b: T) -> bool {
    (pair.0 == a && pair.1 == b) || (pair.0 == b && pair.1 == a)
}

// ---------------------------------------------------------------------------
// Pair predicates
// ---------------------------------------------------------------------------

/// Element produced when two branches form a six harmony.
pub fn six_harmony(a: Branch, b: Branch) -> Option<Element> {
    SIX_HARMONIES
        .iter()
        .find(|(x, y, _)| pair_matches(&(*x, *y), a, b))
        .map(|&(_, _, e)| e)
}

/// True when two branches clash.
pub fn is_clash(a: Branch, b: Branch) -> bool {
    SIX_CLASHES.iter().any(|p| pair_matches(p, a, b))
}

/// True when two branches destroy each other.
pub fn is_destruction(a: Branch, b: Branch) -> bool {
    SIX_DESTRUCTIONS.iter().any(|p| pair_matches(p, a, b))
}

/// True when two branches harm each other.
pub fn is_harm(a: Branch, b: Branch) -> bool {
    SIX_HARMS.iter().any(|p| pair_matches(p, a, b))
}

/// Element produced when two stems combine.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|(x, y, _)| pair_matches(&(*x, *y), a, b))
        .map(|&(_, _, e)| e)
}

/// True when two stems clash.
pub fn is_stem_clash(a: Stem, b: Stem) -> bool {
    STEM_CLASHES.iter().any(|p| pair_matches(p, a, b))
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

fn branch_member(pillars: &FourPillars, position: PillarPosition) -> InteractionMember {
    InteractionMember {
        position,
        glyph: Glyph::Branch(pillars.get(position).branch),
    }
}

fn stem_member(pillars: &FourPillars, position: PillarPosition) -> InteractionMember {
    InteractionMember {
        position,
        glyph: Glyph::Stem(pillars.get(position).stem),
    }
}

fn push(
    out: &mut Vec<Interaction>,
    kind: InteractionKind,
    members: Vec<InteractionMember>,
    element: Option<Element>,
    note: Option<&str>,
) {
    let labels: Vec<_> = members.iter().map(|m| m.label()).collect();
    let mut description = format!("{}: {} ({})", labels.join(" + "), kind.name(), kind.hanja());
    if let Some(note) = note {
        description.push_str(&format!(", {note}"));
    }
    if let Some(e) = element {
        description.push_str(&format!(" → {} {}", e.name(), e.hanja()));
    }
    log::trace!("interaction: {description}");
    out.push(Interaction {
        kind,
        members,
        element,
        description,
    });
}

/// Positions whose branch belongs to `set`, plus the count of distinct
/// members present.
fn set_presence(pillars: &FourPillars, set: &[Branch; 3]) -> (Vec<PillarPosition>, usize) {
    let positions: Vec<_> = ALL_POSITIONS
        .into_iter()
        .filter(|&p| set.contains(&pillars.get(p).branch))
        .collect();
    let distinct = set
        .iter()
        .filter(|b| positions.iter().any(|&p| pillars.get(p).branch == **b))
        .count();
    (positions, distinct)
}

fn detect_branch_pairs(pillars: &FourPillars, out: &mut Vec<Interaction>) {
    for (i, &pa) in ALL_POSITIONS.iter().enumerate() {
        for &pb in &ALL_POSITIONS[i + 1..] {
            let a = pillars.get(pa).branch;
            let b = pillars.get(pb).branch;
            let members = || vec![branch_member(pillars, pa), branch_member(pillars, pb)];

            if let Some(e) = six_harmony(a, b) {
                push(out, InteractionKind::SixHarmony, members(), Some(e), None);
            }
            if is_clash(a, b) {
                push(out, InteractionKind::Clash, members(), None, None);
            }
            if pair_matches(&UNCIVIL_PUNISHMENT, a, b) {
                push(
                    out,
                    InteractionKind::Punishment,
                    members(),
                    None,
                    Some("uncivil punishment (無禮之刑)"),
                );
            }
            if a == b && SELF_PUNISHING.contains(&a) {
                push(out, InteractionKind::SelfPunishment, members(), None, None);
            }
            if is_destruction(a, b) {
                push(out, InteractionKind::Destruction, members(), None, None);
            }
            if is_harm(a, b) {
                push(out, InteractionKind::Harm, members(), None, None);
            }
        }
    }
}

fn detect_branch_sets(pillars: &FourPillars, out: &mut Vec<Interaction>) {
    for (set, name) in &TRIPLE_PUNISHMENTS {
        let (positions, distinct) = set_presence(pillars, set);
        if distinct >= 2 {
            let members = positions.iter().map(|&p| branch_member(pillars, p)).collect();
            let note = if distinct == 3 {
                format!("full {name}")
            } else {
                format!("partial {name}")
            };
            push(out, InteractionKind::Punishment, members, None, Some(note.as_str()));
        }
    }

    for (set, element) in &TRINES {
        let (positions, distinct) = set_presence(pillars, set);
        let kind = match distinct {
            3 => InteractionKind::Trine,
            2 => InteractionKind::HalfTrine,
            _ => continue,
        };
        let members = positions.iter().map(|&p| branch_member(pillars, p)).collect();
        push(out, kind, members, Some(*element), None);
    }

    for (set, element) in &DIRECTIONAL_TRIADS {
        let (positions, distinct) = set_presence(pillars, set);
        if distinct == 3 {
            let members = positions.iter().map(|&p| branch_member(pillars, p)).collect();
            push(
                out,
                InteractionKind::DirectionalTriad,
                members,
                Some(*element),
                None,
            );
        }
    }
}

fn detect_stem_pairs(pillars: &FourPillars, out: &mut Vec<Interaction>) {
    for (i, &pa) in ALL_POSITIONS.iter().enumerate() {
        for &pb in &ALL_POSITIONS[i + 1..] {
            let a = pillars.get(pa).stem;
            let b = pillars.get(pb).stem;
            let members = || vec![stem_member(pillars, pa), stem_member(pillars, pb)];

            if let Some(e) = stem_combination(a, b) {
                push(out, InteractionKind::StemCombination, members(), Some(e), None);
            }
            if is_stem_clash(a, b) {
                push(out, InteractionKind::StemClash, members(), None, None);
            }
        }
    }
}

/// Detect every branch and stem interaction in a chart.
///
/// Order: branch pairs (by position pair), branch sets, stem pairs.
pub fn detect_interactions(pillars: &FourPillars) -> Vec<Interaction> {
    let mut out = Vec::new();
    detect_branch_pairs(pillars, &mut out);
    detect_branch_sets(pillars, &mut out);
    detect_stem_pairs(pillars, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(pillars: &FourPillars) -> Vec<InteractionKind> {
        detect_interactions(pillars).iter().map(|i| i.kind).collect()
    }

    #[test]
    fn tables_are_symmetric_lookups() {
        assert_eq!(six_harmony(Chuk, Ja), Some(Element::Earth));
        assert!(is_clash(O, Ja));
        assert!(is_harm(Mi, Ja));
        assert!(!is_clash(Ja, Chuk));
        assert_eq!(stem_combination(Stem::Gi, Stem::Gap), Some(Element::Earth));
        assert!(is_stem_clash(Stem::Gyeong, Stem::Gap));
    }

    #[test]
    fn every_branch_clashes_exactly_once() {
        for b in crate::branch::ALL_BRANCHES {
            let n = crate::branch::ALL_BRANCHES
                .iter()
                .filter(|&&o| is_clash(b, o))
                .count();
            assert_eq!(n, 1, "{b}");
        }
    }

    #[test]
    fn harmony_cites_positions() {
        let fp = FourPillars::parse("甲子", "乙丑", "丙寅", "丁卯").unwrap();
        let found = detect_interactions(&fp);
        let harmony = found
            .iter()
            .find(|i| i.kind == InteractionKind::SixHarmony)
            .unwrap();
        assert_eq!(harmony.element, Some(Element::Earth));
        assert_eq!(harmony.members[0].position, PillarPosition::Year);
        assert_eq!(harmony.members[1].position, PillarPosition::Month);
        assert!(harmony.description.contains("year branch 子"));
        assert!(harmony.description.contains("month branch 丑"));
    }

    #[test]
    fn full_trine_and_no_half() {
        // 申 子 辰 present: one full water trine
        let fp = FourPillars::parse("庚申", "甲子", "壬辰", "丙寅").unwrap();
        let found = detect_interactions(&fp);
        let trines: Vec<_> = found
            .iter()
            .filter(|i| matches!(i.kind, InteractionKind::Trine | InteractionKind::HalfTrine))
            .collect();
        assert_eq!(trines.len(), 1);
        assert_eq!(trines[0].kind, InteractionKind::Trine);
        assert_eq!(trines[0].element, Some(Element::Water));
    }

    #[test]
    fn half_trine_with_two_members() {
        // 寅 午 of the fire trine; 戌 absent
        let fp = FourPillars::parse("甲寅", "丙午", "乙丑", "丁亥").unwrap();
        let found = detect_interactions(&fp);
        let halves: Vec<_> = found
            .iter()
            .filter(|i| matches!(i.kind, InteractionKind::Trine | InteractionKind::HalfTrine))
            .collect();
        assert_eq!(halves.len(), 1);
        assert_eq!(halves[0].kind, InteractionKind::HalfTrine);
        assert_eq!(halves[0].element, Some(Element::Fire));
        let positions: Vec<_> = halves[0].members.iter().map(|m| m.position).collect();
        assert_eq!(positions, [PillarPosition::Year, PillarPosition::Month]);
    }

    #[test]
    fn destructions_between_branch_pairs() {
        // 子酉 破 in year/month; 寅亥 is both 六合 and 破 in day/hour
        let fp = FourPillars::parse("甲子", "丁酉", "丙寅", "己亥").unwrap();
        let found = detect_interactions(&fp);
        let destructions: Vec<_> = found
            .iter()
            .filter(|i| i.kind == InteractionKind::Destruction)
            .collect();
        assert_eq!(destructions.len(), 2);
        assert_eq!(
            destructions[0].description,
            "year branch 子 + month branch 酉: destruction (破)"
        );
        assert_eq!(destructions[1].members[0].position, PillarPosition::Day);
        assert_eq!(destructions[1].members[1].position, PillarPosition::Hour);
        assert!(destructions.iter().all(|d| d.element.is_none()));
        let harmony = found
            .iter()
            .find(|i| i.kind == InteractionKind::SixHarmony)
            .unwrap();
        assert_eq!(harmony.element, Some(Element::Wood));
        assert!(!found.iter().any(|i| i.kind == InteractionKind::Harm));
    }

    #[test]
    fn harms_between_branch_pairs() {
        // 子未 害 in year/month; 寅巳 害 in day/hour, also a partial 寅巳申 punishment
        let fp = FourPillars::parse("甲子", "辛未", "丙寅", "癸巳").unwrap();
        let found = detect_interactions(&fp);
        let harms: Vec<_> = found
            .iter()
            .filter(|i| i.kind == InteractionKind::Harm)
            .collect();
        assert_eq!(harms.len(), 2);
        assert_eq!(harms[0].description, "year branch 子 + month branch 未: harm (害)");
        assert_eq!(harms[1].description, "day branch 寅 + hour branch 巳: harm (害)");
        assert!(!found.iter().any(|i| i.kind == InteractionKind::Destruction));
    }

    #[test]
    fn directional_needs_all_three() {
        let fp = FourPillars::parse("甲寅", "乙卯", "甲寅", "乙卯").unwrap();
        assert!(!kinds(&fp).contains(&InteractionKind::DirectionalTriad));
        let fp = FourPillars::parse("甲寅", "乙卯", "丙辰", "乙卯").unwrap();
        assert!(kinds(&fp).contains(&InteractionKind::DirectionalTriad));
    }

    #[test]
    fn self_punishment_on_doubled_branch() {
        let fp = FourPillars::parse("甲午", "丙午", "甲子", "甲子").unwrap();
        let k = kinds(&fp);
        assert_eq!(
            k.iter()
                .filter(|&&x| x == InteractionKind::SelfPunishment)
                .count(),
            1
        );
        // 子午 clashes: year/day, year/hour, month/day, month/hour
        assert_eq!(k.iter().filter(|&&x| x == InteractionKind::Clash).count(), 4);
    }

    #[test]
    fn partial_triple_punishment() {
        let fp = FourPillars::parse("甲寅", "辛巳", "甲子", "甲子").unwrap();
        let found = detect_interactions(&fp);
        let p = found
            .iter()
            .find(|i| i.kind == InteractionKind::Punishment)
            .unwrap();
        assert!(p.description.contains("partial ungrateful"));
        assert_eq!(p.members.len(), 2);
    }

    #[test]
    fn stem_combination_and_clash() {
        let fp = FourPillars::parse("甲子", "己巳", "庚午", "丙子").unwrap();
        let k = kinds(&fp);
        assert!(k.contains(&InteractionKind::StemCombination));
        assert!(k.contains(&InteractionKind::StemClash));
    }
}
