//! Day-master strength scoring (신강/신약).
//!
//! The three non-day stems and all four branch main elements each count
//! once, as support when they share or generate the day master's element
//! and as drain otherwise. The month branch adds a seasonal bonus and the
//! day branch a rooting bonus when they support. Ties score as weak.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::pillar::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::stem::Stem;

/// Bonus when the month branch's main element supports the day master.
pub const MONTH_SUPPORT_BONUS: u8 = 2;

/// Bonus when the day branch's main element supports the day master.
pub const ROOTING_BONUS: u8 = 1;

/// Itemized strength tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthBreakdown {
    /// Supporting glyphs before bonuses.
    pub base_support: u8,
    pub drain: u8,
    pub month_bonus: u8,
    pub rooting_bonus: u8,
    /// `base_support + month_bonus + rooting_bonus`.
    pub support: u8,
    /// One line per contribution, in tally order.
    pub factors: Vec<String>,
}

/// The day master and its strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMasterProfile {
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
    pub is_strong: bool,
    pub breakdown: StrengthBreakdown,
}

impl DayMasterProfile {
    /// "strong" or "weak".
    pub const fn label(&self) -> &'static str {
        if self.is_strong { "strong" } else { "weak" }
    }
}

fn factor(
    position: PillarPosition,
    part: &str,
    glyph: &str,
    element: Element,
    supports: bool,
) -> String {
    format!(
        "{} {part} {glyph} ({}) {}",
        position.name(),
        element.name(),
        if supports { "supports" } else { "drains" }
    )
}

/// Score the day master of a chart.
pub fn day_master_strength(pillars: &FourPillars) -> DayMasterProfile {
    let stem = pillars.day_master();
    let element = stem.element();
    let mut base_support = 0u8;
    let mut drain = 0u8;
    let mut factors = Vec::new();

    let mut tally = |supports: bool| {
        if supports {
            base_support += 1;
        } else {
            drain += 1;
        }
    };

    for pos in ALL_POSITIONS {
        if pos == PillarPosition::Day {
            continue;
        }
        let s = pillars.get(pos).stem;
        let supports = element.is_supported_by(s.element());
        tally(supports);
        factors.push(factor(pos, "stem", s.hanja(), s.element(), supports));
    }
    for pos in ALL_POSITIONS {
        let b = pillars.get(pos).branch;
        let supports = element.is_supported_by(b.element());
        tally(supports);
        factors.push(factor(pos, "branch", b.hanja(), b.element(), supports));
    }

    let month_bonus = if element.is_supported_by(pillars.month.branch.element()) {
        factors.push(format!("month branch in season: +{MONTH_SUPPORT_BONUS}"));
        MONTH_SUPPORT_BONUS
    } else {
        0
    };
    let rooting_bonus = if element.is_supported_by(pillars.day.branch.element()) {
        factors.push(format!("rooted in day branch: +{ROOTING_BONUS}"));
        ROOTING_BONUS
    } else {
        0
    };

    let support = base_support + month_bonus + rooting_bonus;
    let is_strong = support > drain;
    log::debug!("day master {stem}: support {support} vs drain {drain}");

    DayMasterProfile {
        stem,
        element,
        polarity: stem.polarity(),
        is_strong,
        breakdown: StrengthBreakdown {
            base_support,
            drain,
            month_bonus,
            rooting_bonus,
            support,
            factors,
        },
    }
}
