//! Five-element distribution and balance verdict.
//!
//! Weighted tally over the four stems (1.0 each), the four branch main
//! elements (1.0 each), and every hidden stem at its tier weight. "Missing"
//! looks only at the unweighted stems and branch main elements; hidden stems
//! never rescue an element from being missing.

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Spread (max% − min%) at or below which the chart is balanced.
pub const BALANCED_SPREAD_PCT: f64 = 10.0;

/// Share at or above which the strongest element is in excess.
pub const EXCESS_PCT: f64 = 35.0;

/// Weighted count and share of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementShare {
    pub element: Element,
    pub count: f64,
    /// Percentage of the weighted total, one decimal place.
    pub percentage: f64,
}

/// Balance verdict of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BalanceVerdict {
    Balanced,
    Excess { element: Element },
    Deficient { elements: Vec<Element> },
    Dominant { strongest: Element, weakest: Element },
}

impl BalanceVerdict {
    /// Human-readable verdict, e.g. "fire excess" or "metal, water deficient".
    pub fn describe(&self) -> String {
        match self {
            Self::Balanced => "balanced".to_string(),
            Self::Excess { element } => format!("{} excess", element.name()),
            Self::Deficient { elements } => {
                let names: Vec<_> = elements.iter().map(|e| e.name()).collect();
                format!("{} deficient", names.join(", "))
            }
            Self::Dominant { strongest, weakest } => {
                format!("{} dominant, {} weak", strongest.name(), weakest.name())
            }
        }
    }
}

/// Element distribution of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDistribution {
    /// One share per element, canonical order.
    pub shares: [ElementShare; 5],
    pub strongest: Element,
    pub weakest: Element,
    /// Elements absent from the unweighted stem + branch-main set.
    pub missing: Vec<Element>,
    pub verdict: BalanceVerdict,
    pub summary: String,
}

impl ElementDistribution {
    /// Weighted count of one element.
    pub fn count(&self, element: Element) -> f64 {
        self.shares[element.index() as usize].count
    }

    /// Percentage of one element.
    pub fn percentage(&self, element: Element) -> f64 {
        self.shares[element.index() as usize].percentage
    }

    /// Elements sorted by weighted count, descending; ties keep canonical
    /// order.
    pub fn ranked(&self) -> [Element; 5] {
        let mut ranked = ALL_ELEMENTS;
        // sort_by is stable
        ranked.sort_by(|a, b| self.count(*b).total_cmp(&self.count(*a)));
        ranked
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Compute the weighted element distribution of four pillars.
pub fn element_distribution(pillars: &FourPillars) -> ElementDistribution {
    let mut counts = [0.0f64; 5];
    let mut present = [false; 5];

    for (_, pillar) in pillars.iter() {
        let stem_el = pillar.stem.element().index() as usize;
        counts[stem_el] += 1.0;
        present[stem_el] = true;

        let branch_el = pillar.branch.element().index() as usize;
        counts[branch_el] += 1.0;
        present[branch_el] = true;

        for hidden in pillar.branch.hidden_stem_tiers() {
            counts[hidden.stem.element().index() as usize] += hidden.tier.weight();
        }
    }

    let total: f64 = counts.iter().sum();
    let shares = ALL_ELEMENTS.map(|element| {
        let count = counts[element.index() as usize];
        ElementShare {
            element,
            count,
            percentage: round1(count / total * 100.0),
        }
    });

    let mut strongest = ALL_ELEMENTS[0];
    let mut weakest = ALL_ELEMENTS[0];
    for e in ALL_ELEMENTS {
        let c = counts[e.index() as usize];
        if c > counts[strongest.index() as usize] {
            strongest = e;
        }
        if c < counts[weakest.index() as usize] {
            weakest = e;
        }
    }

    let missing: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|e| !present[e.index() as usize])
        .collect();

    let max_pct = shares[strongest.index() as usize].percentage;
    let min_pct = shares[weakest.index() as usize].percentage;
    let verdict = if max_pct - min_pct <= BALANCED_SPREAD_PCT {
        BalanceVerdict::Balanced
    } else if max_pct >= EXCESS_PCT {
        BalanceVerdict::Excess { element: strongest }
    } else if !missing.is_empty() {
        BalanceVerdict::Deficient {
            elements: missing.clone(),
        }
    } else {
        BalanceVerdict::Dominant { strongest, weakest }
    };
    let summary = verdict.describe();

    ElementDistribution {
        shares,
        strongest,
        weakest,
        missing,
        verdict,
        summary,
    }
}
