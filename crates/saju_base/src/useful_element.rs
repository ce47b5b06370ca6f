//! Useful element (용신) resolution and lucky attributes.
//!
//! Three methods are tried in order and the first that applies wins:
//! mediation between two clashing dominant elements, seasonal adjustment
//! for extreme summer or winter months, then the strength-balance default.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::five_elements::ElementDistribution;
use crate::pillar::FourPillars;
use crate::strength::DayMasterProfile;

/// Minimum weighted count for each of the two leading elements to mediate.
pub const MEDIATION_MIN_COUNT: f64 = 2.0;

/// Weighted count below which the seasonal remedy is scarce.
pub const SEASONAL_SCARCITY: f64 = 1.5;

/// Month branches of extreme summer.
pub const EXTREME_SUMMER: [Branch; 3] = [Branch::Sa, Branch::O, Branch::Mi];

/// Month branches of extreme winter.
pub const EXTREME_WINTER: [Branch; 3] = [Branch::Hae, Branch::Ja, Branch::Chuk];

/// Which method selected the useful element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionMethod {
    /// 통관: bridge two elements in a control relation.
    Mediation,
    /// 조후: cool a summer chart or warm a winter one.
    SeasonalAdjustment,
    /// 억부: restrain a strong day master or support a weak one.
    StrengthBalance,
}

impl ResolutionMethod {
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Mediation => "通關",
            Self::SeasonalAdjustment => "調候",
            Self::StrengthBalance => "抑扶",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mediation => "mediation",
            Self::SeasonalAdjustment => "seasonal adjustment",
            Self::StrengthBalance => "strength balance",
        }
    }
}

/// Colors, directions and numbers associated with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyAttributes {
    pub colors: &'static [&'static str],
    pub directions: &'static [&'static str],
    pub numbers: &'static [u8],
}

/// Lucky attributes per element, canonical order.
const LUCKY_ATTRIBUTES: [LuckyAttributes; 5] = [
    LuckyAttributes {
        colors: &["green", "blue"],
        directions: &["east", "southeast"],
        numbers: &[3, 8],
    },
    LuckyAttributes {
        colors: &["red", "purple"],
        directions: &["south"],
        numbers: &[2, 7],
    },
    LuckyAttributes {
        colors: &["yellow", "brown"],
        directions: &["center", "northeast", "southwest"],
        numbers: &[5, 10],
    },
    LuckyAttributes {
        colors: &["white", "gold"],
        directions: &["west", "northwest"],
        numbers: &[4, 9],
    },
    LuckyAttributes {
        colors: &["black", "navy"],
        directions: &["north"],
        numbers: &[1, 6],
    },
];

/// Lucky attributes of an element.
pub const fn lucky_attributes(element: Element) -> LuckyAttributes {
    LUCKY_ATTRIBUTES[element.index() as usize]
}

/// Resolved useful element with its companions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsefulElementProfile {
    pub useful: Element,
    /// The element controlling `useful`.
    pub avoid: Element,
    /// The element generating `useful`.
    pub supporting: Element,
    pub method: ResolutionMethod,
    pub rationale: String,
    pub lucky: LuckyAttributes,
}

fn mediation(dist: &ElementDistribution) -> Option<(Element, String)> {
    let ranked = dist.ranked();
    let (a, b) = (ranked[0], ranked[1]);
    if dist.count(a) < MEDIATION_MIN_COUNT || dist.count(b) < MEDIATION_MIN_COUNT {
        return None;
    }
    let (controller, controlled) = if a.controls() == b {
        (a, b)
    } else if b.controls() == a {
        (b, a)
    } else {
        return None;
    };
    let bridge = controller.generates();
    Some((
        bridge,
        format!(
            "{} controls {}; {} bridges the two",
            controller.name(),
            controlled.name(),
            bridge.name()
        ),
    ))
}

fn seasonal(pillars: &FourPillars, dist: &ElementDistribution) -> Option<(Element, String)> {
    let month = pillars.month.branch;
    if EXTREME_SUMMER.contains(&month) && dist.count(Element::Water) < SEASONAL_SCARCITY {
        Some((
            Element::Water,
            format!("born in the heat of {month} with little water; water cools"),
        ))
    } else if EXTREME_WINTER.contains(&month) && dist.count(Element::Fire) < SEASONAL_SCARCITY {
        Some((
            Element::Fire,
            format!("born in the cold of {month} with little fire; fire warms"),
        ))
    } else {
        None
    }
}

/// The less abundant of two elements; ties keep the first.
fn scarcer(dist: &ElementDistribution, first: Element, second: Element) -> Element {
    if dist.count(second) < dist.count(first) { second } else { first }
}

fn strength_balance(dist: &ElementDistribution, profile: &DayMasterProfile) -> (Element, String) {
    let dm = profile.element;
    if profile.is_strong {
        let useful = scarcer(dist, dm.generates(), dm.controls());
        (
            useful,
            format!("strong {} day master drains into {}", dm.name(), useful.name()),
        )
    } else {
        let useful = scarcer(dist, dm.generated_by(), dm);
        (
            useful,
            format!("weak {} day master is fed by {}", dm.name(), useful.name()),
        )
    }
}

/// Resolve the useful element of a chart.
pub fn useful_element(
    pillars: &FourPillars,
    dist: &ElementDistribution,
    profile: &DayMasterProfile,
) -> UsefulElementProfile {
    let (method, (useful, rationale)) = if let Some(hit) = mediation(dist) {
        (ResolutionMethod::Mediation, hit)
    } else if let Some(hit) = seasonal(pillars, dist) {
        (ResolutionMethod::SeasonalAdjustment, hit)
    } else {
        (ResolutionMethod::StrengthBalance, strength_balance(dist, profile))
    };
    log::debug!("useful element {} by {}", useful.name(), method.name());

    UsefulElementProfile {
        useful,
        avoid: useful.controlled_by(),
        supporting: useful.generated_by(),
        method,
        rationale,
        lucky: lucky_attributes(useful),
    }
}
