//! Ten gods (십신): relation of any stem to a reference stem.
//!
//! Element relation picks the family, polarity picks the member:
//! same element → peer/rival, reference generates → expression/output,
//! reference controls → indirect/direct wealth, target controls reference →
//! indirect/direct authority, target generates reference → indirect/direct
//! resource. Same polarity always takes the first (indirect) member.

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::element::ElementRelation;
use crate::stem::Stem;

/// The ten relation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TenGod {
    Peer,
    Rival,
    Expression,
    Output,
    IndirectWealth,
    DirectWealth,
    IndirectAuthority,
    DirectAuthority,
    IndirectResource,
    DirectResource,
}

/// All 10 ten gods in traditional order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Peer,
    TenGod::Rival,
    TenGod::Expression,
    TenGod::Output,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::IndirectAuthority,
    TenGod::DirectAuthority,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

/// Five families, two ten gods each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TenGodFamily {
    Companion,
    Output,
    Wealth,
    Authority,
    Resource,
}

impl TenGod {
    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Peer => "比肩",
            Self::Rival => "劫財",
            Self::Expression => "食神",
            Self::Output => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::IndirectAuthority => "偏官",
            Self::DirectAuthority => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Peer => "비견",
            Self::Rival => "겁재",
            Self::Expression => "식신",
            Self::Output => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::IndirectAuthority => "편관",
            Self::DirectAuthority => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Rival => "rival",
            Self::Expression => "expression",
            Self::Output => "output",
            Self::IndirectWealth => "indirect wealth",
            Self::DirectWealth => "direct wealth",
            Self::IndirectAuthority => "indirect authority",
            Self::DirectAuthority => "direct authority",
            Self::IndirectResource => "indirect resource",
            Self::DirectResource => "direct resource",
        }
    }

    pub const fn family(self) -> TenGodFamily {
        match self {
            Self::Peer | Self::Rival => TenGodFamily::Companion,
            Self::Expression | Self::Output => TenGodFamily::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodFamily::Wealth,
            Self::IndirectAuthority | Self::DirectAuthority => TenGodFamily::Authority,
            Self::IndirectResource | Self::DirectResource => TenGodFamily::Resource,
        }
    }
}

/// Classify `target` against `reference`. Total over all 100 pairs.
pub fn ten_god(reference: Stem, target: Stem) -> TenGod {
    let same_polarity = reference.polarity() == target.polarity();
    let pick = |same: TenGod, differing: TenGod| if same_polarity { same } else { differing };
    match reference.element().relation_to(target.element()) {
        ElementRelation::Same => pick(TenGod::Peer, TenGod::Rival),
        ElementRelation::Generates => pick(TenGod::Expression, TenGod::Output),
        ElementRelation::Controls => pick(TenGod::IndirectWealth, TenGod::DirectWealth),
        ElementRelation::ControlledBy => pick(TenGod::IndirectAuthority, TenGod::DirectAuthority),
        ElementRelation::GeneratedBy => pick(TenGod::IndirectResource, TenGod::DirectResource),
    }
}

/// Ten god of a branch, taken through its dominant hidden stem.
pub fn branch_ten_god(reference: Stem, branch: Branch) -> TenGod {
    ten_god(reference, branch.dominant_stem())
}

/// Relation of a pillar stem to the day master. The day pillar's own stem
/// is labeled as self-reference rather than classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemRelation {
    SelfReference,
    TenGod(TenGod),
}

impl StemRelation {
    /// The ten god, if this is not the day master itself.
    pub const fn ten_god(self) -> Option<TenGod> {
        match self {
            Self::SelfReference => None,
            Self::TenGod(g) => Some(g),
        }
    }
}

impl Serialize for StemRelation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::SelfReference => serializer.serialize_str("self"),
            Self::TenGod(g) => g.serialize(serializer),
        }
    }
}
