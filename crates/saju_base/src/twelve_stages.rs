//! Twelve life stages (십이운성) of a stem at each branch.
//!
//! The table below is the traditional reference chart, stored literally.
//! Yang stems advance through the branches, yin stems retreat, and each stem
//! starts its long-life stage at its own branch.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// The 12 life stages in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeStage {
    LongLife,
    Bath,
    CapAndBelt,
    Officer,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

/// All 12 stages in cycle order.
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::LongLife,
    LifeStage::Bath,
    LifeStage::CapAndBelt,
    LifeStage::Officer,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Tomb,
    LifeStage::Extinction,
    LifeStage::Conception,
    LifeStage::Nurture,
];

impl LifeStage {
    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::LongLife => "長生",
            Self::Bath => "沐浴",
            Self::CapAndBelt => "冠帶",
            Self::Officer => "建祿",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Tomb => "墓",
            Self::Extinction => "絶",
            Self::Conception => "胎",
            Self::Nurture => "養",
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::LongLife => "장생",
            Self::Bath => "목욕",
            Self::CapAndBelt => "관대",
            Self::Officer => "건록",
            Self::Peak => "제왕",
            Self::Decline => "쇠",
            Self::Sickness => "병",
            Self::Death => "사",
            Self::Tomb => "묘",
            Self::Extinction => "절",
            Self::Conception => "태",
            Self::Nurture => "양",
        }
    }
}

use LifeStage::{
    Bath as BA, CapAndBelt as CB, Conception as CO, Death as DE, Decline as DC,
    Extinction as EX, LongLife as LL, Nurture as NU, Officer as OF, Peak as PK,
    Sickness as SI, Tomb as TO,
};

/// Stage table: row = stem (甲..癸), column = branch (子..亥).
#[rustfmt::skip]
pub const TWELVE_STAGE_TABLE: [[LifeStage; 12]; 10] = [
    //  子  丑  寅  卯  辰  巳  午  未  申  酉  戌  亥
    [BA, CB, OF, PK, DC, SI, DE, TO, EX, CO, NU, LL], // 甲
    [SI, DC, PK, OF, CB, BA, LL, NU, CO, EX, TO, DE], // 乙
    [CO, NU, LL, BA, CB, OF, PK, DC, SI, DE, TO, EX], // 丙
    [EX, TO, DE, SI, DC, PK, OF, CB, BA, LL, NU, CO], // 丁
    [CO, NU, LL, BA, CB, OF, PK, DC, SI, DE, TO, EX], // 戊
    [EX, TO, DE, SI, DC, PK, OF, CB, BA, LL, NU, CO], // 己
    [DE, TO, EX, CO, NU, LL, BA, CB, OF, PK, DC, SI], // 庚
    [LL, NU, CO, EX, TO, DE, SI, DC, PK, OF, CB, BA], // 辛
    [PK, DC, SI, DE, TO, EX, CO, NU, LL, BA, CB, OF], // 壬
    [OF, CB, BA, LL, NU, CO, EX, TO, DE, SI, DC, PK], // 癸
];

/// Life stage of `stem` at `branch`.
pub const fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    TWELVE_STAGE_TABLE[stem.index() as usize][branch.index() as usize]
}
