//! Branch relation classification (六冲, 六合, 三合, 刑, 害).
//!
//! Checks run in a fixed order and the first match wins: clash, harmony,
//! triple harmony, punishment, harm, else neutral. Some pairs belong to
//! more than one table (e.g. 寅巳 is both a punishment and a harm pair);
//! the earlier category always takes precedence.

use bazi_base::Branch;

/// Harmony (六合) pairs.
const HARMONY_PAIRS: [(u8, u8); 6] = [(0, 1), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)];

/// Triple-harmony (三合) groups: branches four apart forming triangles.
const TRIPLE_GROUPS: [[u8; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Punishment (刑) pairs, including the self-punishing branches.
const PUNISHMENT_PAIRS: [(u8, u8); 9] = [
    (0, 3),
    (1, 10),
    (2, 5),
    (4, 4),
    (6, 6),
    (7, 1),
    (8, 2),
    (9, 9),
    (11, 11),
];

/// Harm (害) pairs.
const HARM_PAIRS: [(u8, u8); 6] = [(0, 7), (1, 6), (2, 5), (3, 4), (8, 11), (9, 10)];

/// Relationship between two Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchRelation {
    /// 六冲: branches six apart.
    Clash,
    /// 六合: one of the six harmony pairs.
    Harmony,
    /// 三合: both branches in one triple-harmony group.
    TripleHarmony,
    /// 刑: one of the punishment pairs.
    Punishment,
    /// 害: one of the harm pairs.
    Harm,
    /// No tabled relation.
    Neutral,
}

impl BranchRelation {
    /// Snake-case identifier, e.g. "triple_harmony".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clash => "clash",
            Self::Harmony => "harmony",
            Self::TripleHarmony => "triple_harmony",
            Self::Punishment => "punishment",
            Self::Harm => "harm",
            Self::Neutral => "neutral",
        }
    }

    /// Chinese term.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Clash => "六冲",
            Self::Harmony => "六合",
            Self::TripleHarmony => "三合",
            Self::Punishment => "刑",
            Self::Harm => "害",
            Self::Neutral => "平",
        }
    }

    /// Numeric rating modifier.
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Clash => -1.0,
            Self::Harmony => 1.0,
            Self::TripleHarmony => 1.0,
            Self::Punishment => -1.0,
            Self::Harm => -0.5,
            Self::Neutral => 0.0,
        }
    }

    /// One-line reading of the relation.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Clash => "Challenging day — stay cautious",
            Self::Harmony => "Harmonious day — good fortune flows",
            Self::TripleHarmony => "Supportive energy — take action",
            Self::Punishment => "Be mindful of conflicts today",
            Self::Harm => "Minor obstacles possible — stay patient",
            Self::Neutral => "Neutral day — steady progress",
        }
    }
}

fn pair_matches(pairs: &[(u8, u8)], a: u8, b: u8) -> bool {
    pairs
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

/// Classify the relationship between two branches.
///
/// Check order is fixed and the first match wins.
pub fn branch_relation(branch1: Branch, branch2: Branch) -> BranchRelation {
    let a = branch1.index();
    let b = branch2.index();

    if a.abs_diff(b) == 6 {
        return BranchRelation::Clash;
    }
    if pair_matches(&HARMONY_PAIRS, a, b) {
        return BranchRelation::Harmony;
    }
    if TRIPLE_GROUPS
        .iter()
        .any(|g| g.contains(&a) && g.contains(&b))
    {
        return BranchRelation::TripleHarmony;
    }
    if pair_matches(&PUNISHMENT_PAIRS, a, b) {
        return BranchRelation::Punishment;
    }
    if pair_matches(&HARM_PAIRS, a, b) {
        return BranchRelation::Harm;
    }
    BranchRelation::Neutral
}
