//! Yearly fortune for a zodiac sign against a year's pillar.

use bazi_base::{Branch, Element};
use bazi_pillars::{Pillar, year_pillar};

use crate::relation::{BranchRelation, branch_relation};

/// Yearly luck summary for a zodiac sign. `luck` is an integer in [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFortune {
    pub luck: u8,
    /// The year's pillar.
    pub year_pillar: Pillar,
    /// Element of the year stem.
    pub year_element: Element,
    /// Element of the queried zodiac branch.
    pub zodiac_element: Element,
    /// Relation between the zodiac branch and the year branch.
    pub relation: BranchRelation,
}

/// Compute the yearly fortune for a zodiac branch.
///
/// The baseline of 3 is set by the branch relation (harmony or triple
/// harmony → 5, clash or punishment → 2, harm → 3), then adjusted by the
/// zodiac element's interaction with the year stem element: same element
/// +1, zodiac feeds the year element +1, zodiac overcomes it −1. For 2026
/// (丙午, Fire Horse) this reproduces the traditional readings: Fire and
/// Wood signs are lifted, Water signs are dampened.
pub fn year_fortune(zodiac: Branch, year: i64) -> YearFortune {
    let pillar = year_pillar(year);
    let year_element = pillar.stem.element();
    let zodiac_element = zodiac.element();
    let relation = branch_relation(zodiac, pillar.branch);

    let mut luck: i8 = match relation {
        BranchRelation::Harmony | BranchRelation::TripleHarmony => 5,
        BranchRelation::Clash | BranchRelation::Punishment => 2,
        BranchRelation::Harm => 3,
        BranchRelation::Neutral => 3,
    };

    if zodiac_element == year_element {
        luck = (luck + 1).min(5);
    }
    if zodiac_element.generates() == year_element {
        luck = (luck + 1).min(5);
    }
    if zodiac_element.overcomes() == year_element {
        luck = (luck - 1).max(1);
    }

    YearFortune {
        luck: luck as u8,
        year_pillar: pillar,
        year_element,
        zodiac_element,
        relation,
    }
}
