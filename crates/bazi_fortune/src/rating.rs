//! Daily fortune ratings for a zodiac sign against a date's Day Pillar.
//!
//! The result is fully deterministic: the same (zodiac, date) always yields
//! the same ratings. Variation between categories comes from fixed
//! prime-multiplier mixes of the day stem, day branch, and zodiac index.

use bazi_base::{Branch, Element};
use bazi_pillars::{Pillar, day_pillar};

use crate::relation::{BranchRelation, branch_relation};

/// Fortune ratings for one zodiac sign on one day. All five ratings are
/// integers in [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRatings {
    pub wealth: u8,
    pub love: u8,
    pub career: u8,
    pub health: u8,
    /// Rounded mean of the four category ratings.
    pub overall: u8,
    /// The day's pillar.
    pub day_pillar: Pillar,
    /// Element of the day stem.
    pub day_element: Element,
    /// Element of the queried zodiac branch.
    pub zodiac_element: Element,
    /// Relation between the zodiac branch and the day branch.
    pub relation: BranchRelation,
}

/// Base score from the element interaction between day and zodiac.
///
/// The checks run in a fixed order and each later match unconditionally
/// overwrites the base: when several relations hold at once, the last one
/// in source order decides. This overwrite order is part of the observable
/// contract and must not be reordered or made additive.
fn element_base_score(day: Element, zodiac: Element) -> f64 {
    let mut base = 3.0;
    if day.generates() == zodiac {
        base = 4.0;
    }
    if zodiac.generates() == day {
        base = 2.0;
    }
    if day == zodiac {
        base = 4.0;
    }
    if day.overcomes() == zodiac {
        base = 2.0;
    }
    if zodiac.overcomes() == day {
        base = 4.0;
    }
    base
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Compute the daily fortune ratings for a zodiac branch on a Gregorian date.
pub fn daily_ratings(zodiac: Branch, year: i64, month: i64, day: i64) -> DailyRatings {
    let pillar = day_pillar(year, month, day);
    let day_element = pillar.stem.element();
    let zodiac_element = zodiac.element();

    let base = element_base_score(day_element, zodiac_element);
    let relation = branch_relation(zodiac, pillar.branch);
    let modifier = relation.modifier();

    let s = i64::from(pillar.stem.index());
    let b = i64::from(pillar.branch.index());
    let z = i64::from(zodiac.index());

    // Distinct prime multipliers per category keep the four ratings from
    // moving in lockstep while staying deterministic per day.
    let jitter = |mix: i64| (mix.rem_euclid(5) - 2) as f64;
    let wealth = clamp(base + modifier + jitter(s * 3 + b * 7 + z * 5 + 1), 1.0, 5.0);
    let love = clamp(base + modifier + jitter(s * 7 + b * 3 + z * 11 + 2), 1.0, 5.0);
    let career = clamp(base + modifier + jitter(s * 11 + b * 5 + z * 3 + 3), 1.0, 5.0);
    let health = clamp(base + modifier + jitter(s * 5 + b * 11 + z * 7 + 4), 1.0, 5.0);

    DailyRatings {
        wealth: wealth.round() as u8,
        love: love.round() as u8,
        career: career.round() as u8,
        health: health.round() as u8,
        overall: ((wealth + love + career + health) / 4.0).round() as u8,
        day_pillar: pillar,
        day_element,
        zodiac_element,
        relation,
    }
}
