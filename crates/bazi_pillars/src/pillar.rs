//! Pillar types: a (Stem, Branch) pair and the Four Pillars profile.

use bazi_base::{Branch, Stem};

/// A single pillar: one Heavenly Stem paired with one Earthly Branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pillar at a position of the 60-term sexagenary cycle.
    ///
    /// Any integer is accepted; the index wraps modulo 60.
    pub const fn from_cycle_index(index: i64) -> Pillar {
        Pillar {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// Position of this pillar in the 60-term sexagenary cycle (0-59).
    ///
    /// Returns `None` when stem and branch parity disagree: gcd(10,12) = 2,
    /// so only 60 of the 120 (stem, branch) pairs occur in the cycle.
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if (s + b) % 2 != 0 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Chinese name of the pillar, e.g. "甲戌".
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }

    /// Transliterated name of the pillar, e.g. "Jia Xu".
    pub fn name(self) -> String {
        format!("{} {}", self.stem.name(), self.branch.name())
    }
}

/// The Four Pillars of a date (hour optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// Iterate over the present pillars in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = Pillar> + '_ {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
            .into_iter()
            .flatten()
    }
}
