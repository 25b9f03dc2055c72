//! Five-Element aggregation and Day Master strength.
//!
//! `count_elements` builds a weighted element histogram from a pillar set:
//! full weight for stem and branch elements, half weight per hidden stem.
//! `day_master_strength` classifies the Day Pillar's stem element against
//! the rest of the chart.

use bazi_base::{ALL_ELEMENTS, Element};
use bazi_pillars::FourPillars;

/// Weight contributed by a hidden stem's element.
const HIDDEN_STEM_WEIGHT: f64 = 0.5;

/// Weighted element histogram. Weights accumulate additively and are never
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementCount {
    weights: [f64; 5],
}

impl ElementCount {
    /// Weight of one element.
    pub fn get(&self, element: Element) -> f64 {
        self.weights[element.index() as usize]
    }

    /// Add weight to one element.
    pub fn add(&mut self, element: Element, weight: f64) {
        self.weights[element.index() as usize] += weight;
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Iterate `(element, weight)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }
}

/// Count element weights across the present pillars.
///
/// Per pillar: +1.0 for the stem's element, +1.0 for the branch's element,
/// +0.5 for each hidden stem's element.
pub fn count_elements(pillars: &FourPillars) -> ElementCount {
    let mut count = ElementCount::default();
    for p in pillars.iter() {
        count.add(p.stem.element(), 1.0);
        count.add(p.branch.element(), 1.0);
        for hs in p.branch.hidden_stems() {
            count.add(hs.element(), HIDDEN_STEM_WEIGHT);
        }
    }
    count
}

/// Elements absent from or underrepresented in a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingElements {
    /// Elements with zero weight.
    pub missing: Vec<Element>,
    /// Elements with weight below 1.5 (but nonzero).
    pub weak: Vec<Element>,
}

/// Classify elements as missing (weight 0) or weak (weight < 1.5).
pub fn missing_elements(count: &ElementCount) -> MissingElements {
    let mut missing = Vec::new();
    let mut weak = Vec::new();
    for (e, w) in count.iter() {
        if w == 0.0 {
            missing.push(e);
        } else if w < 1.5 {
            weak.push(e);
        }
    }
    MissingElements { missing, weak }
}

/// Day Master strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Strong,
    Balanced,
    Weak,
}

impl Strength {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Balanced => "balanced",
            Self::Weak => "weak",
        }
    }

    /// Chinese term.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Strong => "身强",
            Self::Balanced => "中和",
            Self::Weak => "身弱",
        }
    }
}

/// Day Master analysis result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayMasterInfo {
    /// The Day Master: element of the Day Pillar's stem.
    pub element: Element,
    /// Strength classification.
    pub strength: Strength,
    /// support / (support + drain), 0.5 when both are zero.
    pub ratio: f64,
    /// Weight supporting the Day Master.
    pub support: f64,
    /// Weight draining the Day Master.
    pub drain: f64,
}

/// Classify the Day Master's strength from the element histogram.
///
/// support = own weight + 0.7 × generator weight;
/// drain = 0.7 × generated weight + 1.0 × controller weight
///       + 0.5 × controlled weight.
/// ratio > 0.55 → strong, ratio < 0.45 → weak, else balanced.
pub fn day_master_strength(pillars: &FourPillars) -> DayMasterInfo {
    let day_master = pillars.day.stem.element();
    let count = count_elements(pillars);

    let support = count.get(day_master) + count.get(day_master.generated_by()) * 0.7;
    let drain = count.get(day_master.generates()) * 0.7
        + count.get(day_master.overcome_by())
        + count.get(day_master.overcomes()) * 0.5;

    let total = support + drain;
    let ratio = if total > 0.0 { support / total } else { 0.5 };

    let strength = if ratio > 0.55 {
        Strength::Strong
    } else if ratio < 0.45 {
        Strength::Weak
    } else {
        Strength::Balanced
    };

    DayMasterInfo {
        element: day_master,
        strength,
        ratio,
        support,
        drain,
    }
}
