//! Pillar calculators: Gregorian date → Year/Month/Day/Hour Pillar.
//!
//! Every function is pure and total: no input is rejected, out-of-range
//! values wrap through the cycle arithmetic. Collaborators validate inputs
//! before calling (the engine itself never fails).

use bazi_base::{Branch, Stem};

use crate::jdn::{JDN_1900_01_01, julian_day_number};
use crate::pillar::{FourPillars, Pillar};

/// Cycle index of the Day Pillar anchor: 1900-01-01 was 甲戌 (index 10).
const ANCHOR_CYCLE_INDEX: i64 = 10;

/// Five Tigers rule (五虎遁): month stem of the first chinese month,
/// indexed by year stem. 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
const FIVE_TIGERS_BASE: [i64; 10] = [2, 4, 6, 8, 0, 2, 4, 6, 8, 0];

/// Five Rats rule (五鼠遁): hour stem of the Zi slot, indexed by day stem.
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
const FIVE_RATS_BASE: [i64; 10] = [0, 2, 4, 6, 8, 0, 2, 4, 6, 8];

/// Year Pillar (年柱). Anchor: year 4 CE was 甲子 (stem 0, branch 0).
pub fn year_pillar(year: i64) -> Pillar {
    Pillar {
        stem: Stem::from_index(year - 4),
        branch: Branch::from_index(year - 4),
    }
}

/// Month Pillar (月柱), calendar-month approximation.
///
/// The traditional month boundary follows the solar terms (节气); this uses
/// the Gregorian calendar month instead (February → 1st chinese month,
/// January → 12th of the prior cycle). The approximation is deliberate and
/// only affects dates near a solar-term boundary; Day Pillar arithmetic is
/// exact and unaffected.
pub fn month_pillar(year: i64, month: i64) -> Pillar {
    let chinese_month = if month >= 2 { month - 1 } else { 12 };
    let branch = Branch::from_index(chinese_month + 1);

    // Five Tigers rule: the year stem fixes the stem of the 1st chinese
    // month, later months advance by one stem each.
    let year_stem = year_pillar(year).stem.index() as i64;
    let base = FIVE_TIGERS_BASE[year_stem as usize];
    let stem = Stem::from_index(base + chinese_month - 1);

    Pillar { stem, branch }
}

/// Day Pillar (日柱), calendar-exact.
///
/// Offsets the date's Julian Day Number from the 1900-01-01 anchor (甲戌,
/// cycle index 10) and reduces into the 60-term cycle.
pub fn day_pillar(year: i64, month: i64, day: i64) -> Pillar {
    let days_since_anchor = julian_day_number(year, month, day) - JDN_1900_01_01;
    Pillar::from_cycle_index(days_since_anchor + ANCHOR_CYCLE_INDEX)
}

/// Branch of the double-hour slot containing a clock hour.
///
/// 23:00 and 00:00 both fall in the Zi slot; every other hour maps through
/// `floor((hour + 1) / 2)`.
pub fn hour_branch(hour: i64) -> Branch {
    if hour == 23 || hour == 0 {
        return Branch::Zi;
    }
    Branch::from_index((hour + 1).div_euclid(2))
}

/// Hour Pillar (时柱).
///
/// Five Rats rule: the day stem fixes the stem of the Zi slot, later slots
/// advance by one stem each.
pub fn hour_pillar(year: i64, month: i64, day: i64, hour: i64) -> Pillar {
    let branch = hour_branch(hour);
    let day_stem = day_pillar(year, month, day).stem.index() as i64;
    let base = FIVE_RATS_BASE[day_stem as usize];
    let stem = Stem::from_index(base + branch.index() as i64);
    Pillar { stem, branch }
}

/// Complete Four Pillars for a date, with an optional hour.
pub fn four_pillars(year: i64, month: i64, day: i64, hour: Option<i64>) -> FourPillars {
    FourPillars {
        year: year_pillar(year),
        month: month_pillar(year, month),
        day: day_pillar(year, month, day),
        hour: hour.map(|h| hour_pillar(year, month, day, h)),
    }
}

/// Zodiac branch for a birth year: `(year - 4) mod 12`.
pub fn zodiac_from_year(year: i64) -> Branch {
    Branch::from_index(year - 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_anchor_4ce() {
        let p = year_pillar(4);
        assert_eq!(p.stem, Stem::Jia);
        assert_eq!(p.branch, Branch::Zi);
    }

    #[test]
    fn year_2026_is_fire_horse() {
        // 2026 = 丙午
        let p = year_pillar(2026);
        assert_eq!(p.stem, Stem::Bing);
        assert_eq!(p.branch, Branch::Wu);
        assert_eq!(p.chinese(), "丙午");
    }

    #[test]
    fn year_1984_starts_cycle() {
        // 1984 = 甲子, a cycle start
        let p = year_pillar(1984);
        assert_eq!(p.cycle_index(), Some(0));
    }

    #[test]
    fn year_before_anchor_wraps() {
        // Year 3 CE: one step before the anchor, 癸亥 (cycle index 59)
        let p = year_pillar(3);
        assert_eq!(p.stem, Stem::Gui);
        assert_eq!(p.branch, Branch::Hai);
    }

    #[test]
    fn day_anchor_1900() {
        // 1900-01-01 = 甲戌 (stem 0, branch 10)
        let p = day_pillar(1900, 1, 1);
        assert_eq!(p.stem, Stem::Jia);
        assert_eq!(p.branch, Branch::Xu);
        assert_eq!(p.cycle_index(), Some(10));
    }

    #[test]
    fn day_before_anchor() {
        let p = day_pillar(1899, 12, 31);
        assert_eq!(p.cycle_index(), Some(9));
    }

    #[test]
    fn month_branch_mapping() {
        // February → 1st chinese month → 寅 (index 2)
        assert_eq!(month_pillar(2024, 2).branch, Branch::Yin);
        // March → 卯
        assert_eq!(month_pillar(2024, 3).branch, Branch::Mao);
        // January → 12th chinese month → 丑
        assert_eq!(month_pillar(2024, 1).branch, Branch::Chou);
    }

    #[test]
    fn month_stem_five_tigers() {
        // 2024 = 甲辰 year (stem Jia, index 0) → 1st month stem = 丙
        assert_eq!(month_pillar(2024, 2).stem, Stem::Bing);
        // Each later month advances the stem by one
        assert_eq!(month_pillar(2024, 3).stem, Stem::Ding);
    }

    #[test]
    fn month_january_uses_prior_cycle() {
        // January 2024 belongs to the 12th chinese month of the 癸卯 (2023)
        // year's run: base for year stem 0 (2024) is still used with
        // chinese_month = 12.
        let p = month_pillar(2024, 1);
        assert_eq!(p.branch, Branch::Chou);
        assert_eq!(p.stem, Stem::from_index(FIVE_TIGERS_BASE[0] + 11));
    }

    #[test]
    fn hour_branch_slots() {
        assert_eq!(hour_branch(23), Branch::Zi);
        assert_eq!(hour_branch(0), Branch::Zi);
        assert_eq!(hour_branch(1), Branch::Chou);
        assert_eq!(hour_branch(10), Branch::Si);
        assert_eq!(hour_branch(12), Branch::Wu);
        assert_eq!(hour_branch(22), Branch::Hai);
    }

    #[test]
    fn hour_stem_five_rats() {
        // A 甲 day starts its Zi slot at stem 甲
        let day = day_pillar(1900, 1, 1); // 甲戌
        assert_eq!(day.stem, Stem::Jia);
        let h = hour_pillar(1900, 1, 1, 0);
        assert_eq!(h.stem, Stem::Jia);
        assert_eq!(h.branch, Branch::Zi);
    }

    #[test]
    fn four_pillars_hour_optional() {
        let without = four_pillars(1990, 5, 15, None);
        assert!(without.hour.is_none());
        let with = four_pillars(1990, 5, 15, Some(10));
        let hour = with.hour.unwrap();
        // 10 AM falls in the 巳 slot (index 5)
        assert_eq!(hour.branch, Branch::Si);
        assert_eq!(with.year, without.year);
        assert_eq!(with.day, without.day);
    }

    #[test]
    fn zodiac_2024_dragon() {
        assert_eq!(zodiac_from_year(2024), Branch::Chen);
        assert_eq!(zodiac_from_year(2026), Branch::Wu);
    }

    #[test]
    fn day_pillar_parity_invariant() {
        // Stem and branch of a day pillar always share parity.
        for offset in 0..120 {
            let p = day_pillar(2024, 1, 1 + offset);
            assert_eq!(p.stem.index() % 2, p.branch.index() % 2);
        }
    }
}
