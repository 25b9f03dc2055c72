//! Pillar calculators: pure, deterministic mapping from a Gregorian calendar
//! date (and optionally an hour) to the Four Pillars (四柱).
//!
//! The Day Pillar is calendar-exact, anchored at JDN 2415021 (1900-01-01 =
//! 甲戌). The Month Pillar approximates solar-term boundaries with calendar
//! months; see [`calc::month_pillar`].
//!
//! Nothing here fails or allocates: all computation is closed-form modular
//! arithmetic over static tables.

pub mod calc;
pub mod jdn;
pub mod pillar;

pub use calc::{
    day_pillar, four_pillars, hour_branch, hour_pillar, month_pillar, year_pillar,
    zodiac_from_year,
};
pub use jdn::{JDN_1900_01_01, calendar_from_jdn, julian_day_number};
pub use pillar::{FourPillars, Pillar};
