//! Derived BaZi analysis built on the pillar calculators.
//!
//! This crate provides:
//! - Five-Element aggregation and Day Master strength classification
//! - Branch relation classification (clash, harmony, triple harmony,
//!   punishment, harm)
//! - Deterministic daily fortune ratings per zodiac sign
//! - Daily almanac guidance, lucky hours, feng shui tips
//! - Yearly fortune, Kua numbers, and personality profiles
//!
//! Every function is stateless and referentially transparent; results
//! depend only on the arguments and the static tables in `bazi_base`.

pub mod almanac;
pub mod elements;
pub mod kua;
pub mod personality;
pub mod rating;
pub mod relation;
pub mod year_fortune;

pub use almanac::{AlmanacInfo, LuckyHour, daily_almanac, feng_shui_tip, lucky_hours};
pub use elements::{
    DayMasterInfo, ElementCount, MissingElements, Strength, count_elements, day_master_strength,
    missing_elements,
};
pub use kua::{Gender, KuaDirections, KuaGroup, kua_directions, kua_number};
pub use personality::{PersonalityProfile, personality_profile};
pub use rating::{DailyRatings, daily_ratings};
pub use relation::{BranchRelation, branch_relation};
pub use year_fortune::{YearFortune, year_fortune};
