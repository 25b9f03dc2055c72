//! Static symbolic tables for BaZi (Four Pillars) calculations.
//!
//! This crate provides:
//! - The 10 Heavenly Stems and 12 Earthly Branches
//! - The Five Elements with their generating and overcoming cycles
//! - Yin/Yang polarity
//! - Hidden stems, zodiac animals, and the 12 double-hour (shichen) table
//!
//! All data is fixed, process-wide constant state derived from traditional
//! Chinese almanac (万年历) conventions.

pub mod branch;
pub mod element;
pub mod polarity;
pub mod shichen;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element};
pub use polarity::Polarity;
pub use shichen::{ALL_DOUBLE_HOURS, DoubleHour, double_hour_for_branch};
pub use stem::{ALL_STEMS, Stem};
