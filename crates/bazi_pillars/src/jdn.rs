//! Julian Day Number arithmetic (proleptic Gregorian calendar).
//!
//! The JDN is the continuous day count anchoring the exact Day Pillar
//! computation. Floor division (`div_euclid`) keeps the formulas correct for
//! dates before the common era.

/// JDN of 1900-01-01 (Gregorian), the Day Pillar anchor date.
pub const JDN_1900_01_01: i64 = 2_415_021;

/// Julian Day Number for a Gregorian calendar date.
///
/// Standard proleptic formula; valid for any integer inputs. Out-of-range
/// month/day values are not rejected, the arithmetic simply extends the
/// calendar (month 13 behaves as January of the following year).
pub fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Gregorian calendar date `(year, month, day)` for a Julian Day Number.
///
/// Inverse of [`julian_day_number`].
pub fn calendar_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_1900() {
        assert_eq!(julian_day_number(1900, 1, 1), JDN_1900_01_01);
    }

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 (noon JD 2451545.0 → JDN 2451545)
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn consecutive_days_increment() {
        let d1 = julian_day_number(2024, 2, 28);
        let d2 = julian_day_number(2024, 2, 29);
        let d3 = julian_day_number(2024, 3, 1);
        assert_eq!(d2, d1 + 1);
        assert_eq!(d3, d2 + 1);
    }

    #[test]
    fn non_leap_century() {
        let d1 = julian_day_number(1900, 2, 28);
        let d2 = julian_day_number(1900, 3, 1);
        assert_eq!(d2, d1 + 1);
    }

    #[test]
    fn roundtrip_range() {
        for jdn in (2_415_021..2_488_070).step_by(137) {
            let (y, m, d) = calendar_from_jdn(jdn);
            assert_eq!(julian_day_number(y, m, d), jdn);
            assert!((1..=12).contains(&m));
            assert!((1..=31).contains(&d));
        }
    }

    #[test]
    fn roundtrip_known_date() {
        let (y, m, d) = calendar_from_jdn(julian_day_number(2026, 8, 23));
        assert_eq!((y, m, d), (2026, 8, 23));
    }

    #[test]
    fn month_thirteen_extends_year() {
        assert_eq!(julian_day_number(2023, 13, 1), julian_day_number(2024, 1, 1));
    }
}
