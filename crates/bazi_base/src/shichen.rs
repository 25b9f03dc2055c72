//! The 12 double-hours (时辰) of the traditional day.
//!
//! Each branch owns a two-hour slot; the Zi slot straddles midnight
//! (23:00–01:00).

use crate::branch::Branch;

/// One traditional double-hour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleHour {
    /// Clock hour the slot starts at (0-23).
    pub start_hour: u8,
    /// Clock hour the slot ends at (0-23).
    pub end_hour: u8,
    /// Chinese name, e.g. "子时".
    pub chinese: &'static str,
}

/// The 12 double-hours in branch order (index 0 = Zi slot).
pub const ALL_DOUBLE_HOURS: [DoubleHour; 12] = [
    DoubleHour { start_hour: 23, end_hour: 1, chinese: "子时" },
    DoubleHour { start_hour: 1, end_hour: 3, chinese: "丑时" },
    DoubleHour { start_hour: 3, end_hour: 5, chinese: "寅时" },
    DoubleHour { start_hour: 5, end_hour: 7, chinese: "卯时" },
    DoubleHour { start_hour: 7, end_hour: 9, chinese: "辰时" },
    DoubleHour { start_hour: 9, end_hour: 11, chinese: "巳时" },
    DoubleHour { start_hour: 11, end_hour: 13, chinese: "午时" },
    DoubleHour { start_hour: 13, end_hour: 15, chinese: "未时" },
    DoubleHour { start_hour: 15, end_hour: 17, chinese: "申时" },
    DoubleHour { start_hour: 17, end_hour: 19, chinese: "酉时" },
    DoubleHour { start_hour: 19, end_hour: 21, chinese: "戌时" },
    DoubleHour { start_hour: 21, end_hour: 23, chinese: "亥时" },
];

/// The double-hour slot owned by a branch.
pub const fn double_hour_for_branch(branch: Branch) -> DoubleHour {
    ALL_DOUBLE_HOURS[branch.index() as usize]
}

impl DoubleHour {
    /// Format the slot as a 12-hour clock range, e.g. "11:00 PM – 1:00 AM".
    pub fn time_range(self) -> String {
        format!("{} – {}", format_hour(self.start_hour), format_hour(self.end_hour))
    }
}

fn format_hour(h: u8) -> String {
    let period = if h >= 12 { "PM" } else { "AM" };
    let hour12 = match h {
        0 => 12,
        1..=12 => h,
        _ => h - 12,
    };
    format!("{hour12}:00 {period}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_slots() {
        assert_eq!(ALL_DOUBLE_HOURS.len(), 12);
    }

    #[test]
    fn zi_slot_straddles_midnight() {
        let zi = double_hour_for_branch(Branch::Zi);
        assert_eq!(zi.start_hour, 23);
        assert_eq!(zi.end_hour, 1);
        assert_eq!(zi.chinese, "子时");
    }

    #[test]
    fn slots_cover_two_hours_each() {
        for dh in &ALL_DOUBLE_HOURS[1..] {
            assert_eq!(dh.end_hour - dh.start_hour, 2);
        }
    }

    #[test]
    fn zi_time_range() {
        let zi = double_hour_for_branch(Branch::Zi);
        assert_eq!(zi.time_range(), "11:00 PM – 1:00 AM");
    }

    #[test]
    fn wu_time_range() {
        let wu = double_hour_for_branch(Branch::Wu);
        assert_eq!(wu.time_range(), "11:00 AM – 1:00 PM");
    }

    #[test]
    fn noon_is_pm() {
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(0), "12:00 AM");
    }
}
