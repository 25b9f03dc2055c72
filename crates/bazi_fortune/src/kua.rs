//! Kua number (命卦数) and its direction groups.

/// Gender for the Kua formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// East/West direction group of a Kua number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KuaGroup {
    East,
    West,
}

impl KuaGroup {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "East",
            Self::West => "West",
        }
    }
}

/// Auspicious and inauspicious directions for a Kua number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KuaDirections {
    pub auspicious: [&'static str; 4],
    pub inauspicious: [&'static str; 4],
    pub group: KuaGroup,
}

/// Repeated decimal digit sum, reduced to a single digit.
fn digit_sum(mut n: u64) -> u64 {
    loop {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        if sum <= 9 {
            return sum;
        }
        n = sum;
    }
}

/// Kua number for a birth year and gender.
///
/// Male: `10 − digit sum` (5 → 2, 0 → 9).
/// Female: `digit sum + 5` (>9 → −9, 5 → 8).
/// The result is never 5; both branches remap it.
pub fn kua_number(year: i64, gender: Gender) -> u8 {
    let sum = digit_sum(year.unsigned_abs()) as i64;
    let kua = match gender {
        Gender::Male => {
            let mut k = 10 - sum;
            if k == 5 {
                k = 2;
            }
            if k == 0 {
                k = 9;
            }
            k
        }
        Gender::Female => {
            let mut k = sum + 5;
            if k > 9 {
                k -= 9;
            }
            if k == 5 {
                k = 8;
            }
            k
        }
    };
    kua as u8
}

/// Direction table for a Kua number. Unknown values (including the never
/// produced 5) fall back to Kua 1's directions.
pub const fn kua_directions(kua: u8) -> KuaDirections {
    match kua {
        2 => KuaDirections {
            auspicious: ["Northeast", "West", "Northwest", "Southwest"],
            inauspicious: ["East", "Southeast", "South", "North"],
            group: KuaGroup::West,
        },
        3 => KuaDirections {
            auspicious: ["South", "North", "Southeast", "East"],
            inauspicious: ["Southwest", "Northeast", "Northwest", "West"],
            group: KuaGroup::East,
        },
        4 => KuaDirections {
            auspicious: ["North", "South", "East", "Southeast"],
            inauspicious: ["Northwest", "Southwest", "Northeast", "West"],
            group: KuaGroup::East,
        },
        6 => KuaDirections {
            auspicious: ["West", "Northeast", "Southwest", "Northwest"],
            inauspicious: ["South", "North", "Southeast", "East"],
            group: KuaGroup::West,
        },
        7 => KuaDirections {
            auspicious: ["Northwest", "Southwest", "Northeast", "West"],
            inauspicious: ["North", "South", "East", "Southeast"],
            group: KuaGroup::West,
        },
        8 => KuaDirections {
            auspicious: ["Southwest", "Northwest", "West", "Northeast"],
            inauspicious: ["Southeast", "East", "North", "South"],
            group: KuaGroup::West,
        },
        9 => KuaDirections {
            auspicious: ["East", "Southeast", "North", "South"],
            inauspicious: ["Northeast", "West", "Southwest", "Northwest"],
            group: KuaGroup::East,
        },
        _ => KuaDirections {
            auspicious: ["Southeast", "East", "South", "North"],
            inauspicious: ["West", "Northwest", "Southwest", "Northeast"],
            group: KuaGroup::East,
        },
    }
}
