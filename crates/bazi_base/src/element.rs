//! The Five Elements (五行) and their interaction cycles.
//!
//! The elements form two fixed cycles:
//! - Generating (相生): Wood→Fire→Earth→Metal→Water→Wood
//! - Overcoming (相克): Wood→Earth→Water→Fire→Metal→Wood

/// The Five Elements in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in order, for table indexing (0 = Wood .. 4 = Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character for the element.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (相生 cycle).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Element {
        match self {
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
        }
    }

    /// The element this one overcomes (相克 cycle).
    pub const fn overcomes(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Element {
        match self {
            Self::Wood => Self::Metal,
            Self::Fire => Self::Water,
            Self::Earth => Self::Wood,
            Self::Metal => Self::Fire,
            Self::Water => Self::Earth,
        }
    }

    /// Representative display color (hex).
    pub const fn color(self) -> &'static str {
        match self {
            Self::Wood => "#2E7D32",
            Self::Fire => "#D32F2F",
            Self::Earth => "#F9A825",
            Self::Metal => "#9E9E9E",
            Self::Water => "#1565C0",
        }
    }

    /// Lucky colors associated with the element.
    pub const fn lucky_colors(self) -> &'static [&'static str] {
        match self {
            Self::Wood => &["Green", "Brown", "Teal"],
            Self::Fire => &["Red", "Orange", "Purple", "Pink"],
            Self::Earth => &["Yellow", "Brown", "Beige", "Ochre"],
            Self::Metal => &["White", "Gold", "Silver", "Gray"],
            Self::Water => &["Blue", "Black", "Navy", "Teal"],
        }
    }

    /// Lucky compass direction(s) associated with the element.
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Wood => "East",
            Self::Fire => "South",
            Self::Earth => "Center / Southwest / Northeast",
            Self::Metal => "West / Northwest",
            Self::Water => "North",
        }
    }

    /// All five elements in order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_elements_count() {
        assert_eq!(ALL_ELEMENTS.len(), 5);
    }

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generating_cycle_closes() {
        // Five generation steps return to the start.
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.generates();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn overcoming_cycle_closes() {
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.overcomes();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn generated_by_inverts_generates() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
        }
    }

    #[test]
    fn overcome_by_inverts_overcomes() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.overcomes().overcome_by(), e);
        }
    }

    #[test]
    fn wood_generates_fire() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
    }

    #[test]
    fn wood_overcomes_earth() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
    }

    #[test]
    fn names_nonempty() {
        for e in ALL_ELEMENTS {
            assert!(!e.name().is_empty());
            assert!(!e.chinese().is_empty());
            assert!(!e.lucky_colors().is_empty());
        }
    }
}
