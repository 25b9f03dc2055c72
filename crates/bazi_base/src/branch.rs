//! The 12 Earthly Branches (地支).
//!
//! Branches cycle with period 12. Each branch carries a zodiac animal, a
//! single element (distribution: Water×2, Wood×2, Fire×2, Metal×2, Earth×4),
//! alternating polarity, and 1–3 hidden stems (藏干) that contribute partial
//! weight in element analysis.

use crate::element::Element;
use crate::polarity::Polarity;
use crate::stem::Stem;

/// The 12 Earthly Branches in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order, for table indexing (0 = Zi .. 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Transliterated name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character for the branch.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// Zodiac animal emoji.
    pub const fn animal_emoji(self) -> &'static str {
        match self {
            Self::Zi => "🐀",
            Self::Chou => "🐂",
            Self::Yin => "🐅",
            Self::Mao => "🐇",
            Self::Chen => "🐉",
            Self::Si => "🐍",
            Self::Wu => "🐴",
            Self::Wei => "🐐",
            Self::Shen => "🐵",
            Self::You => "🐔",
            Self::Xu => "🐕",
            Self::Hai => "🐷",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch from any integer index, wrapping modulo 12.
    ///
    /// Negative values wrap into range, so this never fails.
    pub const fn from_index(index: i64) -> Branch {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Look up a branch by zodiac animal name (case-insensitive).
    pub fn from_animal(name: &str) -> Option<Branch> {
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.animal().eq_ignore_ascii_case(name))
    }

    /// Element of the branch.
    ///
    /// 子→Water, 丑→Earth, 寅卯→Wood, 辰→Earth, 巳午→Fire, 未→Earth,
    /// 申酉→Metal, 戌→Earth, 亥→Water.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Polarity of the branch. Even indices are Yang, odd are Yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Hidden stems (藏干) of the branch, principal stem first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        match self {
            Self::Zi => &[Stem::Gui],
            Self::Chou => &[Stem::Ji, Stem::Gui, Stem::Xin],
            Self::Yin => &[Stem::Jia, Stem::Bing, Stem::Wu],
            Self::Mao => &[Stem::Yi],
            Self::Chen => &[Stem::Wu, Stem::Yi, Stem::Gui],
            Self::Si => &[Stem::Bing, Stem::Wu, Stem::Geng],
            Self::Wu => &[Stem::Ding, Stem::Ji],
            Self::Wei => &[Stem::Ji, Stem::Ding, Stem::Yi],
            Self::Shen => &[Stem::Geng, Stem::Wu, Stem::Ren],
            Self::You => &[Stem::Xin],
            Self::Xu => &[Stem::Wu, Stem::Xin, Stem::Ding],
            Self::Hai => &[Stem::Ren, Stem::Jia],
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn from_index_roundtrip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_index(b.index() as i64), b);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Branch::from_index(12), Branch::Zi);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(18), Branch::Wu);
    }

    #[test]
    fn element_distribution() {
        // Water 2, Wood 2, Fire 2, Metal 2, Earth 4.
        let count = |e: Element| ALL_BRANCHES.iter().filter(|b| b.element() == e).count();
        assert_eq!(count(Element::Water), 2);
        assert_eq!(count(Element::Wood), 2);
        assert_eq!(count(Element::Fire), 2);
        assert_eq!(count(Element::Metal), 2);
        assert_eq!(count(Element::Earth), 4);
    }

    #[test]
    fn hidden_stem_counts() {
        for b in ALL_BRANCHES {
            let n = b.hidden_stems().len();
            assert!((1..=3).contains(&n), "{} has {} hidden stems", b.name(), n);
        }
    }

    #[test]
    fn zi_hides_gui() {
        assert_eq!(Branch::Zi.hidden_stems(), &[Stem::Gui]);
    }

    #[test]
    fn from_animal_lookup() {
        assert_eq!(Branch::from_animal("dragon"), Some(Branch::Chen));
        assert_eq!(Branch::from_animal("Horse"), Some(Branch::Wu));
        assert_eq!(Branch::from_animal("unicorn"), None);
    }

    #[test]
    fn wu_is_fire_horse() {
        assert_eq!(Branch::Wu.animal(), "Horse");
        assert_eq!(Branch::Wu.element(), Element::Fire);
        assert_eq!(Branch::Wu.index(), 6);
    }
}
