//! The 10 Heavenly Stems (天干).
//!
//! Stems cycle with period 10. Each of the Five Elements claims exactly two
//! adjacent stems (甲乙→木, 丙丁→火, 戊己→土, 庚辛→金, 壬癸→水), and
//! polarity alternates Yang/Yin down the sequence.

use crate::element::Element;
use crate::polarity::Polarity;

/// The 10 Heavenly Stems in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order, for table indexing (0 = Jia .. 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Transliterated name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character for the stem.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin with tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jiǎ",
            Self::Yi => "yǐ",
            Self::Bing => "bǐng",
            Self::Ding => "dīng",
            Self::Wu => "wù",
            Self::Ji => "jǐ",
            Self::Geng => "gēng",
            Self::Xin => "xīn",
            Self::Ren => "rén",
            Self::Gui => "guǐ",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem from any integer index, wrapping modulo 10.
    ///
    /// Negative values wrap into range, so this never fails.
    pub const fn from_index(index: i64) -> Stem {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Element of the stem. Each element claims two adjacent stems.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Polarity of the stem. Even indices are Yang, odd are Yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn from_index_roundtrip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_index(s.index() as i64), s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(23), Stem::Ding);
    }

    #[test]
    fn each_element_claims_two_stems() {
        for e in crate::element::ALL_ELEMENTS {
            let n = ALL_STEMS.iter().filter(|s| s.element() == e).count();
            assert_eq!(n, 2, "{} should claim 2 stems", e.name());
        }
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expected = if s.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(s.polarity(), expected);
        }
    }

    #[test]
    fn jia_is_yang_wood() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Jia.chinese(), "甲");
    }
}
