//! Personality profiles keyed by Day Master element and strength.

use bazi_base::Element;

use crate::elements::Strength;

/// Trait profile for a Day Master element at a given strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityProfile {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    pub career: &'static str,
    pub advice: &'static str,
}

/// Profile lookup. A balanced Day Master reads from the weak profile, as the
/// traditional simplified tables only distinguish strong and weak.
pub const fn personality_profile(element: Element, strength: Strength) -> &'static PersonalityProfile {
    let strong = matches!(strength, Strength::Strong);
    match element {
        Element::Wood => {
            if strong { &WOOD_STRONG } else { &WOOD_WEAK }
        }
        Element::Fire => {
            if strong { &FIRE_STRONG } else { &FIRE_WEAK }
        }
        Element::Earth => {
            if strong { &EARTH_STRONG } else { &EARTH_WEAK }
        }
        Element::Metal => {
            if strong { &METAL_STRONG } else { &METAL_WEAK }
        }
        Element::Water => {
            if strong { &WATER_STRONG } else { &WATER_WEAK }
        }
    }
}

const WOOD_STRONG: PersonalityProfile = PersonalityProfile {
    positive: &["Confident leader", "Creative visionary", "Generous spirit", "Natural growth mindset"],
    negative: &["Can be stubborn", "May overextend", "Sometimes inflexible"],
    career: "Leadership, creative industries, education, publishing",
    advice: "Practice flexibility. Metal energy (organization, discipline) balances your strong Wood.",
};

const WOOD_WEAK: PersonalityProfile = PersonalityProfile {
    positive: &["Gentle and adaptive", "Empathetic listener", "Artistic soul", "Diplomatic nature"],
    negative: &["May lack confidence", "Can be indecisive", "Prone to overthinking"],
    career: "Arts, counseling, writing, design",
    advice: "Strengthen with Water energy (flow, wisdom). Surround yourself with supportive people.",
};

const FIRE_STRONG: PersonalityProfile = PersonalityProfile {
    positive: &["Charismatic and inspiring", "Quick-witted", "Passionate leader", "Warm-hearted"],
    negative: &["Can be impulsive", "May burn out", "Sometimes too intense"],
    career: "Entertainment, marketing, sales, public speaking",
    advice: "Use Earth energy (stability, grounding) to channel your fire productively.",
};

const FIRE_WEAK: PersonalityProfile = PersonalityProfile {
    positive: &["Warm and approachable", "Intuitive", "Good mediator", "Quietly passionate"],
    negative: &["May lack assertiveness", "Can be anxious", "Sometimes overthinks"],
    career: "Therapy, coaching, non-profit, social work",
    advice: "Feed your fire with Wood energy (growth, activity). Stay physically active.",
};

const EARTH_STRONG: PersonalityProfile = PersonalityProfile {
    positive: &["Reliable and trustworthy", "Practical problem-solver", "Nurturing presence", "Steady under pressure"],
    negative: &["Can be too cautious", "May resist change", "Sometimes overthinks"],
    career: "Real estate, finance, agriculture, HR, management",
    advice: "Wood energy (growth, change) prevents stagnation. Embrace new experiences.",
};

const EARTH_WEAK: PersonalityProfile = PersonalityProfile {
    positive: &["Adaptable and open", "Good listener", "Gentle strength", "Versatile"],
    negative: &["May worry excessively", "Can be scattered", "Prone to self-doubt"],
    career: "Support roles, analysis, research, healthcare",
    advice: "Fire energy (passion, confidence) strengthens your Earth. Set firm boundaries.",
};

const METAL_STRONG: PersonalityProfile = PersonalityProfile {
    positive: &["Disciplined and precise", "Strong moral compass", "Decisive leader", "Detail-oriented"],
    negative: &["Can be rigid", "May be overly critical", "Sometimes cold"],
    career: "Law, engineering, technology, finance, surgery",
    advice: "Water energy (flow, emotion) softens your metal edge. Practice empathy.",
};

const METAL_WEAK: PersonalityProfile = PersonalityProfile {
    positive: &["Refined taste", "Thoughtful and fair", "Good aesthetic sense", "Balanced thinker"],
    negative: &["May lack follow-through", "Can be too accommodating", "Self-critical"],
    career: "Design, jewelry, wellness, music, accounting",
    advice: "Earth energy (stability, support) strengthens your Metal. Build strong routines.",
};

const WATER_STRONG: PersonalityProfile = PersonalityProfile {
    positive: &["Wise and philosophical", "Excellent communicator", "Resourceful", "Highly adaptive"],
    negative: &["Can be manipulative", "May be overly emotional", "Sometimes unpredictable"],
    career: "Research, academia, travel, media, international business",
    advice: "Earth energy (boundaries, structure) contains your water wisely. Set clear goals.",
};

const WATER_WEAK: PersonalityProfile = PersonalityProfile {
    positive: &["Sensitive and intuitive", "Creative thinker", "Empathetic", "Flowing personality"],
    negative: &["May be easily influenced", "Can feel overwhelmed", "Sometimes directionless"],
    career: "Writing, psychology, spiritual work, customer service",
    advice: "Metal energy (structure, clarity) feeds your Water. Use planners and systems.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_base::ALL_ELEMENTS;

    #[test]
    fn every_profile_populated() {
        for e in ALL_ELEMENTS {
            for s in [Strength::Strong, Strength::Balanced, Strength::Weak] {
                let p = personality_profile(e, s);
                assert!(!p.positive.is_empty());
                assert!(!p.negative.is_empty());
                assert!(!p.career.is_empty());
                assert!(!p.advice.is_empty());
            }
        }
    }

    #[test]
    fn balanced_reads_weak_profile() {
        for e in ALL_ELEMENTS {
            assert_eq!(
                personality_profile(e, Strength::Balanced),
                personality_profile(e, Strength::Weak)
            );
        }
    }

    #[test]
    fn strong_and_weak_differ() {
        for e in ALL_ELEMENTS {
            assert_ne!(
                personality_profile(e, Strength::Strong),
                personality_profile(e, Strength::Weak)
            );
        }
    }
}
