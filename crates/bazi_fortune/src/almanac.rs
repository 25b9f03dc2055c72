//! Daily almanac: lucky hours, do/don't guidance, and feng shui tips.
//!
//! Everything here is selected deterministically from the day's pillar via
//! small modular indices into static tables.

use bazi_base::{Branch, DoubleHour, Element, Polarity, double_hour_for_branch};
use bazi_pillars::{Pillar, day_pillar};

/// Auspicious hour branches per day stem (traditional almanac table).
const LUCKY_BRANCHES: [[u8; 4]; 10] = [
    [0, 1, 4, 5], // 甲: 子丑辰巳
    [2, 3, 6, 7], // 乙: 寅卯午未
    [0, 1, 4, 5], // 丙
    [2, 3, 8, 9], // 丁: 寅卯申酉
    [0, 1, 4, 5], // 戊
    [2, 3, 6, 7], // 己
    [0, 1, 4, 5], // 庚
    [2, 3, 8, 9], // 辛
    [0, 1, 4, 5], // 壬
    [2, 3, 6, 7], // 癸
];

/// One auspicious double-hour of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckyHour {
    /// Branch owning the slot.
    pub branch: Branch,
    /// The slot itself (clock hours and Chinese name).
    pub double_hour: DoubleHour,
}

/// The four auspicious double-hours for a date, from the day stem.
pub fn lucky_hours(year: i64, month: i64, day: i64) -> [LuckyHour; 4] {
    let stem = day_pillar(year, month, day).stem;
    LUCKY_BRANCHES[stem.index() as usize].map(|i| {
        let branch = Branch::from_index(i64::from(i));
        LuckyHour {
            branch,
            double_hour: double_hour_for_branch(branch),
        }
    })
}

/// Daily do/don't guidance derived from the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmanacInfo {
    pub day_pillar: Pillar,
    /// Element of the day stem.
    pub day_element: Element,
    /// Polarity of the day stem.
    pub polarity: Polarity,
    pub do_items: [&'static str; 3],
    pub dont_items: [&'static str; 3],
}

/// Build the almanac for a date.
///
/// The do list index is `(stem + branch) mod 5`, the don't list index
/// `(2·stem + branch) mod 5`, both within the day element's five variants.
pub fn daily_almanac(year: i64, month: i64, day: i64) -> AlmanacInfo {
    let pillar = day_pillar(year, month, day);
    let element = pillar.stem.element();
    let s = pillar.stem.index() as usize;
    let b = pillar.branch.index() as usize;

    let do_index = (s + b) % 5;
    let dont_index = (s * 2 + b) % 5;

    AlmanacInfo {
        day_pillar: pillar,
        day_element: element,
        polarity: pillar.stem.polarity(),
        do_items: DO_LISTS[element.index() as usize][do_index],
        dont_items: DONT_LISTS[element.index() as usize][dont_index],
    }
}

/// Feng shui tip for a zodiac sign on a date, keyed by the day element and
/// the zodiac's element (25 combinations).
pub fn feng_shui_tip(year: i64, month: i64, day: i64, zodiac: Branch) -> &'static str {
    let day_element = day_pillar(year, month, day).stem.element();
    let zodiac_element = zodiac.element();
    TIPS[day_element.index() as usize][zodiac_element.index() as usize]
}

/// Do lists: five variants of three items per element.
const DO_LISTS: [[[&str; 3]; 5]; 5] = [
    // Wood
    [
        ["Start new projects", "Plant seeds or buy plants", "Sign creative contracts"],
        ["Network and socialize", "Begin learning something new", "Wear green tones"],
        ["Visit parks or nature", "Reorganize your workspace", "Plan long-term goals"],
        ["Practice yoga or stretching", "Write letters or proposals", "Buy wood furniture"],
        ["Collaborate with others", "Start a journal", "Visit the East sector of your city"],
    ],
    // Fire
    [
        ["Give presentations", "Host gatherings", "Market your brand"],
        ["Attend social events", "Redecorate with warm colors", "Cook a special meal"],
        ["Exercise vigorously", "Be bold in negotiations", "Wear red or orange"],
        ["Launch new campaigns", "Express your feelings", "Light candles at home"],
        ["Network at events", "Post on social media", "Take leadership roles"],
    ],
    // Earth
    [
        ["Handle real estate matters", "Organize your home", "Plan investments"],
        ["Focus on stability", "Strengthen relationships", "Garden or landscape"],
        ["Review finances", "Meditate and ground yourself", "Wear earth tones"],
        ["Consolidate resources", "Build foundations", "Declutter spaces"],
        ["Support others", "Cook nourishing meals", "Focus on family bonds"],
    ],
    // Metal
    [
        ["Negotiate deals", "Organize finances", "Cut ties with bad habits"],
        ["Make disciplined decisions", "Practice precision work", "Wear white or gold"],
        ["File paperwork", "Sharpen your skills", "Clean and purify spaces"],
        ["Take decisive action", "Set boundaries", "Polish your image"],
        ["Focus on tech tasks", "Invest in quality items", "Refine your goals"],
    ],
    // Water
    [
        ["Research and study", "Travel or plan trips", "Reflect and journal"],
        ["Connect emotionally", "Seek wisdom from mentors", "Wear blue or black"],
        ["Explore new ideas", "Relax near water", "Handle communication tasks"],
        ["Go with the flow", "Practice flexibility", "Network casually"],
        ["Review and adapt plans", "Rest and recharge", "Read and learn"],
    ],
];

/// Don't lists: five variants of three items per element.
const DONT_LISTS: [[[&str; 3]; 5]; 5] = [
    // Wood
    [
        ["Rush into conflicts", "Neglect your health", "Make impulsive purchases"],
        ["Overcommit your time", "Cut live trees", "Argue with family"],
        ["Be stubborn about plans", "Skip meals", "Ignore your intuition"],
        ["Burn bridges", "Work alone when teamwork helps", "Procrastinate on important calls"],
        ["Overwater plants", "Take on too many tasks", "Go against your principles"],
    ],
    // Fire
    [
        ["Make hasty financial decisions", "Lose your temper", "Overexpose to sun"],
        ["Gossip or spread rumors", "Skip rest", "Over-promise commitments"],
        ["Start fights", "Make permanent decisions in anger", "Overindulge"],
        ["Burn candles unattended", "Rush through important tasks", "Be arrogant"],
        ["Ignore signs of burnout", "Overspend on luxuries", "Overwork past midnight"],
    ],
    // Earth
    [
        ["Take unnecessary risks", "Make sudden changes", "Lend large sums"],
        ["Be overly rigid", "Neglect exercise", "Hoard possessions"],
        ["Overthink decisions", "Isolate yourself", "Ignore maintenance tasks"],
        ["Resist helpful change", "Overeat heavy foods", "Be possessive"],
        ["Skip your routine", "Procrastinate on health checkups", "Be overly cautious"],
    ],
    // Metal
    [
        ["Be inflexible", "Criticize others harshly", "Ignore emotions"],
        ["Cut corners on quality", "Rush creative projects", "Be confrontational"],
        ["Over-control situations", "Skip gratitude practice", "Be perfectionist"],
        ["Hold grudges", "Dismiss new ideas", "Work in cluttered spaces"],
        ["Be cold in relationships", "Judge too quickly", "Neglect rest"],
    ],
    // Water
    [
        ["Procrastinate on deadlines", "Be indecisive", "Avoid confrontation needed"],
        ["Overthink situations", "Stay in bed too long", "Neglect your boundaries"],
        ["Go swimming in dangerous areas", "Make vague commitments", "Escape responsibilities"],
        ["Be too passive", "Overindulge in alcohol", "Ignore red flags"],
        ["Waste water resources", "Be overly emotional in business", "Give away too much"],
    ],
];

/// Tips indexed `[day element][zodiac element]`.
const TIPS: [[&str; 5]; 5] = [
    // Wood day
    [
        "Add water elements (fountain, blue decor) to nourish your energy today.",
        "Your energy feeds the day perfectly. Place a green plant on your desk for extra Wood support.",
        "Ground yourself with yellow or brown crystals. The day challenges you to grow.",
        "Avoid sharp metal objects in your East corner. Add soft fabrics for protection.",
        "Excellent flow today! Keep your North sector clean for career luck.",
    ],
    // Fire day
    [
        "The day supports your flame. Burn incense or light candles for focus.",
        "Powerful but intense energy. Add earth elements (ceramics) to stay grounded.",
        "Your energy nourishes the day. Wear red to amplify your influence.",
        "Strong melting energy. Use this for transformation. Add water to balance.",
        "Tension today — place a plant between your water and fire elements.",
    ],
    // Earth day
    [
        "The day pushes growth through you. Accept change gracefully.",
        "Rich supportive day. Place candles in your Southwest for relationship luck.",
        "Stable and grounding. Add metal wind chimes to keep energy flowing.",
        "Productive day for organization. Declutter your workspace.",
        "The day may feel draining. Place yellow crystals for protection.",
    ],
    // Metal day
    [
        "Creative tension — use it to refine ideas. Add round shapes to your space.",
        "Transformation day. Be open to change. Wear white for protection.",
        "The day nourishes your metal energy. Great for financial planning.",
        "Strong discipline energy. Add a touch of red for warmth and motivation.",
        "Your energy flows outward. Conserve it by resting more today.",
    ],
    // Water day
    [
        "The day draws from your energy. Recharge with blue crystals.",
        "Opposing forces — find balance with green plants near your workspace.",
        "The day contains your flow. Break free with movement and travel.",
        "Supportive day for reflection. Add metal bells for clarity.",
        "Deep intuitive energy. Meditate near water for insights.",
    ],
];
