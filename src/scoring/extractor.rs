use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::hooks::{self, HookSignal};
use crate::scoring::tips::{
    TIP_EXCESS_EMOJI, TIP_EXCESS_HASHTAGS, TIP_NO_EMOJI, TIP_NO_QUESTION, TIP_TOO_SHORT,
    TIP_WEAK_HOOK,
};

#[derive(Debug, Clone, Default)]
pub struct FactorDeltas {
    pub likeability: f64,
    pub reply_potential: f64,
    pub shareability: f64,
    pub dwell_time: f64,
    pub hook_strength: f64,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub deltas: FactorDeltas,
    pub tips: Vec<String>,
}

const FIRST_PERSON_WORDS: &[&str] = &["i", "my", "mine", "jeg", "min", "mitt"];
const SECOND_PERSON_WORDS: &[&str] = &["you", "your", "yours", "du", "deg", "din", "ditt", "dere"];
const CONTROVERSY_WORDS: &[&str] = &[
    "wrong",
    "overrated",
    "underrated",
    "unpopular",
    "controversial",
    "feil",
    "overvurdert",
    "undervurdert",
    "upopulær",
    "upopulært",
    "kontroversiell",
    "kontroversielt",
];
const LIST_VALUE_WORDS: &[&str] = &[
    "tip", "tips", "hack", "hacks", "trick", "tricks", "advice", "lesson", "lessons", "triks",
    "råd", "lærdom",
];

static FIRST_PERSON_RE: Lazy<Regex> = Lazy::new(|| word_list_regex(FIRST_PERSON_WORDS));
static SECOND_PERSON_RE: Lazy<Regex> = Lazy::new(|| word_list_regex(SECOND_PERSON_WORDS));
static CONTROVERSY_RE: Lazy<Regex> = Lazy::new(|| word_list_regex(CONTROVERSY_WORDS));
static LIST_VALUE_RE: Lazy<Regex> = Lazy::new(|| word_list_regex(LIST_VALUE_WORDS));

static NUMBERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\s").unwrap());
static HYPHEN_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*-\s").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

fn word_list_regex(words: &[&str]) -> Regex {
    let alternation = words.join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap()
}

// Checks are independent and run in a fixed order; tips come out in that order.
pub fn extract(text: &str) -> Extraction {
    let mut deltas = FactorDeltas::default();
    let mut tips = Vec::new();

    let char_count = text.chars().count();
    if char_count < 100 {
        deltas.dwell_time -= 10.0;
        tips.push(TIP_TOO_SHORT.to_string());
    } else if char_count > 500 {
        deltas.dwell_time += 20.0;
    } else if char_count > 280 {
        deltas.dwell_time += 10.0;
    }

    if text.contains('?') {
        deltas.reply_potential += 20.0;
        if text.split('?').count() > 2 {
            deltas.reply_potential += 10.0;
        }
    } else {
        tips.push(TIP_NO_QUESTION.to_string());
    }

    let first_line = text.lines().next().unwrap_or("");
    match hooks::classify(first_line) {
        HookSignal::Strong(_) => deltas.hook_strength += 25.0,
        HookSignal::Weak(_) => {
            deltas.hook_strength -= 20.0;
            tips.push(TIP_WEAK_HOOK.to_string());
        }
        HookSignal::None => {}
    }

    if NUMBERED_ITEM_RE.is_match(text) || text.contains('•') || HYPHEN_ITEM_RE.is_match(text) {
        deltas.shareability += 15.0;
    }
    if LIST_VALUE_RE.is_match(text) {
        deltas.shareability += 10.0;
    }

    if FIRST_PERSON_RE.is_match(text) {
        deltas.likeability += 15.0;
    }
    if SECOND_PERSON_RE.is_match(text) {
        deltas.likeability += 10.0;
        deltas.reply_potential += 10.0;
    }

    if CONTROVERSY_RE.is_match(text) {
        deltas.reply_potential += 20.0;
        deltas.shareability += 10.0;
    }

    let emoji_count = text.chars().filter(|&ch| is_pictograph(ch)).count();
    if emoji_count == 0 {
        tips.push(TIP_NO_EMOJI.to_string());
    } else if emoji_count > 5 {
        deltas.likeability -= 10.0;
        tips.push(TIP_EXCESS_EMOJI.to_string());
    }

    let hashtag_count = HASHTAG_RE.find_iter(text).count();
    if hashtag_count > 3 {
        deltas.likeability -= 15.0;
        tips.push(TIP_EXCESS_HASHTAGS.to_string());
    }

    Extraction { deltas, tips }
}

// Emoji blocks only; accented Latin text (æ, ø, å) must not count.
const PICTOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x2600, 0x27BF),
    (0x1F000, 0x1F0FF),
    (0x1F300, 0x1F5FF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F900, 0x1F9FF),
    (0x1FA70, 0x1FAFF),
];

fn is_pictograph(ch: char) -> bool {
    let code = ch as u32;
    PICTOGRAPH_RANGES
        .iter()
        .any(|&(low, high)| code >= low && code <= high)
}
