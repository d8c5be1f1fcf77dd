use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookSignal {
    Strong(&'static str),
    Weak(&'static str),
    None,
}

struct HookPattern {
    name: &'static str,
    matches: fn(&str) -> bool,
}

const STRONG_PATTERNS: &[HookPattern] = &[
    HookPattern {
        name: "opinion_opener",
        matches: opinion_opener,
    },
    HookPattern {
        name: "interrupt_word",
        matches: interrupt_word,
    },
    HookPattern {
        name: "numeral_opener",
        matches: numeral_opener,
    },
    HookPattern {
        name: "personal_experience",
        matches: personal_experience,
    },
    HookPattern {
        name: "question_ending",
        matches: question_ending,
    },
];

const WEAK_PATTERNS: &[HookPattern] = &[
    HookPattern {
        name: "here_is",
        matches: here_is,
    },
    HookPattern {
        name: "today",
        matches: today_opener,
    },
    HookPattern {
        name: "did_you_know",
        matches: did_you_know,
    },
];

pub fn classify(first_line: &str) -> HookSignal {
    let line = first_line.trim().to_lowercase();
    if let Some(pattern) = STRONG_PATTERNS.iter().find(|p| (p.matches)(&line)) {
        return HookSignal::Strong(pattern.name);
    }
    if let Some(pattern) = WEAK_PATTERNS.iter().find(|p| (p.matches)(&line)) {
        return HookSignal::Weak(pattern.name);
    }
    HookSignal::None
}

fn opinion_opener(line: &str) -> bool {
    let openers = [
        "unpopular opinion",
        "hot take",
        "controversial opinion",
        "controversial take",
        "upopulær mening",
        "kontroversiell mening",
    ];
    openers.iter().any(|opener| line.starts_with(opener))
}

fn interrupt_word(line: &str) -> bool {
    let words = ["stop", "wait", "stopp", "vent"];
    first_word(line)
        .map(|word| words.contains(&word))
        .unwrap_or(false)
}

static NUMERAL_OPENER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s+(tips?|reasons?|years?|grunner|år|triks)\b").unwrap());

fn numeral_opener(line: &str) -> bool {
    NUMERAL_OPENER_RE.is_match(line)
}

fn personal_experience(line: &str) -> bool {
    let openers = [
        "i used",
        "i learned",
        "i found",
        "i discovered",
        "jeg brukte",
        "jeg lærte",
        "jeg fant",
        "jeg oppdaget",
    ];
    openers.iter().any(|opener| line.starts_with(opener))
}

fn question_ending(line: &str) -> bool {
    line.ends_with('?')
}

fn here_is(line: &str) -> bool {
    let openers = ["here is", "here's", "her er"];
    openers.iter().any(|opener| line.starts_with(opener))
}

fn today_opener(line: &str) -> bool {
    line.starts_with("today") || line.starts_with("i dag")
}

fn did_you_know(line: &str) -> bool {
    line.starts_with("did you know") || line.starts_with("visste du")
}

fn first_word(line: &str) -> Option<&str> {
    line.split_whitespace()
        .next()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
}
