//! Unit, magnitude, ordinal, year, and abbreviation rewrites
//!
//! Runs after the currency pass, so `$5M` is already spelled out by the time
//! the bare `M -> million` rule sees the text.

use crate::error::Result;
use crate::numeral::{spell_digits, spoken_decimal};
use crate::rule::{group, matched, Rule, RuleChain};
use crate::tables::{self, LanguageTables};
use std::sync::OnceLock;
use tracing::warn;

/// Bumped whenever rules are added, removed, or reordered.
pub const LEXICAL_RULES_VERSION: u32 = 1;

const AMOUNT: &str = r"\d+(?:\.\d+)?";

const ORDINALS: [&str; 21] = [
    "zeroth",
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const TENS_ORDINAL: [&str; 10] = [
    "",
    "",
    "twentieth",
    "thirtieth",
    "fortieth",
    "fiftieth",
    "sixtieth",
    "seventieth",
    "eightieth",
    "ninetieth",
];

static SHARED: OnceLock<LexicalRules> = OnceLock::new();

#[derive(Debug)]
pub struct LexicalRules {
    chain: RuleChain,
}

impl LexicalRules {
    pub fn with_tables(tables: &'static LanguageTables) -> Result<Self> {
        Ok(Self {
            chain: build_chain(tables)?,
        })
    }

    /// Process-wide instance over the built-in English tables.
    pub fn shared() -> &'static LexicalRules {
        SHARED.get_or_init(|| match Self::with_tables(tables::english()) {
            Ok(rules) => rules,
            Err(e) => {
                warn!("lexical rules unavailable, passing text through: {e}");
                Self {
                    chain: RuleChain::empty("lexical"),
                }
            }
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.chain.apply(text)
    }

    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }
}

/// Spoken ordinal for a cardinal value.
///
/// Values up to 99 are spelled out. From 100 on the digits are kept with the
/// matching suffix, and a last-two-digit value of 11 to 13 always takes `th`.
///
/// ```
/// use sayable_core::lexical::ordinal_words;
///
/// assert_eq!(ordinal_words(3), "third");
/// assert_eq!(ordinal_words(42), "forty second");
/// assert_eq!(ordinal_words(111), "111th");
/// ```
pub fn ordinal_words(n: u64) -> String {
    if let Some(word) = ORDINALS.get(n as usize) {
        return (*word).to_string();
    }
    if n < 100 {
        let tens = (n / 10) as usize;
        return match n % 10 {
            0 => TENS_ORDINAL[tens].to_string(),
            ones => format!("{} {}", TENS[tens], ORDINALS[ones as usize]),
        };
    }
    if (11..=13).contains(&(n % 100)) {
        return format!("{n}th");
    }
    let suffix = match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Singular and plural spoken forms of a measurement unit.
fn unit_words(unit: &str) -> (&'static str, &'static str) {
    match unit.to_lowercase().as_str() {
        "km/h" | "kmh" | "kph" => ("kilometer per hour", "kilometers per hour"),
        "mph" => ("mile per hour", "miles per hour"),
        "m/s" => ("meter per second", "meters per second"),
        "km" => ("kilometer", "kilometers"),
        "mi" => ("mile", "miles"),
        "m" => ("meter", "meters"),
        "kg" => ("kilogram", "kilograms"),
        "g" => ("gram", "grams"),
        "lb" | "lbs" => ("pound", "pounds"),
        "h" | "hr" | "hrs" => ("hour", "hours"),
        "min" | "mins" => ("minute", "minutes"),
        _ => ("", ""),
    }
}

fn measurement(caps: &fancy_regex::Captures<'_>) -> String {
    let amount = group(caps, 1);
    let (singular, plural) = unit_words(group(caps, 2));
    if singular.is_empty() {
        return matched(caps);
    }
    if amount == "1" {
        format!("1 {singular}")
    } else {
        format!("{} {plural}", spoken_decimal(amount))
    }
}

fn unit_rule(name: &'static str, units: &str) -> Result<Rule> {
    Rule::new(
        name,
        &format!(r"\b({AMOUNT})\s?({units})(?![A-Za-z/])"),
        |caps, _| measurement(caps),
    )
}

fn build_chain(t: &'static LanguageTables) -> Result<RuleChain> {
    let rules = vec![
        Rule::new(
            "numeric-range",
            r"\b(\d+)[-–—](\d+)\b",
            |caps, _| format!("{} to {}", group(caps, 1), group(caps, 2)),
        )?,
        Rule::literal("em-dash", r"\s*—\s*", ", ")?,
        Rule::new(
            "emergency-numbers",
            r"(?<![0-9.,])\b(911|999|112|000)\b(?![.,][0-9])",
            |caps, _| spell_digits(group(caps, 1)),
        )?,
        unit_rule("speed", "(?i:km/h|kmh|kph|mph)|m/s")?,
        unit_rule("distance", "(?i:km|mi)")?,
        unit_rule("metres", "m")?,
        unit_rule("mass", "(?i:kg|lbs|lb)|g")?,
        unit_rule("duration", "hrs|hr|h|mins|min")?,
        Rule::new(
            "large-number-magnitude",
            &format!(r"\b({AMOUNT})\s?(M|B|[mbt]n|[MBT]n)\b"),
            move |caps, _| {
                format!(
                    "{} {}",
                    spoken_decimal(group(caps, 1)),
                    t.magnitude_word(group(caps, 2))
                )
            },
        )?,
        Rule::new(
            "percentage",
            &format!(r"\b({AMOUNT})\s?%"),
            |caps, _| format!("{} percent", spoken_decimal(group(caps, 1))),
        )?,
        Rule::new(
            "ordinal",
            r"\b(\d+)(?i:st|nd|rd|th)\b",
            |caps, _| match group(caps, 1).parse::<u64>() {
                Ok(n) => ordinal_words(n),
                Err(_) => matched(caps),
            },
        )?,
        Rule::new("year-2000s", r"(?<![0-9.,])\b200(\d)\b(?!s)", |caps, _| {
            match group(caps, 1) {
                "0" => "two thousand".to_string(),
                digit => format!("two thousand {}", spell_digits(digit)),
            }
        })?,
        Rule::new("year-1900s", r"(?<![0-9.,])\b190(\d)\b(?!s)", |caps, _| {
            match group(caps, 1) {
                "0" => "nineteen hundred".to_string(),
                digit => format!("nineteen oh {}", spell_digits(digit)),
            }
        })?,
        Rule::new("year-split", r"(?<![0-9.,])\b(19|20)(\d{2})\b(?!s)", |caps, _| {
            format!("{} {}", group(caps, 1), group(caps, 2))
        })?,
        Rule::new(
            "title",
            r"\b(Prof|Dr|Mrs|Mr|Ms)\.\s+",
            move |caps, _| match t.titles.get(group(caps, 1)) {
                Some(word) => format!("{word} "),
                None => matched(caps),
            },
        )?,
        Rule::new(
            "abbreviation",
            r"(?i)\b(approx|vs|etc)\.(\s*$)?",
            move |caps, text| {
                let key = group(caps, 1).to_lowercase();
                match t.abbreviations.get(&key) {
                    Some(word) if caps.get(2).is_some() => format!("{word}."),
                    Some(word) if key == "etc" && starts_sentence(caps, text) => {
                        format!("{word}.")
                    }
                    Some(word) => word.clone(),
                    None => matched(caps),
                }
            },
        )?,
    ];

    Ok(RuleChain::new("lexical", LEXICAL_RULES_VERSION, rules))
}

/// True when the text after the match continues with an upper-case letter.
fn starts_sentence(caps: &fancy_regex::Captures<'_>, text: &str) -> bool {
    caps.get(0).is_some_and(|whole| {
        text[whole.end()..]
            .trim_start()
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
    })
}
