//! Currency expressions to spoken form
//!
//! The rewrite runs as one ordered [`RuleChain`]; each rule sees the output of
//! the previous one. Amounts keep their digits (`"2.5"` becomes `"2 point 5"`)
//! so the numeral pass can read them later.
//!
//! Rules that would claim a fully parenthesized amount such as `(SR3mn)` leave
//! it in place so the parenthetical rules can render it as an equivalent
//! (`"equivalent to 3 million Saudi Riyals"`).

use crate::error::Result;
use crate::numeral::spoken_decimal;
use crate::rule::{group, is_parenthesized, matched, Rule, RuleChain};
use crate::tables::{self, LanguageTables};
use std::sync::OnceLock;
use tracing::warn;

/// Bumped whenever rules are added, removed, or reordered.
pub const CURRENCY_RULES_VERSION: u32 = 1;

const AMOUNT: &str = r"\d+(?:\.\d+)?";
const MAGNITUDE: &str = "(?i:trillion|billion|million|thousand|crore|lakh|bn|mn|tn|cr|m|b|k)";
const SYMBOLS: &str = "[£€₹¥₩$]";
// Codes and prefixes match in any letter case; names are looked up upper-cased.
const DOLLAR_PREFIXES: &str = r"(?i:CA\$|C\$|AU\$|A\$|US\$|NZ\$|HK\$|S\$)";
const CODES: &str = "(?i:CAD|AUD|USD|GBP|EUR|INR|JPY|CNY|SGD|NZD|HKD|KRW|SR|RMB)";

static SHARED: OnceLock<CurrencyNormalizer> = OnceLock::new();

#[derive(Debug)]
pub struct CurrencyNormalizer {
    chain: RuleChain,
}

impl CurrencyNormalizer {
    /// Build the rule chain over the given word tables.
    pub fn with_tables(tables: &'static LanguageTables) -> Result<Self> {
        Ok(Self {
            chain: build_chain(tables)?,
        })
    }

    /// Process-wide instance over the built-in English tables.
    pub fn shared() -> &'static CurrencyNormalizer {
        SHARED.get_or_init(|| match Self::with_tables(tables::english()) {
            Ok(normalizer) => normalizer,
            Err(e) => {
                warn!("currency rules unavailable, passing text through: {e}");
                Self {
                    chain: RuleChain::empty("currency"),
                }
            }
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        self.chain.apply(text)
    }

    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }
}

fn name_or<'a>(tables: &'a LanguageTables, key: &'a str, fallback: &'a str) -> &'a str {
    tables.currency_name(key).unwrap_or(fallback)
}

fn build_chain(t: &'static LanguageTables) -> Result<RuleChain> {
    let rules = vec![
        Rule::new(
            "thousands-separators",
            r"(?<![0-9.])(\d{1,3}(?:,\d{3})+)(?![0-9])",
            |caps, _| group(caps, 1).replace(',', ""),
        )?,
        Rule::new(
            "indian-dual-magnitude",
            &format!(
                r"(?:\b(?i:INR)|₹)\s*({AMOUNT})\s*((?i:lakh|thousand|k))\s*((?i:crore|cr))\b"
            ),
            move |caps, _| {
                format!(
                    "{} {} {} {}",
                    spoken_decimal(group(caps, 1)),
                    t.magnitude_word(group(caps, 2)),
                    t.magnitude_word(group(caps, 3)),
                    name_or(t, "INR", "Indian rupees"),
                )
            },
        )?,
        Rule::new(
            "parenthetical-code-range",
            &format!(
                r"\(\s*({CODES})\s*({AMOUNT})(?:\s*({MAGNITUDE}))?\s*[-–]\s*({CODES})\s*({AMOUNT})(?:\s*({MAGNITUDE}))?\s*\)"
            ),
            move |caps, _| {
                let code = group(caps, 1);
                if !code.eq_ignore_ascii_case(group(caps, 4)) {
                    return matched(caps);
                }
                format!(
                    "between {} and {} {}",
                    amount_with_magnitude(t, group(caps, 2), group(caps, 3)),
                    amount_with_magnitude(t, group(caps, 5), group(caps, 6)),
                    name_or(t, code, code),
                )
            },
        )?,
        Rule::new(
            "prefixed-symbol-magnitude",
            &format!(
                r"(?<![A-Za-z])({DOLLAR_PREFIXES}|(?i:SR|RMB))\s*({AMOUNT})\s*({MAGNITUDE})\b"
            ),
            move |caps, haystack| {
                if is_parenthesized(caps, haystack) {
                    return matched(caps);
                }
                let prefix = group(caps, 1);
                format!(
                    "{} {} {}",
                    spoken_decimal(group(caps, 2)),
                    t.magnitude_word(group(caps, 3)),
                    name_or(t, prefix, prefix),
                )
            },
        )?,
        Rule::new(
            "code-magnitude",
            &format!(r"\b({CODES})\s*({AMOUNT})\s*({MAGNITUDE})\b"),
            move |caps, haystack| {
                if is_parenthesized(caps, haystack) {
                    return matched(caps);
                }
                let code = group(caps, 1);
                format!(
                    "{} {} {}",
                    spoken_decimal(group(caps, 2)),
                    t.magnitude_word(group(caps, 3)),
                    name_or(t, code, code),
                )
            },
        )?,
        Rule::new(
            "code-amount",
            &format!(r"\b({CODES})\s*({AMOUNT})\b"),
            move |caps, haystack| {
                if is_parenthesized(caps, haystack) {
                    return matched(caps);
                }
                let code = group(caps, 1);
                format!(
                    "{} {}",
                    spoken_decimal(group(caps, 2)),
                    name_or(t, code, code)
                )
            },
        )?,
        Rule::new(
            "symbol-magnitude",
            &format!(r"({SYMBOLS})({AMOUNT})\s*({MAGNITUDE})\b"),
            move |caps, haystack| {
                if is_parenthesized(caps, haystack) {
                    return matched(caps);
                }
                format!(
                    "{} {} {}",
                    spoken_decimal(group(caps, 2)),
                    t.magnitude_word(group(caps, 3)),
                    name_or(t, group(caps, 1), "dollars"),
                )
            },
        )?,
        Rule::new(
            "parenthetical-magnitude",
            &format!(
                r"\(\s*({DOLLAR_PREFIXES}|{SYMBOLS}|{CODES})\s*({AMOUNT})\s*({MAGNITUDE})\s*\)"
            ),
            move |caps, _| {
                format!(
                    "equivalent to {} {} {}",
                    spoken_decimal(group(caps, 2)),
                    t.magnitude_word(group(caps, 3)),
                    name_or(t, group(caps, 1), "dollars"),
                )
            },
        )?,
        Rule::new(
            "parenthetical-amount",
            &format!(r"\(\s*({DOLLAR_PREFIXES}|{SYMBOLS}|{CODES})\s*({AMOUNT})\s*\)"),
            move |caps, _| {
                format!(
                    "equivalent to {} {}",
                    spoken_decimal(group(caps, 2)),
                    name_or(t, group(caps, 1), "dollars"),
                )
            },
        )?,
        Rule::new(
            "symbol-cents",
            &format!(r"((?<![A-Za-z])(?:{DOLLAR_PREFIXES})|{SYMBOLS})(\d+)\.(\d{{2}})\b"),
            move |caps, _| {
                let symbol = group(caps, 1);
                let whole = plain_digits(group(caps, 2));
                let cents = group(caps, 3);
                let name = name_or(t, symbol, "dollars");
                let minor = if symbol == "₹" { "paise" } else { "cents" };
                if cents == "00" {
                    format!("{whole} {name}")
                } else {
                    format!("{whole} {name} and {cents} {minor}")
                }
            },
        )?,
        Rule::new(
            "symbol-amount",
            &format!(r"((?<![A-Za-z])(?:{DOLLAR_PREFIXES})|{SYMBOLS})({AMOUNT})\b"),
            move |caps, _| {
                let amount = group(caps, 2);
                let amount = match amount.split_once('.') {
                    Some((whole, frac)) => {
                        spoken_decimal(&format!("{}.{frac}", plain_digits(whole)))
                    }
                    None => plain_digits(amount),
                };
                format!("{amount} {}", name_or(t, group(caps, 1), "dollars"))
            },
        )?,
    ];

    Ok(RuleChain::new("currency", CURRENCY_RULES_VERSION, rules))
}

fn amount_with_magnitude(t: &LanguageTables, amount: &str, magnitude: &str) -> String {
    if magnitude.is_empty() {
        spoken_decimal(amount)
    } else {
        format!("{} {}", spoken_decimal(amount), t.magnitude_word(magnitude))
    }
}

/// Digits without leading zeros; values too long to parse are kept as written.
fn plain_digits(digits: &str) -> String {
    digits
        .parse::<u64>()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| digits.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        CurrencyNormalizer::shared().normalize(text)
    }

    #[test]
    fn test_rule_order_is_stable() {
        assert_eq!(
            CurrencyNormalizer::shared().chain().rule_names(),
            vec![
                "thousands-separators",
                "indian-dual-magnitude",
                "parenthetical-code-range",
                "prefixed-symbol-magnitude",
                "code-magnitude",
                "code-amount",
                "symbol-magnitude",
                "parenthetical-magnitude",
                "parenthetical-amount",
                "symbol-cents",
                "symbol-amount",
            ]
        );
    }

    #[test]
    fn test_thousands_separators_removed() {
        assert_eq!(normalize("$300,000"), "300000 dollars");
        assert_eq!(normalize("1,234,567 people"), "1234567 people");
        assert_eq!(normalize("red, green"), "red, green");
    }

    #[test]
    fn test_parenthetical_equivalent() {
        assert_eq!(normalize("(SR3mn)"), "equivalent to 3 million Saudi Riyals");
        assert_eq!(
            normalize("a deal worth £800m ($1.08bn)"),
            "a deal worth 800 million pounds equivalent to 1 point 0 8 billion dollars"
        );
        assert_eq!(normalize("($50)"), "equivalent to 50 dollars");
    }

    #[test]
    fn test_prefixed_symbols_with_magnitude() {
        assert_eq!(normalize("SR3mn"), "3 million Saudi Riyals");
        assert_eq!(normalize("RMB 2bn"), "2 billion Renminbi");
        assert_eq!(normalize("C$4.5 billion"), "4 point 5 billion Canadian dollars");
        assert_eq!(normalize("HK$10m"), "10 million Hong Kong dollars");
    }

    #[test]
    fn test_codes() {
        assert_eq!(normalize("USD 5 billion"), "5 billion US dollars");
        assert_eq!(normalize("CAD 500"), "500 Canadian dollars");
        assert_eq!(normalize("GBP 12.5"), "12 point 5 British pounds");
    }

    #[test]
    fn test_codes_match_any_case() {
        assert_eq!(normalize("usd 5"), "5 US dollars");
        assert_eq!(normalize("Usd 5 billion"), "5 billion US dollars");
        assert_eq!(normalize("us$5.25"), "5 US dollars and 25 cents");
        assert_eq!(normalize("(gbp10m)"), "equivalent to 10 million British pounds");
    }

    #[test]
    fn test_symbol_magnitude() {
        assert_eq!(normalize("€500bn"), "500 billion euros");
        assert_eq!(normalize("$2.5M"), "2 point 5 million dollars");
        assert_eq!(normalize("$5 more"), "5 dollars more");
    }

    #[test]
    fn test_cents() {
        assert_eq!(normalize("$5.99"), "5 dollars and 99 cents");
        assert_eq!(normalize("$5.00"), "5 dollars");
        assert_eq!(normalize("₹10.50"), "10 rupees and 50 paise");
        assert_eq!(normalize("US$5.25"), "5 US dollars and 25 cents");
    }

    #[test]
    fn test_plain_symbol_amount() {
        assert_eq!(normalize("$500"), "500 dollars");
        assert_eq!(normalize("₹100"), "100 rupees");
        assert_eq!(normalize("$1.5"), "1 point 5 dollars");
        assert_eq!(normalize("costs ¥300."), "costs 300 yen.");
    }

    #[test]
    fn test_indian_dual_magnitude() {
        assert_eq!(normalize("INR 42.7 lakh crore"), "42 point 7 lakh crore Indian rupees");
        assert_eq!(normalize("₹15.7 thousand crore"), "15 point 7 thousand crore Indian rupees");
    }

    #[test]
    fn test_parenthetical_range() {
        assert_eq!(
            normalize("(INR5,000-INR10,000)"),
            "between 5000 and 10000 Indian rupees"
        );
        assert_eq!(
            normalize("(INR50crore-INR100crore)"),
            "between 50 crore and 100 crore Indian rupees"
        );
    }

    #[test]
    fn test_mismatched_range_codes_fall_through() {
        let out = normalize("(USD5-GBP10)");
        assert!(!out.starts_with("between"));
        assert!(out.contains("5 US dollars"));
        assert!(out.contains("10 British pounds"));
    }

    #[test]
    fn test_text_without_currency_unchanged() {
        let text = "Nothing to see here, move along.";
        assert_eq!(normalize(text), text);
    }
}
