//! Repairs for text scraped from web layouts
//!
//! Inserts the spaces lost when page elements are flattened into one string:
//! `reserved.Reuse`, `economyIMF`, `FTNews`, `Published8`.

use crate::error::Result;
use crate::rule::{group, matched, Rule, RuleChain};
use std::sync::OnceLock;
use tracing::warn;

pub const LAYOUT_RULES_VERSION: u32 = 1;

const NAVIGATION_KEYWORDS: &str =
    r"(\s*)(\b(?:Skip to|Sign In|Subscribe|OPEN SIDE|MENU|Menu|Add to myFT|Print this page|Published|Copyright)\b|©)";

static STANDARD: OnceLock<LayoutRepair> = OnceLock::new();
static WITH_NAVIGATION: OnceLock<LayoutRepair> = OnceLock::new();

#[derive(Debug)]
pub struct LayoutRepair {
    chain: RuleChain,
}

impl LayoutRepair {
    /// Build the repair chain; `navigation_breaks` adds the menu-keyword rule.
    pub fn new(navigation_breaks: bool) -> Result<Self> {
        let mut rules = vec![
            Rule::new("sentence-spacing", r"([a-z])\.([A-Z])", |caps, _| {
                format!("{}. {}", group(caps, 1), group(caps, 2))
            })?,
            Rule::new("camel-case", r"([a-z])([A-Z])", |caps, _| {
                format!("{} {}", group(caps, 1), group(caps, 2))
            })?,
            Rule::new("acronym-word", r"([A-Z])([A-Z][a-z])", |caps, _| {
                format!("{} {}", group(caps, 1), group(caps, 2))
            })?,
            Rule::new("letter-digit", r"([A-Za-z])(\d)", |caps, _| {
                format!("{} {}", group(caps, 1), group(caps, 2))
            })?,
        ];

        if navigation_breaks {
            rules.push(Rule::new(
                "navigation-breaks",
                NAVIGATION_KEYWORDS,
                |caps, haystack| {
                    let Some(whole) = caps.get(0) else {
                        return matched(caps);
                    };
                    let before = haystack[..whole.start()].trim_end();
                    if before.is_empty() || before.ends_with(['.', '!', '?']) {
                        matched(caps)
                    } else {
                        format!(". {}", group(caps, 2))
                    }
                },
            )?);
        }

        Ok(Self {
            chain: RuleChain::new("layout", LAYOUT_RULES_VERSION, rules),
        })
    }

    /// Process-wide instance for either configuration.
    pub fn shared(navigation_breaks: bool) -> &'static LayoutRepair {
        let cell = if navigation_breaks {
            &WITH_NAVIGATION
        } else {
            &STANDARD
        };
        cell.get_or_init(|| match Self::new(navigation_breaks) {
            Ok(repair) => repair,
            Err(e) => {
                warn!("layout rules unavailable, passing text through: {e}");
                Self {
                    chain: RuleChain::empty("layout"),
                }
            }
        })
    }

    pub fn repair(&self, text: &str) -> String {
        self.chain.apply(text)
    }

    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair(text: &str) -> String {
        LayoutRepair::shared(false).repair(text)
    }

    #[test]
    fn test_smushed_sentences() {
        assert_eq!(repair("rights reserved.Reuse this"), "rights reserved. Reuse this");
    }

    #[test]
    fn test_smushed_words() {
        assert_eq!(repair("the economyIMF said"), "the economy IMF said");
        assert_eq!(repair("FTNews"), "FT News");
        assert_eq!(repair("Published8 May"), "Published 8 May");
    }

    #[test]
    fn test_clean_text_unchanged() {
        let text = "Plain sentence with 42 apples. Another one.";
        assert_eq!(repair(text), text);
    }

    #[test]
    fn test_navigation_breaks_disabled_by_default() {
        assert_eq!(repair("news Subscribe now"), "news Subscribe now");
        assert_eq!(LayoutRepair::shared(false).chain().len(), 4);
    }

    #[test]
    fn test_navigation_breaks() {
        let repair = LayoutRepair::shared(true);
        assert_eq!(repair.repair("news Subscribe now"), "news. Subscribe now");
        assert_eq!(repair.repair("Done. Subscribe now"), "Done. Subscribe now");
        assert_eq!(repair.repair("Subscribe now"), "Subscribe now");
        assert_eq!(repair.repair("text © 2024"), "text. © 2024");
        assert_eq!(repair.repair("we subscribe to it"), "we subscribe to it");
    }
}
