//! Ordered regex rewrite rules
//!
//! A [`Rule`] pairs a compiled pattern with a replacer closure. A
//! [`RuleChain`] applies its rules in list order, feeding each rule the output
//! of the previous one, so rule order is part of the observable behavior.
//!
//! Replacement text is always inserted literally: `$1` in a table entry or a
//! lexicon replacement never turns into a back-reference.

use crate::error::{CoreError, Result};
use fancy_regex::{Captures, Regex};
use std::fmt;
use tracing::debug;

/// Builds the replacement for one match. Receives the captures and the full
/// haystack so a rule can inspect the surrounding text.
pub type Replacer = Box<dyn Fn(&Captures<'_>, &str) -> String + Send + Sync>;

pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replace: Replacer,
}

impl Rule {
    pub fn new<F>(name: &'static str, pattern: &str, replace: F) -> Result<Self>
    where
        F: Fn(&Captures<'_>, &str) -> String + Send + Sync + 'static,
    {
        let pattern = Regex::new(pattern).map_err(|e| CoreError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name,
            pattern,
            replace: Box::new(replace),
        })
    }

    /// Rule whose every match is replaced by the same text.
    pub fn literal(name: &'static str, pattern: &str, replacement: &'static str) -> Result<Self> {
        Self::new(name, pattern, move |_, _| replacement.to_string())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Rewrite every non-overlapping match in `text`.
    ///
    /// If the matcher gives up partway (backtrack limit), the remaining text
    /// is kept as is.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.pattern.captures_iter(text) {
            let caps = match caps {
                Ok(caps) => caps,
                Err(e) => {
                    debug!(rule = self.name, "matching stopped early: {e}");
                    break;
                }
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(&(self.replace)(&caps, text));
            last = whole.end();
        }

        out.push_str(&text[last..]);
        out
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// An explicitly ordered, versioned list of rules.
#[derive(Debug)]
pub struct RuleChain {
    name: &'static str,
    version: u32,
    rules: Vec<Rule>,
}

impl RuleChain {
    pub fn new(name: &'static str, version: u32, rules: Vec<Rule>) -> Self {
        Self {
            name,
            version,
            rules,
        }
    }

    /// A chain that leaves text untouched.
    pub fn empty(name: &'static str) -> Self {
        Self::new(name, 0, Vec::new())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

/// Whether the match is the whole content of a parenthetical, e.g. the
/// `SR3mn` in `(SR3mn)`.
pub fn is_parenthesized(caps: &Captures<'_>, haystack: &str) -> bool {
    let Some(whole) = caps.get(0) else {
        return false;
    };
    haystack[..whole.start()].trim_end().ends_with('(')
        && haystack[whole.end()..].trim_start().starts_with(')')
}

/// Text of the whole match, for replacers that decide to leave it alone.
pub fn matched(caps: &Captures<'_>) -> String {
    caps.get(0)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Capture group text, empty when the group did not participate.
pub fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map(|m| m.as_str()).unwrap_or("")
}
