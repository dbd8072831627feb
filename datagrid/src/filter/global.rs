//! Global text filter matched against every column's string values.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use regex::Regex;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::error::Result;

/// How the global filter text is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalFilterMode {
    /// Case-insensitive regular expression.
    ///
    /// Text that does not compile falls back to a literal match.
    #[default]
    Regex,
    /// Case-insensitive substring match; metacharacters have no meaning.
    Literal,
    /// Case-insensitive fuzzy match.
    Fuzzy,
}

#[derive(Debug, Clone)]
enum Compiled {
    Regex(Regex),
    /// Lowercased needle.
    Literal(String),
    Fuzzy(Pattern),
}

/// The global filter string and its compiled matcher.
///
/// The matcher is built once when the text or mode changes, never per row.
/// Empty or whitespace-only text disables the filter.
#[derive(Debug, Clone, Default)]
pub struct GlobalFilter {
    text: String,
    mode: GlobalFilterMode,
    compiled: Option<Compiled>,
}

impl GlobalFilter {
    /// Build a filter, falling back to a literal match if `text` is not a
    /// valid pattern in [`GlobalFilterMode::Regex`].
    pub fn new(text: impl Into<String>, mode: GlobalFilterMode) -> Self {
        let text = text.into();
        match Self::try_new(text.clone(), mode) {
            Ok(filter) => filter,
            Err(e) => {
                log::warn!("{}; matching as literal text", e);
                let compiled = Some(Compiled::Literal(text.to_lowercase()));
                Self {
                    text,
                    mode,
                    compiled,
                }
            }
        }
    }

    /// Build a filter, failing if `text` is not a valid pattern in
    /// [`GlobalFilterMode::Regex`].
    pub fn try_new(text: impl Into<String>, mode: GlobalFilterMode) -> Result<Self> {
        let text = text.into();
        let compiled = if text.trim().is_empty() {
            None
        } else {
            Some(match mode {
                GlobalFilterMode::Regex => Compiled::Regex(
                    RegexBuilder::new(&text)
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| GridError::invalid_pattern(&text, e))?,
                ),
                GlobalFilterMode::Literal => Compiled::Literal(text.to_lowercase()),
                GlobalFilterMode::Fuzzy => Compiled::Fuzzy(Pattern::new(
                    &text,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                )),
            })
        };
        Ok(Self {
            text,
            mode,
            compiled,
        })
    }

    /// The filter text as entered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The interpretation mode.
    pub fn mode(&self) -> GlobalFilterMode {
        self.mode
    }

    /// Returns `true` if the filter restricts rows.
    pub fn is_active(&self) -> bool {
        self.compiled.is_some()
    }

    /// Start a matching pass. Returns `None` when the filter is inactive.
    pub fn session(&self) -> Option<MatchSession<'_>> {
        self.compiled.as_ref().map(|compiled| MatchSession {
            compiled,
            matcher: match compiled {
                Compiled::Fuzzy(_) => Some(Matcher::new(Config::DEFAULT)),
                Compiled::Regex(_) | Compiled::Literal(_) => None,
            },
            buf: Vec::new(),
        })
    }
}

/// Scratch state for matching many strings against one global filter.
pub struct MatchSession<'a> {
    compiled: &'a Compiled,
    matcher: Option<Matcher>,
    buf: Vec<char>,
}

impl MatchSession<'_> {
    /// Returns `true` if `haystack` matches the filter.
    pub fn is_match(&mut self, haystack: &str) -> bool {
        match (self.compiled, self.matcher.as_mut()) {
            (Compiled::Regex(re), _) => re.is_match(haystack),
            (Compiled::Literal(needle), _) => haystack.to_lowercase().contains(needle.as_str()),
            (Compiled::Fuzzy(pattern), Some(matcher)) => {
                let haystack = Utf32Str::new(haystack, &mut self.buf);
                pattern.score(haystack, matcher).is_some()
            }
            (Compiled::Fuzzy(_), None) => false,
        }
    }
}
