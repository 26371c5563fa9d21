//! find-keyword rule: Flag comments containing discouraged keywords.
//!
//! Scans comment tokens for marker words like "hack", "todo" and "fixme"
//! that should be resolved before a change ships, and reports the keyword's
//! trailing remark so the warning reads like the comment itself.
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | keywords | string[] | ["hack", "todo", "fixme"] | Words flagged inside comments, matched case-insensitively |
//!
//! # Example
//!
//! ```json
//! {
//!   "rules": {
//!     "find-keyword": {
//!       "keywords": ["hack", "wip"]
//!     }
//!   }
//! }
//! ```
//!
//! Keywords are spliced into the search pattern verbatim. A keyword carrying
//! pattern metacharacters is matched under those semantics, and one that does
//! not compile fails rule construction.

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use srclint_rule::{Diagnostic, Rule, RuleError, RuleManifest, Token, TokenCategory};

const RULE_ID: &str = "find-keyword";
const VERSION: &str = "1.0.0";

/// Diagnostic code for a flagged comment.
const FOUND_CODE: &str = "Found";

const KEYWORD_FOUND: &str = "Comment contains a discouraged keyword";
const KEYWORD_FOUND_WITH_REMARK: &str = "Comment contains a discouraged keyword \"{}\"";

/// Default keywords to flag.
const DEFAULT_KEYWORDS: &[&str] = &["hack", "todo", "fixme"];

/// Punctuation stripped from both ends of the remark, after whitespace.
const TRIM_SET: &[char] = &['-', ':', '[', ']', '(', ')', '.', ' '];

/// Configuration for the find-keyword rule.
#[derive(Debug, Clone, Deserialize)]
pub struct FindKeywordConfig {
    /// Words flagged inside comments (default: hack, todo, fixme).
    ///
    /// An explicitly empty list disables matching entirely.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|s| (*s).to_string()).collect()
}

impl Default for FindKeywordConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

/// A keyword found inside a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// The matched keyword exactly as it appeared, casing preserved.
    pub keyword: String,
    /// The keyword plus everything captured after it.
    pub remark: String,
    /// The remark text after the keyword, trimmed for reporting.
    pub message: String,
}

/// Flags comments containing discouraged keywords.
///
/// The search pattern is compiled once at construction and the rule is
/// read-only afterwards, so a single instance can serve a whole scan.
#[derive(Debug)]
pub struct FindKeywordRule {
    pattern: Option<Regex>,
}

impl FindKeywordRule {
    /// Creates the rule from its configuration.
    ///
    /// Fails if the configured keywords produce an invalid search pattern.
    pub fn new(config: FindKeywordConfig) -> Result<Self, RuleError> {
        let pattern = if config.keywords.is_empty() {
            None
        } else {
            let alternation = config.keywords.join("|");
            Some(Regex::new(&format!(
                r"(?i)(?:\A|[^\p{{L}}]+)({alternation})([^\p{{L}}]+(.*)|\z)"
            ))?)
        };

        debug!(
            "Initialized rule {} with {} keywords",
            RULE_ID,
            config.keywords.len()
        );

        Ok(Self { pattern })
    }

    /// Creates the rule from a host-supplied configuration value.
    pub fn from_value(config: serde_json::Value) -> Result<Self, RuleError> {
        let config: FindKeywordConfig =
            serde_json::from_value(config).map_err(|e| RuleError::config(e.to_string()))?;
        Self::new(config)
    }

    /// Searches one comment's text for the leftmost discouraged keyword.
    ///
    /// A keyword only matches at a word boundary: at the start of the text
    /// or after non-letter characters, and followed by non-letters or the
    /// end of the text, so "todo" does not match inside "autodoc". The
    /// reported message is the text following the keyword, trimmed of
    /// whitespace and then of surrounding `-:[](). ` punctuation.
    pub fn evaluate(&self, content: &str) -> Option<KeywordMatch> {
        let captures = self.pattern.as_ref()?.captures(content)?;

        let keyword = captures.get(1)?.as_str();
        let tail = captures.get(2).map_or("", |m| m.as_str());
        let trailing = captures.get(3).map_or("", |m| m.as_str());
        let message = trailing.trim().trim_matches(TRIM_SET);

        Some(KeywordMatch {
            keyword: keyword.to_string(),
            remark: format!("{keyword}{tail}"),
            message: message.to_string(),
        })
    }
}

impl Rule for FindKeywordRule {
    fn manifest(&self) -> RuleManifest {
        RuleManifest::new(RULE_ID, VERSION)
            .with_description("Flag comments containing discouraged keywords")
            .with_token_categories(vec![TokenCategory::Comment, TokenCategory::DocComment])
    }

    fn check(&self, token: &Token) -> Option<Diagnostic> {
        // Only comment-class tokens are inspected.
        if !matches!(
            token.category,
            TokenCategory::Comment | TokenCategory::DocComment
        ) {
            return None;
        }

        let found = self.evaluate(&token.content)?;

        let diagnostic = if found.message.is_empty() {
            Diagnostic::warning(RULE_ID, FOUND_CODE, KEYWORD_FOUND, token.span)
        } else {
            Diagnostic::warning(RULE_ID, FOUND_CODE, KEYWORD_FOUND_WITH_REMARK, token.span)
                .with_param(found.message)
        };

        Some(diagnostic)
    }
}
