//! Rule manifest definition.

use serde::{Deserialize, Serialize};

use crate::TokenCategory;

/// Manifest for a style rule.
///
/// Every rule declares, at registration time, which token categories it
/// wants to be invoked for. The host consumes this once when building its
/// dispatch table; it is not renegotiated during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleManifest {
    /// Unique rule identifier (e.g. "find-keyword").
    pub name: String,

    /// Rule version (semver).
    pub version: String,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Token categories this rule is interested in.
    #[serde(default)]
    pub token_categories: Vec<TokenCategory>,
}

impl RuleManifest {
    /// Creates a new rule manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: None,
            token_categories: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the token categories this rule handles.
    pub fn with_token_categories(mut self, token_categories: Vec<TokenCategory>) -> Self {
        self.token_categories = token_categories;
        self
    }

    /// Returns true if this rule wants to see tokens of the given category.
    pub fn handles(&self, category: TokenCategory) -> bool {
        self.token_categories.contains(&category)
    }
}
