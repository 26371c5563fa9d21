//! Diagnostic types returned to the host reporting layer.

use serde::{Deserialize, Serialize};

use crate::Span;

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// A diagnostic produced by a style rule.
///
/// The message is carried as a template plus an optional single parameter so
/// the host reporting layer can aggregate diagnostics by template, the code
/// distinguishes diagnostic categories within one rule, and the span is the
/// token position passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// Diagnostic code within the rule (e.g. "Found").
    pub code: String,

    /// Message template. A `{}` placeholder marks where the parameter is
    /// interpolated; templates without a placeholder render verbatim.
    pub template: String,

    /// Optional single message parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,

    /// Position of the offending token.
    pub span: Span,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new diagnostic with Error severity.
    pub fn new(
        rule_id: impl Into<String>,
        code: impl Into<String>,
        template: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            code: code.into(),
            template: template.into(),
            param: None,
            span,
            severity: Severity::Error,
        }
    }

    /// Creates a new diagnostic with Warning severity.
    pub fn warning(
        rule_id: impl Into<String>,
        code: impl Into<String>,
        template: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            code: code.into(),
            template: template.into(),
            param: None,
            span,
            severity: Severity::Warning,
        }
    }

    /// Sets the message parameter.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Renders the message, interpolating the parameter into the template.
    ///
    /// Templates without a parameter render verbatim.
    pub fn message(&self) -> String {
        match &self.param {
            Some(param) => self.template.replacen("{}", param, 1),
            None => self.template.clone(),
        }
    }
}
