//! # srclint_rule
//!
//! Core types and the rule trait for srclint style rules.
//!
//! This crate provides:
//! - The `Rule` trait implemented by every style rule
//! - Token types handed over by the host tokenizer
//! - Diagnostic types returned to the host reporting layer
//! - Rule manifests for registration with the host dispatch table
//!
//! ## Architecture
//!
//! The host engine tokenizes source files and walks the token stream. For
//! every token whose category a rule has registered for, the host invokes
//! `Rule::check` with the token and records the returned diagnostic, if any.
//! Rules are stateless after construction and may be checked concurrently
//! from multiple worker threads.
//!
//! ## Example
//!
//! ```rust,ignore
//! use srclint_rule::{Rule, Token, TokenCategory, Span};
//!
//! let token = Token::comment("// TODO: fix this", Span::new(0, 17));
//! if rule.manifest().handles(token.category) {
//!     if let Some(diagnostic) = rule.check(&token) {
//!         println!("{}: {}", diagnostic.code, diagnostic.message());
//!     }
//! }
//! ```

mod diagnostic;
mod error;
mod manifest;
mod rule;
mod token;

pub use diagnostic::{Diagnostic, Severity};
pub use error::RuleError;
pub use manifest::RuleManifest;
pub use rule::Rule;
pub use token::{Span, Token, TokenCategory};
