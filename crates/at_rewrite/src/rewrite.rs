//! Directive scanning and rewriting.
//!
//! Processing is one left-to-right pass of a single alternation. At each
//! position the first alternative that matches wins, in this order:
//!
//! 1. Doc comment (`/** ... */`), kept verbatim
//! 2. Member (`@name`)
//! 3. Method literal (`@(params){`)
//! 4. Function literal (`@{params. `)
//! 5. Bare function literal (`@{`)
//!
//! Text between matches is copied unchanged. Malformed directives simply
//! fail to match, so they pass through as written.

use std::sync::LazyLock;

use at_ast::{AtSyntax, Directive, DirectiveKind, Span};
use regex::{Captures, Regex};

mod expand;
mod pattern;

pub use expand::expand;

static DEFAULT_REWRITER: LazyLock<Rewriter> = LazyLock::new(Rewriter::default);

/// Compiled directive pattern for one [`AtSyntax`].
#[derive(Debug, Clone)]
pub struct Rewriter {
    syntax: AtSyntax,
    /// `None` when every directive family is switched off.
    pattern: Option<Regex>,
}

impl Rewriter {
    pub fn new(syntax: &AtSyntax) -> Self {
        Self {
            syntax: syntax.clone(),
            pattern: pattern::build(syntax),
        }
    }

    pub fn syntax(&self) -> &AtSyntax {
        &self.syntax
    }

    /// Find every directive in `source`, in order of appearance.
    pub fn scan(&self, source: &str) -> Vec<Directive> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        pattern
            .captures_iter(source)
            .filter_map(|caps| to_directive(&caps))
            .collect()
    }

    /// Rewrite `source`, replacing each directive with its expansion.
    pub fn rewrite(&self, source: &str) -> String {
        let directives = self.scan(source);
        if directives.is_empty() {
            return source.to_string();
        }

        let mut result = String::with_capacity(source.len() + directives.len() * 16);
        let mut last = 0;
        for directive in &directives {
            result.push_str(&source[last..directive.span.start]);
            result.push_str(&expand(directive));
            last = directive.span.end;
        }
        result.push_str(&source[last..]);

        tracing::trace!(directives = directives.len(), "rewrote source");
        result
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(&AtSyntax::default())
    }
}

/// Scan with the default syntax (all directive families enabled).
pub fn scan(source: &str) -> Vec<Directive> {
    DEFAULT_REWRITER.scan(source)
}

/// Rewrite with the default syntax (all directive families enabled).
pub fn rewrite(source: &str) -> String {
    DEFAULT_REWRITER.rewrite(source)
}

fn to_directive(caps: &Captures<'_>) -> Option<Directive> {
    let whole = caps.get(0)?;

    let (kind, params) = if caps.name(pattern::DOC).is_some() {
        (DirectiveKind::DocComment, None)
    } else if caps.name(pattern::MEMBER).is_some() {
        (DirectiveKind::Member, None)
    } else if let Some(params) = caps.name(pattern::METHOD) {
        (DirectiveKind::Method, Some(params.as_str()))
    } else if let Some(params) = caps.name(pattern::PARAMS) {
        (DirectiveKind::Function, Some(params.as_str()))
    } else if caps.name(pattern::THUNK).is_some() {
        (DirectiveKind::Thunk, None)
    } else {
        return None;
    };

    Some(Directive {
        kind,
        span: Span::from(whole.range()),
        text: whole.as_str().to_string(),
        params: params.map(str::to_string),
    })
}
