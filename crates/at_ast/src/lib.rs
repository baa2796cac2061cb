//! Data model for atsugar directives.
//!
//! The rewriter is purely textual, so there is no tree here: a scan produces
//! a flat, ordered list of [`Directive`]s, each covering a byte range of the
//! source. Directive families:
//!
//! - Member access (`@name` → `self.__name`)
//! - Method literal (`@(a, b){` → `function(a, b) { var self = this; `)
//! - Function literal (`@{x. ` → `function(x) { return  `, bare `@{`)
//! - Doc comments (`/** ... */`), matched only so they are left alone

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Which rule recognized a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveKind {
    /// `/** ... */`, copied through untouched.
    DocComment,
    /// `@name`: private member access on `self`.
    Member,
    /// `@(params){`: function header that binds `this` to `self`.
    Method,
    /// `@{params. `: function whose body returns the following expression.
    /// The `.` must be followed by whitespace.
    Function,
    /// `@{` with no parameter list: zero-argument returning function.
    Thunk,
}

impl DirectiveKind {
    pub fn name(self) -> &'static str {
        match self {
            DirectiveKind::DocComment => "doc_comment",
            DirectiveKind::Member => "member",
            DirectiveKind::Method => "method",
            DirectiveKind::Function => "function",
            DirectiveKind::Thunk => "thunk",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One matched span of source text.
///
/// Directives from a single scan are ordered by `span.start` and never
/// overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub span: Span,
    /// The matched source text, exactly as written.
    pub text: String,
    /// Captured parameter list for `Method` and `Function`; `None` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl Directive {
    /// For `Member`, the identifier after the `@`.
    pub fn member_name(&self) -> Option<&str> {
        match self.kind {
            DirectiveKind::Member => self.text.strip_prefix('@'),
            _ => None,
        }
    }
}

/// Feature flags controlling which directive families are active.
///
/// Switching families off reproduces the older rule sets: members only,
/// then members and methods, then all function forms, and finally doc
/// comment protection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtSyntax {
    pub members: bool,
    pub methods: bool,
    /// Both `@{params. ` and bare `@{`.
    pub functions: bool,
    pub doc_comments: bool,
}

impl AtSyntax {
    /// Only `@name` member access.
    pub fn members_only() -> Self {
        Self {
            members: true,
            methods: false,
            functions: false,
            doc_comments: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.members || self.methods || self.functions || self.doc_comments)
    }
}

impl Default for AtSyntax {
    fn default() -> Self {
        Self {
            members: true,
            methods: true,
            functions: true,
            doc_comments: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_syntax_default_enables_all() {
        let s = AtSyntax::default();
        assert!(s.members);
        assert!(s.methods);
        assert!(s.functions);
        assert!(s.doc_comments);
        assert!(!s.is_empty());
    }

    #[test]
    fn member_name_strips_at() {
        let d = Directive {
            kind: DirectiveKind::Member,
            span: Span::new(0, 4),
            text: "@foo".into(),
            params: None,
        };
        assert_eq!(d.member_name(), Some("foo"));
    }

    #[test]
    fn directive_json_omits_missing_params() {
        let d = Directive {
            kind: DirectiveKind::DocComment,
            span: Span::new(3, 9),
            text: "/** */".into(),
            params: None,
        };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "doc_comment");
        assert_eq!(json["span"]["start"], 3);
        assert!(json.get("params").is_none());
    }
}
