//! The directive alternation.
//!
//! Each enabled family contributes one alternative, always in the same
//! relative order. The regex engine is leftmost-first, so at any position
//! an earlier alternative beats a later one.

use at_ast::AtSyntax;
use regex::Regex;

pub(super) const DOC: &str = "doc";
pub(super) const MEMBER: &str = "member";
pub(super) const METHOD: &str = "method";
pub(super) const PARAMS: &str = "params";
pub(super) const THUNK: &str = "thunk";

/// Characters allowed in a parameter list. Kept narrow so no directive can
/// appear inside another one.
const PARAM_CLASS: &str = r"[A-Za-z0-9$_,\s]*";

/// Build the alternation for `syntax`, or `None` if nothing is enabled.
pub(super) fn build(syntax: &AtSyntax) -> Option<Regex> {
    if syntax.is_empty() {
        return None;
    }

    let mut alternatives: Vec<String> = Vec::new();

    if syntax.doc_comments {
        alternatives.push(format!(r"(?P<{DOC}>/\*\*(?s:.*?)\*/)"));
    }
    if syntax.members {
        alternatives.push(format!(r"(?P<{MEMBER}>@[A-Za-z0-9_]+)"));
    }
    if syntax.methods {
        alternatives.push(format!(r"@\((?P<{METHOD}>{PARAM_CLASS})\)\s*\{{"));
    }
    if syntax.functions {
        // The separator is `.` plus one whitespace character, so `@{ a.b }`
        // stays a bare thunk. That whitespace is echoed back on expansion.
        alternatives.push(format!(r"@\{{(?P<{PARAMS}>{PARAM_CLASS})\.\s"));
        alternatives.push(format!(r"(?P<{THUNK}>@\{{)"));
    }

    let pattern = alternatives.join("|");
    tracing::debug!(%pattern, "compiled directive pattern");
    Some(Regex::new(&pattern).expect("directive pattern is built from fixed fragments"))
}
