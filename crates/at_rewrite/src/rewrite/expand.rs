//! Expansion text for each directive kind.

use std::borrow::Cow;

use at_ast::{Directive, DirectiveKind};

/// Receiver alias bound by method literals, and prefix for member access.
const SELF: &str = "self";

/// The replacement text for `directive`.
///
/// Doc comments expand to themselves.
pub fn expand(directive: &Directive) -> Cow<'_, str> {
    let params = directive.params.as_deref().unwrap_or_default();

    match directive.kind {
        DirectiveKind::DocComment => Cow::Borrowed(&directive.text),
        DirectiveKind::Member => {
            let name = directive.member_name().unwrap_or_default();
            Cow::Owned(format!("{SELF}.__{name}"))
        }
        DirectiveKind::Method => {
            Cow::Owned(format!("function({params}) {{ var {SELF} = this; "))
        }
        DirectiveKind::Function => {
            // The matched separator ends in one whitespace character that
            // belongs to the returned expression.
            let gap = directive
                .text
                .rsplit_once('.')
                .map(|(_, gap)| gap)
                .unwrap_or_default();
            Cow::Owned(format!("function({params}) {{ return {gap}"))
        }
        DirectiveKind::Thunk => Cow::Borrowed("function() { return "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use at_ast::Span;

    fn directive(kind: DirectiveKind, text: &str, params: Option<&str>) -> Directive {
        Directive {
            kind,
            span: Span::new(0, text.len()),
            text: text.to_string(),
            params: params.map(str::to_string),
        }
    }

    #[test]
    fn member_expansion() {
        let d = directive(DirectiveKind::Member, "@count", None);
        assert_eq!(expand(&d), "self.__count");
    }

    #[test]
    fn method_expansion_keeps_params_verbatim() {
        let d = directive(DirectiveKind::Method, "@( a ,b ){", Some(" a ,b "));
        assert_eq!(expand(&d), "function( a ,b ) { var self = this; ");
    }

    #[test]
    fn function_expansion() {
        let d = directive(DirectiveKind::Function, "@{x.\n", Some("x"));
        assert_eq!(expand(&d), "function(x) { return \n");
    }

    #[test]
    fn doc_comment_is_borrowed() {
        let d = directive(DirectiveKind::DocComment, "/** @x */", None);
        assert!(matches!(expand(&d), Cow::Borrowed("/** @x */")));
    }
}
