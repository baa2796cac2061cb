//! Text-level rewriter for atsugar `@`-directives.
//!
//! Expands the directive shorthand into plain JavaScript:
//!
//! - Member access (`@name` → `self.__name`)
//! - Method literals (`@(a, b){` → `function(a, b) { var self = this; `)
//! - Function literals (`@{x, y. ` → `function(x, y) { return  `)
//!
//! The rewrite is a single regex scan over the text. Doc comments are
//! matched first so that `@` sequences inside them survive untouched.
//! Everything else passes through verbatim.

pub mod check;
pub mod rewrite;

pub use check::check;
pub use rewrite::{expand, rewrite, scan, Rewriter};
