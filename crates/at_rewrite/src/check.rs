use anyhow::{bail, Result};
use swc_common::{sync::Lrc, FileName, SourceMap, Span, Spanned};
use swc_ecma_ast::EsVersion;
use swc_ecma_parser::{EsSyntax, Syntax};

/// Parse already-rewritten source as a JavaScript script.
///
/// The rewriter itself never rejects input; this is the opt-in way to find
/// out whether a malformed directive produced broken output. Fails with the
/// first syntax error, reported as `filename:line:col: message`.
pub fn check(source: &str, filename: &str) -> Result<()> {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom(filename.to_string())),
        source.to_string(),
    );

    let mut recovered = vec![];
    let parsed = swc_ecma_parser::parse_file_as_script(
        &source_file,
        Syntax::Es(EsSyntax::default()),
        EsVersion::latest(),
        None,
        &mut recovered,
    );

    let error = match parsed {
        Err(e) => e,
        Ok(_) => match recovered.into_iter().next() {
            Some(e) => e,
            None => return Ok(()),
        },
    };

    let message = error.kind().msg();
    bail!("{}: {message}", location(&source_map, error.span(), filename))
}

fn location(source_map: &SourceMap, span: Span, filename: &str) -> String {
    let loc = source_map.lookup_char_pos(span.lo);
    format!("{filename}:{}:{}", loc.line, loc.col_display + 1)
}
