//! Shared helpers for the atsugar golden-file harness.

use std::path::{Path, PathBuf};

use anyhow::Result;
use at_ast::AtSyntax;
use at_rewrite::Rewriter;

/// Suffix of fixture inputs; the expectation swaps it for `.expected.js`.
pub const INPUT_SUFFIX: &str = ".input.js";
pub const EXPECTED_SUFFIX: &str = ".expected.js";

/// `tests/fixtures` at the workspace root.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures"))
}

/// All `*.input.js` files under `dir`, nested directories included, sorted.
pub fn collect_input_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if path.to_str().is_some_and(|p| p.ends_with(INPUT_SUFFIX)) {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// `name.input.js` → `name.expected.js`, in the same directory.
pub fn expected_path(input: &Path) -> PathBuf {
    let name = input.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let stem = name.strip_suffix(INPUT_SUFFIX).unwrap_or(name);
    input.with_file_name(format!("{stem}{EXPECTED_SUFFIX}"))
}

/// Rewrite `source` with every directive family enabled.
pub fn run_pipeline(source: &str) -> String {
    Rewriter::new(&AtSyntax::default()).rewrite(source)
}

/// Check that rewritten output parses as JavaScript.
pub fn verify_valid_javascript(output: &str, filename: &str) -> Result<()> {
    at_rewrite::check(output, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_collected_recursively() {
        let dir = fixtures_dir();
        let files = collect_input_files(&dir);

        assert!(files.contains(&dir.join("functions.input.js")));
        assert!(files.contains(&dir.join("roundtrip").join("shapes.input.js")));
        assert!(files.windows(2).all(|w| w[0] < w[1]));
        assert!(files.iter().all(|f| expected_path(f).is_file()), "{files:?}");
    }

    #[test]
    fn expected_path_only_touches_the_file_name() {
        assert_eq!(
            expected_path(Path::new("x.input.js/dir/a.input.js")),
            PathBuf::from("x.input.js/dir/a.expected.js")
        );
    }
}
