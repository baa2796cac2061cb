//! Command-line arguments to input paths.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::BuildError;

/// Expand each argument as a glob pattern, in argument order.
///
/// Matches of one pattern come out sorted. A pattern that matches nothing is
/// kept as a literal path, so a missing file surfaces later as a read error
/// rather than vanishing. Paths already seen are dropped.
pub fn expand_inputs(args: &[String]) -> Result<Vec<PathBuf>, BuildError> {
    let mut seen = HashSet::new();
    let mut inputs = Vec::new();

    for arg in args {
        let entries = glob::glob(arg).map_err(|source| BuildError::Pattern {
            pattern: arg.clone(),
            source,
        })?;

        let mut matched = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => matched.push(path),
                Err(e) => tracing::warn!(error = %e, pattern = %arg, "skipping unreadable path"),
            }
        }
        matched.sort();

        if matched.is_empty() {
            tracing::debug!(pattern = %arg, "no matches, using argument as a literal path");
            matched.push(PathBuf::from(arg));
        }

        for path in matched {
            if seen.insert(path.clone()) {
                inputs.push(path);
            }
        }
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn arg(path: &std::path::Path) -> String {
        path.display().to_string()
    }

    #[test]
    fn glob_matches_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.js", "a.js", "c.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let inputs = expand_inputs(&[arg(&dir.path().join("*.js"))]).unwrap();
        assert_eq!(inputs, vec![dir.path().join("a.js"), dir.path().join("b.js")]);
    }

    #[test]
    fn unmatched_argument_is_kept_literally() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.js");
        let inputs = expand_inputs(&[arg(&missing)]).unwrap();
        assert_eq!(inputs, vec![missing]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        fs::write(dir.path().join("b.js"), "").unwrap();
        let inputs = expand_inputs(&[
            arg(&dir.path().join("b.js")),
            arg(&dir.path().join("*.js")),
        ])
        .unwrap();
        assert_eq!(inputs, vec![dir.path().join("b.js"), dir.path().join("a.js")]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = expand_inputs(&["src/***.js".to_string()]).unwrap_err();
        assert!(matches!(err, BuildError::Pattern { .. }), "{err}");
    }
}
