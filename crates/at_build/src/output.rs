//! Output path policy.

use std::path::{Component, Path, PathBuf};

use crate::BuildOptions;

/// Extension given to rewritten files unless configured otherwise.
pub const DEFAULT_EXTENSION: &str = "jsc";

/// Where the rewritten form of `input` is written.
///
/// Same base name with the output extension. Without an output root the
/// file lands next to its input. With one, a plain relative input keeps its
/// directory structure under the root; anything else (absolute paths, `..`)
/// keeps only its file name.
pub fn output_path(input: &Path, options: &BuildOptions) -> PathBuf {
    let Some(out_dir) = &options.out_dir else {
        return input.with_extension(&options.extension);
    };

    let plain_relative = input
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    let relative = match input.file_name() {
        Some(name) if !plain_relative => PathBuf::from(name),
        _ => input.to_path_buf(),
    };

    out_dir.join(relative).with_extension(&options.extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_out_dir(dir: &str) -> BuildOptions {
        BuildOptions {
            out_dir: Some(PathBuf::from(dir)),
            ..BuildOptions::default()
        }
    }

    #[test]
    fn sibling_output_swaps_extension() {
        let options = BuildOptions::default();
        assert_eq!(
            output_path(Path::new("src/proof.js"), &options),
            PathBuf::from("src/proof.jsc")
        );
    }

    #[test]
    fn only_last_extension_is_replaced() {
        let options = BuildOptions::default();
        assert_eq!(
            output_path(Path::new("lib/jquery.toc.js"), &options),
            PathBuf::from("lib/jquery.toc.jsc")
        );
        assert_eq!(output_path(Path::new("Makefile"), &options), PathBuf::from("Makefile.jsc"));
    }

    #[test]
    fn custom_extension() {
        let options = BuildOptions {
            extension: "out.js".to_string(),
            ..BuildOptions::default()
        };
        assert_eq!(output_path(Path::new("a.js"), &options), PathBuf::from("a.out.js"));
    }

    #[test]
    fn out_dir_keeps_relative_structure() {
        assert_eq!(
            output_path(Path::new("js/util.js"), &with_out_dir("build")),
            PathBuf::from("build/js/util.jsc")
        );
    }

    #[test]
    fn out_dir_flattens_parent_and_absolute_inputs() {
        let options = with_out_dir("build");
        assert_eq!(
            output_path(Path::new("../other/x.js"), &options),
            PathBuf::from("build/x.jsc")
        );
        assert_eq!(
            output_path(Path::new("/abs/dir/y.js"), &options),
            PathBuf::from("build/y.jsc")
        );
    }
}
