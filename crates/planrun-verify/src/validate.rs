use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::pattern::GlobPattern;
use crate::walk::{collect_files, slash_path};

/// Every file under `root` whose relative path matches `pattern`, in traversal order.
pub fn find_matches(pattern: &str, root: &Path) -> Result<Vec<PathBuf>> {
    let glob = GlobPattern::new(pattern)?;
    let files = collect_files(root)?;
    let scanned = files.len();

    let matched: Vec<PathBuf> = files
        .into_iter()
        .filter(|path| glob.is_match(&slash_path(path)))
        .collect();

    debug!(
        pattern,
        regex = glob.regex(),
        root = %root.display(),
        scanned,
        matched = matched.len(),
        "pattern scan finished"
    );
    Ok(matched)
}

/// Like [`find_matches`], but zero matches is an error.
pub fn validate(pattern: &str, root: &Path) -> Result<Vec<PathBuf>> {
    let matched = find_matches(pattern, root)?;
    if matched.is_empty() {
        return Err(Error::NoMatches {
            pattern: pattern.to_string(),
            root: root.to_path_buf(),
        });
    }
    Ok(matched)
}
