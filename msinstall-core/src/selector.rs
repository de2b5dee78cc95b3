use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Install targets checked in priority order. The first one present in the
/// search path wins; later entries are never consulted after a match, even
/// if the copy into the winner subsequently fails.
pub const CANDIDATE_DIRS: [&str; 4] = ["/usr/local/bin", "/opt/bin", "/opt", "/usr/bin"];

/// Splits a raw PATH-style value into an ordered directory list using the
/// platform's list-separator convention
pub fn search_path_dirs(path_var: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(path_var).collect()
}

/// Picks the install directory: the first candidate, in candidate order,
/// that appears verbatim in the search path. Pure function, so it can be
/// tested without touching the real environment.
pub fn select_install_dir(search_path: &[PathBuf], candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|c| Path::new(*c))
        .find(|candidate| search_path.iter().any(|dir| dir.as_path() == *candidate))
        .map(PathBuf::from)
}
