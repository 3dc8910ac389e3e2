//! Pure resolution of the companion script path.

use std::path::{Path, PathBuf};

/// Bundle output directory the compiled launcher is shipped in.
pub const DIST_DIR: &str = "dist";
/// Fixed name of the companion script at the installation root.
pub const SCRIPT_NAME: &str = "action.ps1";

/// Return the installation root for a launcher running in `exe_dir`.
///
/// When the final path component is the `dist` bundle directory, the root is
/// its parent; otherwise `exe_dir` is already the root. The comparison is on
/// the whole component, so directories that merely end in `dist` are kept.
pub fn install_root(exe_dir: &Path) -> &Path {
    if exe_dir.file_name().is_some_and(|name| name == DIST_DIR) {
        exe_dir.parent().unwrap_or(exe_dir)
    } else {
        exe_dir
    }
}

/// Full path of the companion script for a launcher running in `exe_dir`.
pub fn script_path(exe_dir: &Path) -> PathBuf {
    install_root(exe_dir).join(SCRIPT_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_dir_is_stripped() {
        let resolved = script_path(Path::new("/opt/tool/dist"));
        assert_eq!(resolved, PathBuf::from("/opt/tool/action.ps1"));
    }

    #[test]
    fn non_dist_dir_is_kept() {
        let resolved = script_path(Path::new("/opt/tool"));
        assert_eq!(resolved, PathBuf::from("/opt/tool/action.ps1"));
    }

    #[test]
    fn dir_merely_ending_in_dist_is_kept() {
        let resolved = script_path(Path::new("/opt/undist"));
        assert_eq!(resolved, PathBuf::from("/opt/undist/action.ps1"));
    }

    #[test]
    fn nested_dist_strips_only_final_component() {
        let resolved = script_path(Path::new("/opt/dist/dist"));
        assert_eq!(resolved, PathBuf::from("/opt/dist/action.ps1"));
    }

    #[test]
    fn relative_dist_dir_is_stripped() {
        let resolved = script_path(Path::new("dist"));
        assert_eq!(resolved, PathBuf::from("action.ps1"));
    }
}
