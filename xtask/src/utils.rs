// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{BuildError, Result};

/// Workspace root (the parent of the xtask crate).
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `path` relative to `root` for progress lines, falling back to the full path.
pub fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

/// Create `path` and its parents; succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Remove `path` recursively, children first.
///
/// The first entry that cannot be removed aborts with the failed operation and
/// its path. A missing `path` is not an error.
pub fn remove_dir_tree(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    for entry in WalkDir::new(path).contents_first(true) {
        let entry = entry.map_err(|err| BuildError::RemovalFailure {
            operation: "read_dir",
            path: err.path().unwrap_or(path).to_path_buf(),
            source: err.into(),
        })?;

        let entry_path = entry.path();
        if is_removed_as_dir(&entry) {
            fs::remove_dir(entry_path).map_err(|source| BuildError::RemovalFailure {
                operation: "remove_dir",
                path: entry_path.to_path_buf(),
                source,
            })?;
        } else {
            fs::remove_file(entry_path).map_err(|source| BuildError::RemovalFailure {
                operation: "remove_file",
                path: entry_path.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

/// Links are removed, never followed. Windows directory links need
/// `remove_dir`; everywhere else a link is a file.
fn is_removed_as_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.path_is_symlink() {
        cfg!(windows) && entry.path().is_dir()
    } else {
        entry.file_type().is_dir()
    }
}

/// Logical CPUs on this host, at least 1.
pub fn cpu_count() -> usize {
    sys_info::cpu_num()
        .ok()
        .map(|n| n as usize)
        .filter(|&n| n > 0)
        .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_dir_tree_removes_nested_entries() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(out.join("x64").join("Cursor").join("Debug")).unwrap();
        fs::write(out.join("x64").join("Cursor.sln"), "").unwrap();
        fs::write(out.join("x64").join("Cursor").join("Debug").join("Cursor"), "").unwrap();

        remove_dir_tree(&out).unwrap();

        assert!(!out.exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_removal_failure_names_operation_and_path() {
        let err = BuildError::RemovalFailure {
            operation: "remove_file",
            path: PathBuf::from("out/x64/Cursor.sln"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            err.to_string(),
            format!(
                "Operation remove_file on path {} failed",
                Path::new("out/x64/Cursor.sln").display()
            )
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_dir_tree_reports_locked_entry() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("out").join("x64");
        fs::create_dir_all(&locked).unwrap();
        let solution = locked.join("Cursor.sln");
        fs::write(&solution, "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not bind root
        let writable = fs::write(locked.join("write-check"), "").is_ok();
        let result = remove_dir_tree(&dir.path().join("out"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if writable {
            return;
        }

        match result.unwrap_err() {
            BuildError::RemovalFailure {
                operation, path, ..
            } => {
                assert_eq!(operation, "remove_file");
                assert_eq!(path, solution);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(solution.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_dir_tree_unlinks_without_following() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("qt");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("Qt5Core.dll"), "").unwrap();

        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        std::os::unix::fs::symlink(&target, out.join("qt-link")).unwrap();

        remove_dir_tree(&out).unwrap();

        assert!(!out.exists());
        assert!(target.join("Qt5Core.dll").exists());
    }

    #[test]
    fn test_remove_missing_dir_is_ok() {
        let dir = TempDir::new().unwrap();
        remove_dir_tree(&dir.path().join("out")).unwrap();
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out").join("x86");
        ensure_dir(&out).unwrap();
        ensure_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_display_path() {
        let root = Path::new("/src/cursor");
        assert_eq!(display_path(root, Path::new("/src/cursor/out/x64")), "out/x64");
        assert_eq!(display_path(root, root), "/src/cursor");
    }

    #[test]
    fn test_project_root_holds_workspace_manifest() {
        assert!(project_root().join("Cargo.toml").exists());
        assert!(project_root().join("xtask").is_dir());
    }

    #[test]
    fn test_cpu_count_positive() {
        assert!(cpu_count() >= 1);
    }
}
