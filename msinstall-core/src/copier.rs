use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a single copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    /// The artifact was written to this path
    Copied(PathBuf),
    /// The destination refused the write; the caller decides how to advise the user
    PermissionDenied,
}

/// Copies the artifact into `dest_dir`, preserving its file name.
///
/// Permission denial is an expected condition and comes back as a status.
/// Every other filesystem fault (missing artifact, missing destination,
/// disk full) is an error carrying the paths involved.
pub fn copy_artifact(artifact: &Path, dest_dir: &Path) -> Result<CopyStatus> {
    if !artifact.exists() {
        anyhow::bail!("Artifact not found: {}", artifact.display());
    }

    let file_name = artifact
        .file_name()
        .with_context(|| format!("Artifact has no file name: {}", artifact.display()))?;
    let dest = dest_dir.join(file_name);

    match fs::copy(artifact, &dest) {
        Ok(_) => {
            info!("Copied {} -> {}", artifact.display(), dest.display());
            Ok(CopyStatus::Copied(dest))
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Ok(CopyStatus::PermissionDenied),
        Err(e) => Err(e).context(format!(
            "Failed to copy {} to {}",
            artifact.display(),
            dest.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_artifact(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_copy_preserves_name_and_content() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let artifact = write_artifact(&src_dir, "mrsocko", b"#!/bin/sh\necho hi\n");

        let status = copy_artifact(&artifact, dest_dir.path()).unwrap();

        let expected = dest_dir.path().join("mrsocko");
        assert_eq!(status, CopyStatus::Copied(expected.clone()));
        assert_eq!(fs::read(expected).unwrap(), b"#!/bin/sh\necho hi\n");
    }

    #[test]
    fn test_copy_overwrites_existing_destination() {
        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let artifact = write_artifact(&src_dir, "mrsocko", b"new build");
        fs::write(dest_dir.path().join("mrsocko"), b"old build").unwrap();

        copy_artifact(&artifact, dest_dir.path()).unwrap();

        assert_eq!(fs::read(dest_dir.path().join("mrsocko")).unwrap(), b"new build");
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        let dest_dir = TempDir::new().unwrap();
        let err = copy_artifact(Path::new("does-not-exist"), dest_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Artifact not found"));
    }

    #[test]
    fn test_missing_destination_is_an_error() {
        let src_dir = TempDir::new().unwrap();
        let artifact = write_artifact(&src_dir, "mrsocko", b"bits");
        let gone = src_dir.path().join("no-such-dir");

        assert!(copy_artifact(&artifact, &gone).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_readonly_destination_reports_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let src_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let artifact = write_artifact(&src_dir, "mrsocko", b"bits");

        fs::set_permissions(dest_dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores permission bits; nothing to assert in that case
        if fs::write(dest_dir.path().join(".probe"), b"").is_ok() {
            fs::set_permissions(dest_dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let status = copy_artifact(&artifact, dest_dir.path()).unwrap();
        // Restore so TempDir can clean up
        fs::set_permissions(dest_dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(status, CopyStatus::PermissionDenied);
    }
}
