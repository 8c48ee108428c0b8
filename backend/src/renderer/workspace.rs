use crate::renderer::error::RenderError;
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PREFIX: &str = "wkhtmltopdf_";

/// Scratch directory owned by exactly one render.
///
/// The directory name carries a random suffix, so concurrent renders under
/// the same root never collide. [`Workspace::close`] removes it and logs a
/// failure as a warning; if the owning future is dropped instead (client
/// went away), `TempDir`'s drop removes it on a best-effort basis.
pub(crate) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(crate) async fn create(root: &Path) -> Result<Self, RenderError> {
        let owned = root.to_path_buf();
        let dir = tokio::task::spawn_blocking(move || {
            tempfile::Builder::new().prefix(PREFIX).tempdir_in(owned)
        })
        .await
        .map_err(|e| RenderError::workspace(root, io::Error::other(e)))?
        .map_err(|e| RenderError::workspace(root, e))?;
        debug!("Created workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `contents` as UTF-8 to `name` inside the workspace.
    pub(crate) async fn stage(&self, name: &str, contents: &str) -> Result<PathBuf, RenderError> {
        let path = self.file(name);
        tokio::fs::write(&path, contents.as_bytes())
            .await
            .map_err(|e| RenderError::workspace(&path, e))?;
        Ok(path)
    }

    /// Removes the directory and everything in it on the blocking pool.
    /// Never fails the caller.
    pub(crate) async fn close(self) {
        let path = self.dir.path().to_path_buf();
        let dir = self.dir;
        match tokio::task::spawn_blocking(move || dir.close()).await {
            Ok(Ok(())) => debug!("Removed workspace {}", path.display()),
            Ok(Err(e)) => warn!("Failed to remove temporary directory {}: {}", path.display(), e),
            Err(e) => warn!("Cleanup of {} did not finish: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stage_writes_inside_the_workspace() {
        let root = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(root.path()).await.unwrap();

        let staged = workspace.stage("body.html", "<p>Olá</p>").await.unwrap();

        assert!(staged.starts_with(workspace.path()));
        assert_eq!(std::fs::read_to_string(&staged).unwrap(), "<p>Olá</p>");
    }

    #[tokio::test]
    async fn names_are_unique_and_prefixed() {
        let root = tempfile::tempdir().unwrap();
        let a = Workspace::create(root.path()).await.unwrap();
        let b = Workspace::create(root.path()).await.unwrap();

        assert_ne!(a.path(), b.path());
        let name = a.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(PREFIX));
    }

    #[tokio::test]
    async fn close_removes_directory_with_contents() {
        let root = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(root.path()).await.unwrap();
        workspace.stage("header.html", "<p>h</p>").await.unwrap();
        let path = workspace.path().to_path_buf();

        workspace.close().await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn dropping_removes_directory() {
        let root = tempfile::tempdir().unwrap();
        let path = {
            let workspace = Workspace::create(root.path()).await.unwrap();
            workspace.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn closing_an_already_removed_directory_only_warns() {
        let root = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(root.path()).await.unwrap();
        std::fs::remove_dir_all(workspace.path()).unwrap();

        workspace.close().await;

        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn missing_root_is_a_workspace_error() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope");

        let err = Workspace::create(&missing).await.err().unwrap();

        assert!(matches!(err, RenderError::Workspace { .. }));
    }
}
