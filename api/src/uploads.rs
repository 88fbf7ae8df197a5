//! Board image files under the data directory, for the board settings forms.

use std::path::Path;

use tokio::fs;
use tracing::debug;

/// Create `directory` and any missing parents.
pub async fn make_directory(directory: &Path) -> std::io::Result<()> {
    fs::create_dir_all(directory).await
}

/// Remove `directory/filename` if `delete` is set and the file exists.
pub async fn delete_image(directory: &Path, filename: &str, delete: bool) -> std::io::Result<()> {
    if !delete || filename.is_empty() {
        return Ok(());
    }

    match fs::remove_file(directory.join(filename)).await {
        Ok(()) => {
            debug!(filename, "Deleted image");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Write `contents` to `directory/filename`, replacing any existing file.
/// An empty filename means no file was uploaded.
pub async fn save_image(directory: &Path, filename: &str, contents: &[u8]) -> std::io::Result<()> {
    if filename.is_empty() {
        return Ok(());
    }

    fs::write(directory.join(filename), contents).await?;
    debug!(filename, bytes = contents.len(), "Saved image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_delete_image() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("file").join("free");
        make_directory(&dir).await.unwrap();

        save_image(&dir, "head.png", b"png-bytes").await.unwrap();
        assert_eq!(std::fs::read(dir.join("head.png")).unwrap(), b"png-bytes");

        delete_image(&dir, "head.png", false).await.unwrap();
        assert!(dir.join("head.png").exists());

        delete_image(&dir, "head.png", true).await.unwrap();
        assert!(!dir.join("head.png").exists());

        delete_image(&dir, "head.png", true).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_image_without_filename_is_noop() {
        let root = tempfile::tempdir().unwrap();
        save_image(root.path(), "", b"ignored").await.unwrap();

        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_make_directory_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("b");

        make_directory(&dir).await.unwrap();
        make_directory(&dir).await.unwrap();
        assert!(dir.is_dir());
    }
}
