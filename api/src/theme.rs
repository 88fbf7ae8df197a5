//! Theme, skin and editor discovery plus admin menu loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, warn};

pub const DEFAULT_THEME: &str = "basic";

/// `templates_dir/theme`, or `templates_dir/basic` when that does not exist.
pub async fn resolve_theme_dir(templates_dir: &Path, theme: &str) -> PathBuf {
    let theme = if theme.is_empty() { DEFAULT_THEME } else { theme };
    let candidate = templates_dir.join(theme);

    if fs::try_exists(&candidate).await.unwrap_or(false) {
        candidate
    } else {
        warn!(theme, "Theme directory missing, using default theme");
        templates_dir.join(DEFAULT_THEME)
    }
}

/// Sorted names of the sub-directories of `dir`. A missing directory is empty.
pub async fn list_subdirectories(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", dir.display())),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Skins available for `kind` (`new`, `search`, `connect`, `faq`, ...) on
/// `device` (`pc` or `mobile`).
pub async fn list_skins(theme_dir: &Path, kind: &str, device: &str) -> anyhow::Result<Vec<String>> {
    list_subdirectories(&theme_dir.join(kind).join(device)).await
}

pub async fn list_editors(editor_dir: &Path) -> anyhow::Result<Vec<String>> {
    list_subdirectories(editor_dir).await
}

/// Merge the top-level objects of every existing menu file. Later files win
/// on key clashes.
pub async fn load_admin_menus(files: &[PathBuf]) -> anyhow::Result<Map<String, Value>> {
    let mut menus = Map::new();

    for path in files {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Admin menu file not present");
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        let parsed: Map<String, Value> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid admin menu file {}", path.display()))?;
        menus.extend(parsed);
    }

    Ok(menus)
}
