//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use std::path::Path;

use tracing::debug;

/// Ensure the directory holding a SQLite database file exists.
///
/// Accepts a connection URL such as `sqlite://data/autos.db?mode=rwc`.
/// Non-SQLite URLs and in-memory databases are left alone.
pub async fn ensure_sqlite_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else { return Ok(()) };
    let Some(parent) = Path::new(path).parent() else { return Ok(()) };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    debug!(dir = %parent.display(), "sqlite data directory ready");
    Ok(())
}

/// File path part of a SQLite URL, or `None` for other backends and `:memory:`.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_path_extraction() {
        assert_eq!(sqlite_file_path("sqlite://data/autos.db?mode=rwc"), Some("data/autos.db"));
        assert_eq!(sqlite_file_path("sqlite:autos.db"), Some("autos.db"));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://u:p@localhost/db"), None);
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let url = format!("sqlite://{}?mode=rwc", dir.join("autos.db").display());
        ensure_sqlite_dir(&url).await.unwrap();
        assert!(dir.is_dir());
    }
}
