//! Snapshot file naming.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Build `{dir}/{basename}-{unix seconds}.{micros}.png`.
///
/// The microsecond fraction keeps two snapshots of the same file taken
/// within one second apart.
pub fn snapshot_path(dir: &Path, media_path: &str, at: DateTime<Utc>) -> PathBuf {
    let trimmed = media_path.trim_end_matches('/');
    let base = Path::new(trimmed)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "snapshot".to_string());

    dir.join(format!(
        "{}-{}.{:06}.png",
        base,
        at.timestamp(),
        at.timestamp_subsec_micros()
    ))
}
