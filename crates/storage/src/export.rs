use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use fitlog_domain::{ValidationError, WorkoutSession, iso_utc};
use log::debug;
use serde_json::json;

/// Version tag of the export document format.
pub const EXPORT_VERSION: &str = "1.0";

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Writes all sessions into a single JSON document with a metadata header
/// and returns the written path. Missing parent directories are created.
/// Any session that has not been finished aborts the export before
/// anything is written.
pub fn export_sessions<'a>(
    sessions: impl IntoIterator<Item = &'a WorkoutSession>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();

    let records = sessions
        .into_iter()
        .map(WorkoutSession::to_record)
        .collect::<Result<Vec<_>, _>>()?;
    let count = records.len();

    let document = json!({
        "version": EXPORT_VERSION,
        "exported_at": iso_utc(Utc::now()),
        "sessions": records,
    });

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&document)?)?;

    debug!("exported {count} sessions to {}", path.display());

    Ok(path.to_path_buf())
}
