//! Output writing
//!
//! The document is written to a hidden temp file next to the destination
//! and renamed into place, so a failed write never leaves a truncated
//! contract at the destination path.

use crate::error::WriteError;
use crate::input::ContractInput;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Final output path for `input`
///
/// An existing directory gets a file named after the contractor
/// (`contract_Jane_Doe.docx`); any other path is used as given.
#[must_use]
pub fn resolve_output_path(path: &Path, input: &ContractInput, extension: &str) -> PathBuf {
    if path.is_dir() {
        path.join(format!("contract_{}.{extension}", file_stem(&input.contractor_name)))
    } else {
        path.to_path_buf()
    }
}

/// Contractor name as a file stem: spaces become underscores, path
/// separators are dropped
fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "unnamed".to_string()
    } else {
        stem
    }
}

/// Write `bytes` to `path`, replacing any existing file
///
/// # Errors
/// `WriteError::NoFileName` if `path` has no file name,
/// `WriteError::Io` if the temp file cannot be written or renamed
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), WriteError> {
    let temp = temp_path(path)?;
    debug!(temp = %temp.display(), "writing temp file");

    if let Err(source) = write_and_sync(&temp, bytes).await {
        discard(&temp).await;
        return Err(WriteError::io_error(path, source));
    }
    if let Err(source) = tokio::fs::rename(&temp, path).await {
        discard(&temp).await;
        return Err(WriteError::io_error(path, source));
    }
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf, WriteError> {
    let name = path
        .file_name()
        .ok_or_else(|| WriteError::NoFileName(path.to_path_buf()))?;

    let mut temp_name = OsString::from(".");
    temp_name.push(name);
    temp_name.push(format!(".{}.partial", Uuid::new_v4().simple()));
    Ok(path.with_file_name(temp_name))
}

async fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

async fn discard(temp: &Path) {
    match tokio::fs::remove_file(temp).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(temp = %temp.display(), error = %e, "failed to remove temp file"),
    }
}
