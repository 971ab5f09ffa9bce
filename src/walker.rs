use crate::error::CldError;
use crate::filter::AllowList;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Resolves `input` into the list of files to upload.
///
/// A file given directly must pass the allow-list, otherwise the whole run
/// fails. Inside a directory only the immediate entries are considered, and
/// subdirectories and unsupported files are skipped without error. Entries keep
/// the order the directory listing returned them in.
///
/// # Errors
///
/// - `CldError::Path` if `input` cannot be stat'ed.
/// - `CldError::UnsupportedInput` if `input` is a file with a disallowed extension.
/// - `CldError::DirectoryRead` if the directory listing fails.
pub async fn collect_candidates(
    input: &Path,
    allow: &AllowList,
) -> Result<Vec<PathBuf>, CldError> {
    let metadata = fs::metadata(input).await.map_err(|source| CldError::Path {
        path: input.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if allow.is_supported(&name) {
            return Ok(vec![input.to_path_buf()]);
        }
        return Err(CldError::UnsupportedInput {
            path: input.to_path_buf(),
        });
    }

    let read_dir_err = |source: std::io::Error| CldError::DirectoryRead {
        path: input.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(input).await.map_err(read_dir_err)?;
    let mut candidates = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
        let file_type = entry.file_type().await.map_err(read_dir_err)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            tracing::debug!(entry = %name, "Skipping subdirectory");
            continue;
        }
        if !allow.is_supported(&name) {
            tracing::debug!(entry = %name, "Skipping unsupported file");
            continue;
        }
        candidates.push(entry.path());
    }

    tracing::info!(
        dir = %input.display(),
        files = candidates.len(),
        "Collected files to upload"
    );
    Ok(candidates)
}
