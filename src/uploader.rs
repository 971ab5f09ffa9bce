use crate::client::CloudinaryClient;
use crate::error::CldError;
use crate::filter::AllowList;
use crate::types::UploadParams;
use crate::walker::collect_candidates;
use std::io::Write;
use std::path::Path;

/// What to do when one file in a batch fails to upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and carry on with the remaining files.
    #[default]
    Continue,
    /// Stop at the first failure and return it as the run's error.
    FailFast,
}

/// Counts of what happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: usize,
    pub failed: usize,
}

/// Uploads one file and returns its secure URL.
///
/// # Errors
///
/// - `CldError::Upload` naming `path`, with the transport or API error as its source.
pub async fn upload_one(
    client: &CloudinaryClient,
    path: &Path,
    params: &UploadParams,
) -> Result<String, CldError> {
    match client.upload(path, params).await {
        Ok(response) => {
            tracing::info!(
                path = %path.display(),
                public_id = response.public_id.as_deref().unwrap_or_default(),
                resource_type = response.resource_type.as_deref().unwrap_or_default(),
                bytes = response.bytes.unwrap_or_default(),
                "Upload complete"
            );
            Ok(response.secure_url)
        }
        Err(e) => Err(CldError::upload(path, e)),
    }
}

/// Uploads every eligible file under `input`, one at a time.
///
/// Each success is written to `out` as `image uploaded: <url>` as soon as it
/// completes. Under [`FailurePolicy::Continue`] each failure is written to
/// `err` and the next file is tried.
///
/// # Errors
///
/// - Any error from [`collect_candidates`].
/// - `CldError::Upload` for the first failed file under [`FailurePolicy::FailFast`].
/// - `CldError::Io` if writing to `out` or `err` fails.
pub async fn process<O: Write, E: Write>(
    client: &CloudinaryClient,
    input: &Path,
    allow: &AllowList,
    params: &UploadParams,
    policy: FailurePolicy,
    out: &mut O,
    err: &mut E,
) -> Result<UploadReport, CldError> {
    let candidates = collect_candidates(input, allow).await?;
    let mut report = UploadReport::default();

    for path in &candidates {
        match upload_one(client, path, params).await {
            Ok(url) => {
                writeln!(out, "image uploaded: {url}")?;
                report.uploaded += 1;
            }
            Err(e) if policy == FailurePolicy::FailFast => return Err(e),
            Err(e) => {
                let e = anyhow::Error::new(e);
                tracing::debug!(path = %path.display(), "Upload failed, continuing");
                writeln!(err, "{e:#}")?;
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        uploaded = report.uploaded,
        failed = report.failed,
        "Finished processing input"
    );
    Ok(report)
}
