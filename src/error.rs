use std::path::PathBuf;

/// Every failure `cld` can report.
///
/// The first group is fatal at startup or while walking the input. The
/// transport variants at the bottom only ever reach the user wrapped in
/// [`CldError::Upload`], which names the file that failed.
#[derive(Debug, thiserror::Error)]
pub enum CldError {
    #[error("{var} environment variable is not set")]
    MissingConfig { var: &'static str },
    #[error("failed to get Cloudinary URL for API key {api_key}: url not found")]
    CredentialNotFound { api_key: String },
    #[error("failed to create a new Cloudinary client: {reason}")]
    ClientInit { reason: String },
    #[error("failed to stat input path {}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input file is not a supported type: {}", .path.display())]
    UnsupportedInput { path: PathBuf },
    #[error("failed to read directory {}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to upload {}", .path.display())]
    Upload {
        path: PathBuf,
        #[source]
        source: Box<CldError>,
    },

    #[error("network request failed")]
    RequestFailed(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },
    #[error("URL parsing failed")]
    UrlParseFailed(#[from] url::ParseError),
    #[error("file I/O error")]
    Io(#[from] std::io::Error),
    #[error("failed to parse API response")]
    ResponseParseFailed(#[from] serde_json::Error),
}

impl CldError {
    /// Wraps a transport-level error with the path of the file being uploaded.
    pub fn upload(path: impl Into<PathBuf>, source: CldError) -> Self {
        CldError::Upload {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
