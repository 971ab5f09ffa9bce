//! Upload media files from a file or directory to Cloudinary.
//!
//! `cld` resolves one account out of the `CLOUDINARY_URL` environment variable,
//! collects the eligible files under the input path and uploads them one at a
//! time, printing the secure URL of every asset as it completes.
//!
//! ## Pipeline
//! - [`credentials::resolve`] picks the connection string, optionally by API key.
//! - [`CloudinaryClient::from_url`] builds the authenticated upload client.
//! - [`walker::collect_candidates`] lists the input, filtered by an [`AllowList`].
//! - [`uploader::process`] uploads each file and reports the result.
//!
//! A file passed directly must match the allow-list, otherwise the run fails.
//! Inside a directory, unsupported files and subdirectories are skipped
//! silently.

pub mod cli;
pub mod client;
pub mod credentials;
pub mod error;
pub mod filter;
pub mod types;
pub mod uploader;
pub mod walker;

pub use client::{CloudinaryClient, Credentials};
pub use error::CldError;
pub use filter::{AllowList, DEFAULT_EXTENSIONS};
pub use types::{UploadParams, UploadResponse};
pub use uploader::{FailurePolicy, UploadReport};
