use serde::Deserialize;

/// Optional parameters attached to every upload request.
///
/// Fields left as `None` are not sent, so the account's defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadParams {
    /// Name of an upload preset configured on the Cloudinary account.
    pub upload_preset: Option<String>,
    /// Destination folder for the uploaded asset.
    pub folder: Option<String>,
}

impl UploadParams {
    /// Builds the parameters from raw CLI values, treating empty strings as unset.
    pub fn new(upload_preset: &str, folder: &str) -> Self {
        Self {
            upload_preset: non_empty(upload_preset),
            folder: non_empty(folder),
        }
    }

    /// The parameters that take part in the request signature, as `(key, value)` pairs.
    pub(crate) fn signed_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(folder) = &self.folder {
            fields.push(("folder", folder.clone()));
        }
        if let Some(preset) = &self.upload_preset {
            fields.push(("upload_preset", preset.clone()));
        }
        fields
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The subset of Cloudinary's upload response that `cld` cares about.
#[derive(Debug, Deserialize, Clone)]
pub struct UploadResponse {
    /// The HTTPS location of the uploaded asset.
    pub secure_url: String,
    /// The public identifier Cloudinary assigned to the asset.
    #[serde(default)]
    pub public_id: Option<String>,
    /// `image`, `video` or `raw`.
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Size of the stored asset in bytes.
    #[serde(default)]
    pub bytes: Option<u64>,
}

/// (Internal) The error envelope Cloudinary returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub(crate) error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) message: String,
}
