/// Extensions uploaded when `--extensions` is not given.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "svg", "ico", "heic", "avif",
    "mp4", "mov", "avi", "mkv", "webm", "m4v", "mp3", "wav", "aac", "flac", "ogg", "m4a",
    "pdf", "doc", "docx", "ppt", "pptx",
];

/// The set of file-name extensions eligible for upload.
///
/// Entries are stored lowercase and without a leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    extensions: Vec<String>,
}

impl AllowList {
    /// Parses a comma-separated list such as `"jpg, PNG,webp"`.
    ///
    /// Entries are trimmed and lowercased. A leading dot is tolerated and empty
    /// entries are dropped.
    pub fn parse(value: &str) -> Self {
        let extensions = value
            .split(',')
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// The default list joined with commas, as shown in `--help`.
    pub fn default_value() -> String {
        DEFAULT_EXTENSIONS.join(",")
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns `true` if `file_name` ends with `.` followed by an allowed extension.
    pub fn is_supported(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{ext}")))
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let allow = AllowList::parse(" JPG, png ,.WebP,,");
        assert_eq!(allow.extensions(), ["jpg", "png", "webp"]);
    }

    #[test]
    fn matching_is_case_insensitive_on_both_sides() {
        let allow = AllowList::parse("JPG,png");
        assert!(allow.is_supported("a.JPG"));
        assert!(allow.is_supported("a.jpg"));
        assert!(allow.is_supported("c.PnG"));
        assert!(!allow.is_supported("b.txt"));
    }

    #[test]
    fn names_without_a_matching_extension_are_unsupported() {
        let allow = AllowList::parse("jpg");
        assert!(!allow.is_supported("jpg"));
        assert!(!allow.is_supported("photojpg"));
        assert!(!allow.is_supported("README"));
        assert!(!allow.is_supported(".jpg.txt"));
        assert!(allow.is_supported(".jpg"));
        assert!(allow.is_supported("archive.tar.jpg"));
    }

    #[test]
    fn empty_entries_never_match_everything() {
        let allow = AllowList::parse("jpg,");
        assert!(!allow.is_supported("notes."));
        assert!(AllowList::parse("").extensions().is_empty());
        assert!(!AllowList::parse("").is_supported("a.jpg"));
    }

    #[test]
    fn default_list_covers_common_media() {
        let allow = AllowList::default();
        for name in ["a.jpg", "b.jpeg", "c.png", "d.gif", "e.webp", "f.mp4", "g.mp3", "h.pdf"] {
            assert!(allow.is_supported(name), "{name} should be supported");
        }
        assert!(!allow.is_supported("main.rs"));
        assert!(!allow.is_supported("b.txt"));
        assert_eq!(AllowList::parse(&AllowList::default_value()), allow);
    }
}
