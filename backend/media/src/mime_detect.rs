//! MIME type detection for uploaded photos.
//!
//! Used to reject non-image inputs before they reach a vision provider.

use std::path::Path;

/// Detect MIME type by file extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",

        _              => "application/octet-stream",
    }
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_jpeg() {
        assert_eq!(detect_mime_type(&PathBuf::from("photo.jpg")), "image/jpeg");
    }

    #[test]
    fn detects_png_case_insensitively() {
        assert_eq!(detect_mime_type(&PathBuf::from("SHELF.PNG")), "image/png");
    }

    #[test]
    fn unknown_extension_fallback() {
        assert_eq!(
            detect_mime_type(&PathBuf::from("file.xyz")),
            "application/octet-stream"
        );
        assert!(!is_image("application/octet-stream"));
    }
}
