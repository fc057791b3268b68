//! Media loading for the analysis pipeline.
//!
//! Validates an on-disk photo and hands it over as an [`ImagePayload`];
//! anything that is not a readable, non-empty image is rejected here,
//! before any provider is contacted.

use bytes::Bytes;
use shelfscan_core::ScanError;
use std::path::Path;
use tracing::debug;

pub mod mime_detect;
pub mod preprocess;

pub use mime_detect::{detect_mime_type, is_image};
pub use preprocess::{prepare_for_submission, SUBMIT_EDGE};

/// An image ready for preprocessing and submission to a vision provider.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub source: String,
    pub mime_type: String,
    pub data: Bytes,
}

/// Load an image file from disk and validate it for analysis.
///
/// Missing, unreadable, empty, or non-image files are recoverable input
/// errors ([`ScanError::InvalidInput`]).
pub fn load_image(path: &Path) -> Result<ImagePayload, ScanError> {
    if !path.exists() {
        return Err(ScanError::InvalidInput(format!(
            "no image file at {}",
            path.display()
        )));
    }

    let mime = detect_mime_type(path);
    if !is_image(mime) {
        return Err(ScanError::InvalidInput(format!(
            "unsupported media type: {mime}"
        )));
    }

    let data = std::fs::read(path).map_err(|e| {
        ScanError::InvalidInput(format!("failed to read {}: {e}", path.display()))
    })?;
    if data.is_empty() {
        return Err(ScanError::InvalidInput(format!(
            "image file is empty: {}",
            path.display()
        )));
    }

    debug!(path = %path.display(), bytes = data.len(), mime, "Loaded image payload");

    Ok(ImagePayload {
        source: path.display().to_string(),
        mime_type: mime.to_string(),
        data: Bytes::from(data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejects_missing_file() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::File::create(&path).unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_image_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn loads_image_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let payload = load_image(&path).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data.len(), 4);
    }
}
