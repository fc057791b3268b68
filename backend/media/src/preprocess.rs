//! Image preprocessing before vision submission.

use anyhow::Context;
use image::imageops::FilterType;
use shelfscan_core::ScanError;
use tracing::debug;

/// Fixed edge length every photo is resized to before submission. This
/// normalizes model latency and memory, not correctness.
pub const SUBMIT_EDGE: u32 = 512;

/// Decode raw image bytes, resize to the fixed 512x512 submission size,
/// and re-encode as PNG. The aspect ratio is not preserved.
///
/// Undecodable bytes are a recoverable input error.
pub fn prepare_for_submission(data: &[u8]) -> Result<Vec<u8>, ScanError> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| ScanError::InvalidInput(format!("failed to decode image: {e}")))?;

    debug!(
        width = decoded.width(),
        height = decoded.height(),
        "Resizing image for submission"
    );
    let resized = decoded.resize_exact(SUBMIT_EDGE, SUBMIT_EDGE, FilterType::Triangle);

    let mut out = Vec::new();
    resized
        .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .context("failed to encode resized image")?;
    Ok(out)
}
