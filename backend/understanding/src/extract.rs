//! Record extraction: parse vision-model output into a `ProductRecord`.
//!
//! Two fixed multi-line layouts are recognized: the packaged-product block
//! (five fields) and the fruit/vegetable block (three fields). Both
//! patterns are searched independently over the full text; the
//! packaged-product layout wins when both appear.

use once_cell::sync::Lazy;
use regex::Regex;
use shelfscan_core::ProductRecord;

static PACKAGED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"Product Name: (.*)\n  - Product Category: (.*)\n  - Product Quantity: (.*)\n  - Product Count: (.*)\n  - Expiry Date: (.*)",
    )
    .unwrap()
});

static PRODUCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"Type of fruit/vegetable: (.*)\n  - Freshness Index: (.*)\n  - Estimated Shelf Life: (.*)",
    )
    .unwrap()
});

/// Extract a [`ProductRecord`] from generated text.
///
/// Pure function: the same text always yields the same record. Captured
/// groups are trimmed of surrounding whitespace; text matching neither
/// layout yields the all-unknown record.
pub fn extract_record(text: &str) -> ProductRecord {
    if let Some(caps) = PACKAGED_RE.captures(text) {
        return ProductRecord::packaged(
            caps[1].trim(),
            caps[2].trim(),
            caps[3].trim(),
            caps[4].trim(),
            caps[5].trim(),
        );
    }

    if let Some(caps) = PRODUCE_RE.captures(text) {
        return ProductRecord::produce(caps[1].trim(), caps[2].trim(), caps[3].trim());
    }

    ProductRecord::unknown()
}
