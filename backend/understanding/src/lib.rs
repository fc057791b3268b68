//! Image understanding for shelfscan: vision inference plus record
//! extraction.
//!
//! The adapter half talks to a vision LLM and returns free-form text; the
//! extractor half parses that text into a `ProductRecord`. Nothing here
//! guarantees the model output actually follows a recognized layout.

pub mod extract;
pub mod prompt;
pub mod runtime;
pub mod vision;

pub use extract::extract_record;
pub use prompt::ANALYSIS_PROMPT;
pub use runtime::VisionRuntime;
pub use vision::{describe_image, VisionProvider};
