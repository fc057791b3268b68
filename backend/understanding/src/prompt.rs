//! The fixed analysis instruction sent with every image.

/// Instruction prompt for the vision model.
///
/// The response layouts this asks for are exactly the ones the extractor's
/// patterns recognize; a model that answers in any other shape yields an
/// all-unknown record.
pub const ANALYSIS_PROMPT: &str = "\
This image contains fruits, vegetables, or packaged products.
Please analyze the image and provide:
- For packaged products:
    - Product Name
    - Product Category
    - Product Quantity
    - Product Count
    - Expiry Date (if available)
- For fruits and vegetables:
    - Type of fruit/vegetable
    - Freshness Index (based on visual cues)
    - Estimated Shelf Life";
