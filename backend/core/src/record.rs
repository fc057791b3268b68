//! The canonical seven-field output of one image analysis.

use serde::{Deserialize, Serialize};

/// Marker stored in every field the analysis could not determine.
pub const UNKNOWN: &str = "unknown";

/// Fixed category assigned to all fruit/vegetable records.
pub const FRUIT_VEGETABLE: &str = "Fruit/Vegetable";

/// One analyzed product or produce item.
///
/// Exactly one of the packaged fields (quantity/count/expiry_date) or the
/// produce fields (freshness_index/shelf_life) is populated, never both;
/// the rest carry [`UNKNOWN`]. Constructed once per image and immutable
/// after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub count: String,
    pub expiry_date: String,
    pub freshness_index: String,
    pub shelf_life: String,
}

impl ProductRecord {
    /// A packaged-product record. Produce fields take the marker.
    pub fn packaged(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        count: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            count: count.into(),
            expiry_date: expiry_date.into(),
            freshness_index: UNKNOWN.to_string(),
            shelf_life: UNKNOWN.to_string(),
        }
    }

    /// A fruit/vegetable record. Category is fixed; packaged fields take
    /// the marker.
    pub fn produce(
        name: impl Into<String>,
        freshness_index: impl Into<String>,
        shelf_life: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: FRUIT_VEGETABLE.to_string(),
            quantity: UNKNOWN.to_string(),
            count: UNKNOWN.to_string(),
            expiry_date: UNKNOWN.to_string(),
            freshness_index: freshness_index.into(),
            shelf_life: shelf_life.into(),
        }
    }

    /// The record produced when no recognized layout was found.
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            category: UNKNOWN.to_string(),
            quantity: UNKNOWN.to_string(),
            count: UNKNOWN.to_string(),
            expiry_date: UNKNOWN.to_string(),
            freshness_index: UNKNOWN.to_string(),
            shelf_life: UNKNOWN.to_string(),
        }
    }

    /// Field values in report column order.
    pub fn to_row(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.category.as_str(),
            self.quantity.as_str(),
            self.count.as_str(),
            self.expiry_date.as_str(),
            self.freshness_index.as_str(),
            self.shelf_life.as_str(),
        ]
    }
}

impl Default for ProductRecord {
    fn default() -> Self {
        Self::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packaged_leaves_produce_fields_unknown() {
        let record = ProductRecord::packaged("Milk", "Dairy", "1L", "2", "2024-05-01");
        assert_eq!(record.name, "Milk");
        assert_eq!(record.expiry_date, "2024-05-01");
        assert_eq!(record.freshness_index, UNKNOWN);
        assert_eq!(record.shelf_life, UNKNOWN);
    }

    #[test]
    fn produce_uses_fixed_category() {
        let record = ProductRecord::produce("Banana", "8/10", "3 days");
        assert_eq!(record.category, FRUIT_VEGETABLE);
        assert_eq!(record.quantity, UNKNOWN);
        assert_eq!(record.count, UNKNOWN);
        assert_eq!(record.expiry_date, UNKNOWN);
    }

    #[test]
    fn unknown_record_fills_every_field() {
        let record = ProductRecord::unknown();
        assert!(record.to_row().iter().all(|v| *v == UNKNOWN));
    }

    #[test]
    fn renders_as_camel_case_json() {
        let value = serde_json::to_value(ProductRecord::unknown()).unwrap();
        assert_eq!(value["expiryDate"], UNKNOWN);
        assert_eq!(value["freshnessIndex"], UNKNOWN);
    }
}
