//! Identifier builder for phone records.

/// Build the record identifier for a brand and a 1-based sequential index.
///
/// The brand is lower-cased and spaces become hyphens; the index is
/// zero-padded to five digits. Ids are unique within a run as long as the
/// caller never repeats an index.
pub fn phone_id(brand: &str, index: u64) -> String {
    format!("{}-{index:05}", brand.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_id_simple_brand() {
        assert_eq!(phone_id("Apple", 1), "apple-00001");
        assert_eq!(phone_id("OnePlus", 4321), "oneplus-04321");
    }

    #[test]
    fn test_phone_id_multi_word_brand() {
        assert_eq!(phone_id("Google Pixel", 7000), "google-pixel-07000");
    }

    #[test]
    fn test_phone_id_wide_index() {
        // Indices beyond five digits are not truncated
        assert_eq!(phone_id("ZTE", 123456), "zte-123456");
    }

    #[test]
    fn test_distinct_indices_give_distinct_ids() {
        assert_ne!(phone_id("Nokia", 1), phone_id("Nokia", 2));
    }
}
