//! Value pools that phone records are sampled from.
//!
//! The built-in pools are returned by [`Catalog::default`]. A YAML file may
//! override any subset of them; pools missing from the file keep their
//! built-in values.
//!
//! ```yaml
//! brands: ["Apple", "Samsung"]
//! colors: ["Black", "White", "Blue", "Red", "Green"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::hash::Hash;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading catalog file
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing or emitting YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A pool that single values are picked from is empty
    #[error("Pool '{0}' must not be empty")]
    EmptyPool(&'static str),

    /// A pool is smaller than the largest sub-selection drawn from it
    #[error("Pool '{pool}' has {len} entries but sub-selections need up to {required}")]
    PoolTooSmall {
        pool: &'static str,
        len: usize,
        required: usize,
    },

    /// A sub-selection pool lists the same entry twice
    #[error("Pool '{pool}' contains duplicate entry '{entry}'")]
    DuplicateEntry { pool: &'static str, entry: String },
}

// ============================================================================
// Sub-selection sizes
// ============================================================================

/// Inclusive bounds on how many distinct entries a sub-selection draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetRange {
    pub min: usize,
    pub max: usize,
}

impl SubsetRange {
    /// Create a range; `min` must not exceed `max`.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether a sub-selection of `len` entries is within bounds.
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// All value pools and fixed text used when assembling records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub brands: Vec<String>,
    /// Model-line suffixes; an empty string means no suffix
    pub name_suffixes: Vec<String>,
    pub processors: Vec<String>,
    pub gpus: Vec<String>,
    pub display_types: Vec<String>,
    pub resolutions: Vec<String>,
    pub refresh_rates: Vec<u32>,
    pub core_counts: Vec<u32>,
    pub clock_speeds_ghz: Vec<f64>,
    pub ram_options: Vec<u32>,
    pub storage_options: Vec<u32>,
    pub rear_megapixels: Vec<u32>,
    pub front_megapixels: Vec<u32>,
    pub rear_apertures: Vec<f64>,
    pub front_apertures: Vec<f64>,
    pub camera_features: Vec<String>,
    pub fast_charging_watts: Vec<u32>,
    pub operating_systems: Vec<String>,
    pub colors: Vec<String>,
    pub connectivity: Vec<String>,
    pub security: Vec<String>,
    pub features: Vec<String>,
    pub review_titles: Vec<String>,
    pub review_body: String,
    /// Article headline; `{brand}` is replaced with the phone's brand
    pub article_title: String,
    pub article_body: String,
    pub article_author: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            brands: strings(&[
                "Apple", "Samsung", "Xiaomi", "OPPO", "Vivo", "Realme", "OnePlus",
                "Google Pixel", "Motorola", "Nokia", "HTC", "LG", "Sony", "Asus",
                "Nothing", "Infinix", "Tecno", "Poco", "Redmi", "iQOO", "Nubia",
                "ZTE", "Huawei", "Honor", "Lenovo", "BlackBerry", "Fairphone",
                "CAT", "Ulefone", "Doogee", "AGM", "Cubot", "Umidigi", "Oukitel",
            ]),
            name_suffixes: strings(&[
                "Pro", "Ultra", "Plus", "Max", "S", "X", "Z", "Note", "Fold", "",
            ]),
            processors: strings(&[
                "Apple A17 Pro",
                "Apple A16 Bionic",
                "Apple A15 Bionic",
                "Snapdragon 8 Gen 3",
                "Snapdragon 8 Gen 2",
                "Snapdragon 8 Gen 1",
                "MediaTek Dimensity 9300",
                "MediaTek Dimensity 8300",
                "MediaTek Dimensity 7200",
                "Exynos 2400",
                "Exynos 2200",
                "Kirin 9000",
                "Kirin 9000S",
                "Google Tensor 3",
                "Google Tensor 2",
                "Google Tensor",
                "Bionic A12",
                "Snapdragon 7 Gen 1",
                "MediaTek Helio G99",
            ]),
            gpus: strings(&["Adreno 8 Core", "Mali-G78", "Mali-G77", "Apple GPU"]),
            display_types: strings(&[
                "AMOLED",
                "OLED",
                "IPS LCD",
                "LTPO AMOLED",
                "Dynamic AMOLED",
                "Fluid AMOLED",
            ]),
            resolutions: strings(&[
                "720x1600", "1080x2340", "1080x2400", "1440x3200", "1440x3120",
                "1080x2460", "1200x2688", "1440x2960", "1600x3840",
            ]),
            refresh_rates: vec![60, 90, 120, 144, 165],
            core_counts: vec![4, 6, 8, 10, 12],
            clock_speeds_ghz: vec![2.0, 2.5, 3.0, 3.5, 4.0],
            ram_options: vec![4, 6, 8, 12, 16],
            storage_options: vec![64, 128, 256, 512, 1024],
            rear_megapixels: vec![12, 13, 16, 20, 48, 50, 64, 108, 200],
            front_megapixels: vec![8, 10, 12, 16, 20, 32],
            rear_apertures: vec![1.4, 1.6, 1.8, 2.0, 2.2],
            front_apertures: vec![2.0, 2.2, 2.4],
            camera_features: strings(&[
                "OIS",
                "EIS",
                "Night Mode",
                "Portrait Mode",
                "Macro",
                "Ultra Wide",
                "Telephoto",
                "Periscope",
            ]),
            fast_charging_watts: vec![18, 25, 30, 33, 45, 65, 120],
            operating_systems: strings(&[
                "iOS 17",
                "iOS 18",
                "Android 13",
                "Android 14",
                "Android 15",
            ]),
            colors: strings(&[
                "Black", "White", "Silver", "Gold", "Blue", "Red", "Green", "Purple", "Pink",
                "Gray",
            ]),
            connectivity: strings(&[
                "5G",
                "4G LTE",
                "WiFi 6E",
                "WiFi 6",
                "Bluetooth 5.3",
                "NFC",
                "USB-C",
            ]),
            security: strings(&[
                "Fingerprint",
                "Face Recognition",
                "Iris Scanner",
                "Pattern Lock",
            ]),
            features: strings(&[
                "Wireless Charging",
                "Fast Charging",
                "IP67 Water Resistant",
                "IP68 Water Resistant",
                "Stereo Speakers",
                "Dolby Atmos",
                "Gorilla Glass",
                "Sapphire Crystal",
                "Always-on Display",
                "High Refresh Rate",
                "Curved Display",
                "Under-display Camera",
                "Pop-up Camera",
                "Periscope Zoom",
                "Macro Lens",
                "Thermal Camera",
                "Expandable Storage",
                "Dual SIM",
                "eSIM",
            ]),
            review_titles: strings(&[
                "هاتف رائع جداً!",
                "أفضل هاتف اشتريته",
                "جودة عالية",
                "سعر مناسب",
                "أداء ممتاز",
            ]),
            review_body: "هذا الهاتف يستحق الشراء بكل تأكيد. الأداء ممتازة والكاميرا رائعة."
                .to_string(),
            article_title: "مراجعة {brand} - الميزات والعيوب".to_string(),
            article_body: "هذا الهاتف يقدم أداء قوية وكاميرا ممتازة...".to_string(),
            article_author: "محرر الموقع".to_string(),
            pros: strings(&[
                "أداء قوية",
                "كاميرا ممتازة",
                "بطارية طويلة",
                "شاشة جميلة",
                "تصميم أنيق",
                "سعر مناسب",
                "سرعة شحن عالية",
            ]),
            cons: strings(&[
                "سعر مرتفع",
                "بطارية قصيرة",
                "حرارة عالية",
                "لا يوجد شاحن",
                "وزن ثقيل",
                "لا يوجد تمديد التخزين",
            ]),
        }
    }
}

impl Catalog {
    pub const STORAGE_PICKS: SubsetRange = SubsetRange::new(1, 3);
    pub const CAMERA_FEATURE_PICKS: SubsetRange = SubsetRange::new(2, 5);
    pub const CONNECTIVITY_PICKS: SubsetRange = SubsetRange::new(4, 7);
    pub const SECURITY_PICKS: SubsetRange = SubsetRange::new(1, 3);
    pub const COLOR_PICKS: SubsetRange = SubsetRange::new(2, 5);
    pub const FEATURE_PICKS: SubsetRange = SubsetRange::new(3, 8);
    pub const PRO_PICKS: SubsetRange = SubsetRange::new(2, 4);
    pub const CON_PICKS: SubsetRange = SubsetRange::new(1, 3);

    /// Load a catalog from a YAML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a catalog from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Render the catalog as YAML.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check that every pick and sub-selection can be satisfied.
    ///
    /// Single-value pools must be non-empty. Sub-selection pools must hold at
    /// least as many distinct entries as the largest sub-selection drawn
    /// from them.
    pub fn validate(&self) -> Result<(), CatalogError> {
        non_empty("brands", &self.brands)?;
        non_empty("name_suffixes", &self.name_suffixes)?;
        non_empty("processors", &self.processors)?;
        non_empty("gpus", &self.gpus)?;
        non_empty("display_types", &self.display_types)?;
        non_empty("resolutions", &self.resolutions)?;
        non_empty("refresh_rates", &self.refresh_rates)?;
        non_empty("core_counts", &self.core_counts)?;
        non_empty("clock_speeds_ghz", &self.clock_speeds_ghz)?;
        non_empty("ram_options", &self.ram_options)?;
        non_empty("rear_megapixels", &self.rear_megapixels)?;
        non_empty("front_megapixels", &self.front_megapixels)?;
        non_empty("rear_apertures", &self.rear_apertures)?;
        non_empty("front_apertures", &self.front_apertures)?;
        non_empty("fast_charging_watts", &self.fast_charging_watts)?;
        non_empty("operating_systems", &self.operating_systems)?;
        non_empty("review_titles", &self.review_titles)?;

        subset_pool("storage_options", &self.storage_options, Self::STORAGE_PICKS)?;
        subset_pool(
            "camera_features",
            &self.camera_features,
            Self::CAMERA_FEATURE_PICKS,
        )?;
        subset_pool("connectivity", &self.connectivity, Self::CONNECTIVITY_PICKS)?;
        subset_pool("security", &self.security, Self::SECURITY_PICKS)?;
        subset_pool("colors", &self.colors, Self::COLOR_PICKS)?;
        subset_pool("features", &self.features, Self::FEATURE_PICKS)?;
        subset_pool("pros", &self.pros, Self::PRO_PICKS)?;
        subset_pool("cons", &self.cons, Self::CON_PICKS)?;

        Ok(())
    }

    /// Article headline for a brand.
    pub fn article_title_for(&self, brand: &str) -> String {
        self.article_title.replace("{brand}", brand)
    }
}

fn non_empty<T>(pool: &'static str, values: &[T]) -> Result<(), CatalogError> {
    if values.is_empty() {
        return Err(CatalogError::EmptyPool(pool));
    }
    Ok(())
}

fn subset_pool<T>(
    pool: &'static str,
    values: &[T],
    range: SubsetRange,
) -> Result<(), CatalogError>
where
    T: Eq + Hash + Display,
{
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(value) {
            return Err(CatalogError::DuplicateEntry {
                pool,
                entry: value.to_string(),
            });
        }
    }

    if values.len() < range.max {
        return Err(CatalogError::PoolTooSmall {
            pool,
            len: values.len(),
            required: range.max,
        });
    }

    Ok(())
}
