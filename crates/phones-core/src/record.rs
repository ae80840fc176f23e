//! The phone record and its nested groups.
//!
//! Field order in each struct is the order fields appear in the serialized
//! document, and serde names follow the camelCase convention of the
//! consuming catalog application.

use crate::category::Category;
use crate::pricing::{Currency, Prices};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthesized phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub image: String,
    pub release_date: NaiveDate,
    pub category: Category,
    pub specs: Specs,
    pub prices: Prices,
    pub shops: Vec<Shop>,
    pub ratings: Ratings,
    pub reviews: Vec<Review>,
    pub articles: Vec<Article>,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Hardware and software specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    pub display: Display,
    pub processor: Processor,
    /// RAM in GB
    pub ram: u32,
    /// Storage variants in GB
    pub storage: Vec<u32>,
    pub camera: Camera,
    pub battery: Battery,
    pub os: String,
    pub dimensions: Dimensions,
    pub connectivity: Vec<String>,
    pub security: Vec<String>,
    pub colors: Vec<String>,
}

/// Screen specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Diagonal in inches
    pub size: f64,
    pub resolution: String,
    /// Panel type, e.g. AMOLED
    #[serde(rename = "type")]
    pub panel_type: String,
    /// Hz
    pub refresh_rate: u32,
    /// Nits
    pub brightness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processor {
    pub name: String,
    pub cores: u32,
    /// Clock speed, e.g. "3.0 GHz"
    pub speed: String,
    pub gpu: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub rear: RearCamera,
    pub front: FrontCamera,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RearCamera {
    pub megapixels: u32,
    pub aperture: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontCamera {
    pub megapixels: u32,
    pub aperture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    /// mAh
    pub capacity: u32,
    /// Charger wattage, e.g. "65W"
    pub fast_charging: String,
    pub wireless: bool,
}

/// Physical size in millimetres and weight in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub weight: u32,
}

/// A marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub name: String,
    pub price: u32,
    pub currency: Currency,
    pub url: String,
    pub in_stock: bool,
}

/// Editorial scores out of 10, plus the number of users who rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub overall: f64,
    pub display: f64,
    pub performance: f64,
    pub camera: f64,
    pub battery: f64,
    pub design: f64,
    pub value: f64,
    pub user_count: u32,
}

/// A user review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: u32,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    /// Number of readers who marked the review helpful
    pub helpful: u32,
}

/// An editorial article about the phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub image: String,
}

impl PhoneRecord {
    /// Whether any marketplace lists this phone as in stock.
    pub fn is_available(&self) -> bool {
        self.shops.iter().any(|shop| shop.in_stock)
    }
}
