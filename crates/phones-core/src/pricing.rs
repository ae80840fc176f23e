//! Currency conversion and marketplace listings.
//!
//! All amounts derive from a single USD base price. Multipliers are held in
//! hundredths so conversions run in exact integer arithmetic and truncate
//! toward zero.

use crate::record::Shop;
use crate::urls::encode_query_value;
use serde::{Deserialize, Serialize};

/// EGP per USD, in hundredths.
pub const EGP_PER_USD_CENTS: u32 = 3000;
/// SAR per USD, in hundredths.
pub const SAR_PER_USD_CENTS: u32 = 375;
/// AED per USD, in hundredths.
pub const AED_PER_USD_CENTS: u32 = 367;

/// Multiply `amount` by `cents / 100`, truncating.
pub fn scale(amount: u32, cents: u32) -> u32 {
    let scaled = u64::from(amount) * u64::from(cents) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Currency tag attached to a shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Egp,
}

/// Price of one phone in every supported currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    pub egp: u32,
    pub usd: u32,
    pub sar: u32,
    pub aed: u32,
}

impl Prices {
    /// Derive all currency amounts from the USD base price.
    pub fn from_usd(usd: u32) -> Self {
        Self {
            egp: scale(usd, EGP_PER_USD_CENTS),
            usd,
            sar: scale(usd, SAR_PER_USD_CENTS),
            aed: scale(usd, AED_PER_USD_CENTS),
        }
    }
}

/// A fixed marketplace every phone is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marketplace {
    /// Display name of the shop
    pub name: &'static str,
    /// Price multiplier applied to the USD base price, in hundredths
    pub price_cents: u32,
    /// Currency the shop price is quoted in
    pub currency: Currency,
    /// Search URL prefix; the brand is appended
    pub search_url: &'static str,
}

/// The marketplaces, in the order listings appear on a record.
pub const MARKETPLACES: [Marketplace; 3] = [
    Marketplace {
        name: "Amazon",
        price_cents: 100,
        currency: Currency::Usd,
        search_url: "https://amazon.com/s?k=",
    },
    Marketplace {
        name: "eBay",
        price_cents: 105,
        currency: Currency::Usd,
        search_url: "https://ebay.com/sch/i.html?_nkw=",
    },
    Marketplace {
        // EGP conversion plus a 10% markup
        name: "Noon.com",
        price_cents: 3300,
        currency: Currency::Egp,
        search_url: "https://noon.com/egypt/en/search?q=",
    },
];

impl Marketplace {
    /// Price on this marketplace for the given USD base price.
    pub fn price_for(&self, usd: u32) -> u32 {
        scale(usd, self.price_cents)
    }

    /// Search URL for a brand on this marketplace.
    pub fn url_for(&self, brand: &str) -> String {
        format!("{}{}", self.search_url, encode_query_value(brand))
    }

    /// Build the listing for a phone of `brand` priced at `usd`.
    pub fn listing(&self, brand: &str, usd: u32, in_stock: bool) -> Shop {
        Shop {
            name: self.name.to_string(),
            price: self.price_for(usd),
            currency: self.currency,
            url: self.url_for(brand),
            in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_from_usd() {
        let prices = Prices::from_usd(100);
        assert_eq!(
            prices,
            Prices {
                egp: 3000,
                usd: 100,
                sar: 375,
                aed: 367,
            }
        );
    }

    #[test]
    fn test_prices_truncate() {
        // 151 * 3.75 = 566.25, 151 * 3.67 = 554.17
        let prices = Prices::from_usd(151);
        assert_eq!(prices.sar, 566);
        assert_eq!(prices.aed, 554);
        assert_eq!(prices.egp, 4530);
    }

    #[test]
    fn test_marketplace_prices() {
        let [amazon, ebay, noon] = MARKETPLACES;
        assert_eq!(amazon.price_for(999), 999);
        // 999 * 1.05 = 1048.95
        assert_eq!(ebay.price_for(999), 1048);
        assert_eq!(noon.price_for(999), 32967);
        assert_eq!(noon.currency, Currency::Egp);
    }

    #[test]
    fn test_listing_url_encodes_spaces() {
        let shop = MARKETPLACES[0].listing("Google Pixel", 500, true);
        assert_eq!(shop.url, "https://amazon.com/s?k=Google%20Pixel");
        assert_eq!(shop.name, "Amazon");
        assert!(shop.in_stock);
    }

    #[test]
    fn test_currency_serialization() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(serde_json::to_string(&Currency::Egp).unwrap(), "\"EGP\"");
    }
}
