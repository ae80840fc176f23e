//! Assembles one phone record from the catalog pools.
//!
//! Each nested group of the record has its own builder. Only the USD base
//! price is shared between groups: category, currency prices and shop
//! prices are all derived from it.

use crate::generators::date::days_before;
use crate::generators::numeric::float_tenths;
use crate::generators::pick;
use crate::generators::sample::sample_subset;
use chrono::NaiveDate;
use phones_core::{
    phone_id, placeholder_image, Article, Battery, Camera, Catalog, Category, Dimensions,
    Display, FrontCamera, PhoneRecord, Prices, Processor, Ratings, RearCamera, Review, Specs,
    MARKETPLACES,
};
use rand::Rng;
use std::ops::RangeInclusive;

/// USD base price bounds.
pub const USD_PRICE_RANGE: RangeInclusive<u32> = 150..=1500;
/// How far back release dates reach.
pub const RELEASE_DAYS_AGO: RangeInclusive<u64> = 1..=1095;
/// How far back review dates reach.
pub const REVIEW_DAYS_AGO: RangeInclusive<u64> = 1..=365;
/// How far back article dates reach.
pub const ARTICLE_DAYS_AGO: RangeInclusive<u64> = 1..=90;
/// Reviews per phone.
pub const REVIEW_COUNT: RangeInclusive<usize> = 1..=5;
/// Articles per phone.
pub const ARTICLE_COUNT: RangeInclusive<usize> = 0..=2;

/// Assemble the phone at 1-based `index`.
///
/// The catalog must have passed [`Catalog::validate`]; with a valid catalog
/// this never fails.
pub fn assemble_phone<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    index: u64,
    today: NaiveDate,
) -> PhoneRecord {
    let brand = pick(rng, &catalog.brands);
    let usd = rng.gen_range(USD_PRICE_RANGE);

    PhoneRecord {
        id: phone_id(&brand, index),
        name: phone_name(rng, catalog, &brand),
        model: format!("Model-{index}"),
        image: placeholder_image(400, 600, &brand),
        release_date: days_before(rng, today, RELEASE_DAYS_AGO),
        category: Category::from_usd_price(usd),
        specs: specs(rng, catalog),
        prices: Prices::from_usd(usd),
        shops: MARKETPLACES
            .iter()
            .map(|marketplace| marketplace.listing(&brand, usd, rng.gen_bool(0.5)))
            .collect(),
        ratings: ratings(rng),
        reviews: reviews(rng, catalog, today),
        articles: articles(rng, catalog, &brand, today),
        features: sample_subset(rng, &catalog.features, Catalog::FEATURE_PICKS),
        pros: sample_subset(rng, &catalog.pros, Catalog::PRO_PICKS),
        cons: sample_subset(rng, &catalog.cons, Catalog::CON_PICKS),
        brand,
    }
}

fn phone_name<R: Rng>(rng: &mut R, catalog: &Catalog, brand: &str) -> String {
    let suffix = pick(rng, &catalog.name_suffixes);
    let number: u32 = rng.gen_range(10..=15);
    if suffix.is_empty() {
        format!("{brand} {number}")
    } else {
        format!("{brand} {suffix} {number}")
    }
}

fn specs<R: Rng>(rng: &mut R, catalog: &Catalog) -> Specs {
    Specs {
        display: display(rng, catalog),
        processor: processor(rng, catalog),
        ram: pick(rng, &catalog.ram_options),
        storage: sample_subset(rng, &catalog.storage_options, Catalog::STORAGE_PICKS),
        camera: camera(rng, catalog),
        battery: battery(rng, catalog),
        os: pick(rng, &catalog.operating_systems),
        dimensions: dimensions(rng),
        connectivity: sample_subset(rng, &catalog.connectivity, Catalog::CONNECTIVITY_PICKS),
        security: sample_subset(rng, &catalog.security, Catalog::SECURITY_PICKS),
        colors: sample_subset(rng, &catalog.colors, Catalog::COLOR_PICKS),
    }
}

fn display<R: Rng>(rng: &mut R, catalog: &Catalog) -> Display {
    Display {
        size: float_tenths(rng, 5.0, 7.2),
        resolution: pick(rng, &catalog.resolutions),
        panel_type: pick(rng, &catalog.display_types),
        refresh_rate: pick(rng, &catalog.refresh_rates),
        brightness: rng.gen_range(400..=2000),
    }
}

fn processor<R: Rng>(rng: &mut R, catalog: &Catalog) -> Processor {
    Processor {
        name: pick(rng, &catalog.processors),
        cores: pick(rng, &catalog.core_counts),
        speed: format!("{:.1} GHz", pick(rng, &catalog.clock_speeds_ghz)),
        gpu: pick(rng, &catalog.gpus),
    }
}

fn camera<R: Rng>(rng: &mut R, catalog: &Catalog) -> Camera {
    Camera {
        rear: RearCamera {
            megapixels: pick(rng, &catalog.rear_megapixels),
            aperture: format!("f/{:.1}", pick(rng, &catalog.rear_apertures)),
            features: sample_subset(
                rng,
                &catalog.camera_features,
                Catalog::CAMERA_FEATURE_PICKS,
            ),
        },
        front: FrontCamera {
            megapixels: pick(rng, &catalog.front_megapixels),
            aperture: format!("f/{:.1}", pick(rng, &catalog.front_apertures)),
        },
    }
}

fn battery<R: Rng>(rng: &mut R, catalog: &Catalog) -> Battery {
    Battery {
        capacity: rng.gen_range(3500..=6000),
        fast_charging: format!("{}W", pick(rng, &catalog.fast_charging_watts)),
        wireless: rng.gen_bool(0.5),
    }
}

fn dimensions<R: Rng>(rng: &mut R) -> Dimensions {
    Dimensions {
        height: float_tenths(rng, 150.0, 170.0),
        width: float_tenths(rng, 70.0, 80.0),
        depth: float_tenths(rng, 7.0, 10.0),
        weight: rng.gen_range(160..=250),
    }
}

fn ratings<R: Rng>(rng: &mut R) -> Ratings {
    Ratings {
        overall: float_tenths(rng, 6.5, 9.8),
        display: float_tenths(rng, 7.0, 9.9),
        performance: float_tenths(rng, 7.0, 9.9),
        camera: float_tenths(rng, 7.0, 9.9),
        battery: float_tenths(rng, 6.5, 9.5),
        design: float_tenths(rng, 7.0, 9.9),
        value: float_tenths(rng, 6.5, 9.5),
        user_count: rng.gen_range(100..=50_000),
    }
}

fn reviews<R: Rng>(rng: &mut R, catalog: &Catalog, today: NaiveDate) -> Vec<Review> {
    let count = rng.gen_range(REVIEW_COUNT);
    (0..count)
        .map(|i| Review {
            id: format!("review-{i}"),
            author: format!("User {}", rng.gen_range(1000..=9999)),
            rating: rng.gen_range(6..=10),
            title: pick(rng, &catalog.review_titles),
            content: catalog.review_body.clone(),
            date: days_before(rng, today, REVIEW_DAYS_AGO),
            helpful: rng.gen_range(0..=500),
        })
        .collect()
}

fn articles<R: Rng>(
    rng: &mut R,
    catalog: &Catalog,
    brand: &str,
    today: NaiveDate,
) -> Vec<Article> {
    let count = rng.gen_range(ARTICLE_COUNT);
    (0..count)
        .map(|i| Article {
            id: format!("article-{i}"),
            title: catalog.article_title_for(brand),
            content: catalog.article_body.clone(),
            author: catalog.article_author.clone(),
            date: days_before(rng, today, ARTICLE_DAYS_AGO),
            image: placeholder_image(800, 400, brand),
        })
        .collect()
}
