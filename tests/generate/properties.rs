//! Record-level invariants over a generated collection.

use super::{seeded_generator, today};
use phones_core::{Catalog, Category, PhoneRecord};
use std::collections::HashSet;

const COUNT: u64 = 2000;

fn phones() -> Vec<PhoneRecord> {
    seeded_generator(Catalog::default()).generate(COUNT)
}

fn is_distinct<T: std::hash::Hash + Eq>(items: &[T]) -> bool {
    items.iter().collect::<HashSet<_>>().len() == items.len()
}

#[test]
fn test_count_invariant() {
    for count in [0, 1, 2, 499, 500, 501] {
        let phones = seeded_generator(Catalog::default()).generate(count);
        assert_eq!(phones.len() as u64, count);
    }
}

#[test]
fn test_ids_pairwise_distinct() {
    let phones = phones();
    let ids: HashSet<&str> = phones.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), phones.len());
}

#[test]
fn test_category_matches_price() {
    for phone in phones() {
        let usd = phone.prices.usd;
        let expected = if usd < 250 {
            Category::Budget
        } else if usd < 600 {
            Category::MidRange
        } else if usd < 1000 {
            Category::Premium
        } else {
            Category::Flagship
        };
        assert_eq!(phone.category, expected, "phone {} priced {usd}", phone.id);
    }
}

#[test]
fn test_every_category_occurs() {
    let categories: HashSet<Category> = phones().iter().map(|p| p.category).collect();
    assert_eq!(categories.len(), 4);
}

#[test]
fn test_currency_conversions() {
    for phone in phones() {
        let usd = phone.prices.usd;
        assert!(usd > 0);
        assert_eq!(phone.prices.egp, usd * 30);
        assert_eq!(phone.prices.sar, (usd * 375) / 100);
        assert_eq!(phone.prices.aed, (usd * 367) / 100);
        assert!(phone.prices.sar > 0 && phone.prices.aed > 0);
        assert!(phone.shops.iter().all(|shop| shop.price > 0));
    }
}

#[test]
fn test_sub_selection_bounds() {
    let catalog = Catalog::default();
    for phone in phones() {
        assert!((1..=3).contains(&phone.specs.storage.len()));
        assert!((3..=8).contains(&phone.features.len()));
        assert!((2..=4).contains(&phone.pros.len()));
        assert!((1..=3).contains(&phone.cons.len()));

        assert!(is_distinct(&phone.specs.storage));
        assert!(is_distinct(&phone.features));
        assert!(is_distinct(&phone.pros));
        assert!(is_distinct(&phone.cons));
        assert!(is_distinct(&phone.specs.colors));
        assert!(is_distinct(&phone.specs.connectivity));

        assert!(phone
            .specs
            .storage
            .iter()
            .all(|s| catalog.storage_options.contains(s)));
        assert!(phone.features.iter().all(|f| catalog.features.contains(f)));
    }
}

#[test]
fn test_dates_precede_reference_date() {
    for phone in phones() {
        assert!(phone.release_date < today());
        assert!(phone.reviews.iter().all(|r| r.date < today()));
        assert!(phone.articles.iter().all(|a| a.date < today()));
    }
}

#[test]
fn test_same_seed_same_records() {
    let phones1 = seeded_generator(Catalog::default()).generate(50);
    let phones2 = seeded_generator(Catalog::default()).generate(50);
    assert_eq!(phones1, phones2);
}

#[test]
fn test_custom_catalog_fixture() {
    let catalog = Catalog::from_file("tests/fixtures/small_catalog.yaml").unwrap();
    let phones = seeded_generator(catalog).generate(200);

    for phone in &phones {
        assert!(phone.brand == "Google Pixel" || phone.brand == "Nothing");
        assert!(phone.id.starts_with("google-pixel-") || phone.id.starts_with("nothing-"));
        assert_eq!(phone.specs.os, "Android 15");
        assert!((2..=5).contains(&phone.specs.colors.len()));
    }
}
