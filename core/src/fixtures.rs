//! Sample catalog shared by unit tests.

use crate::types::{ColorTag, Handle, Price, Product, ProductId};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) fn handle(s: &str) -> Handle {
    Handle::parse(s).unwrap()
}

pub(crate) fn color(s: &str) -> ColorTag {
    ColorTag::parse(s).unwrap()
}

pub(crate) fn price(s: &str) -> Price {
    Price::new(Decimal::from_str(s).unwrap()).unwrap()
}

/// Builds a product created `day` days into 2025.
pub(crate) fn item(
    id: u32,
    slug: &str,
    title: &str,
    category: &str,
    amount: &str,
    day: i64,
    colors: &[&str],
) -> Product {
    let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    Product {
        id: ProductId::parse(&format!("prod_{id}")).unwrap(),
        handle: handle(slug),
        title: title.to_string(),
        name_key: format!("products.{slug}"),
        price: price(amount),
        original_price: None,
        category: handle(category),
        is_new: day > 12,
        created_at: epoch + Duration::days(day),
        colors: colors.iter().map(|c| color(c)).collect(),
        sizes: vec![],
        description_key: None,
        details_key: None,
        image_count: 1,
    }
}

/// Sixteen products across the four shop categories.
pub(crate) fn shop() -> Vec<Product> {
    vec![
        item(1, "autumn-scarf", "Autumn Scarf", "accessories", "39.00", 10, &["olive", "cream"]),
        item(2, "lace-tablecloth", "Lace Tablecloth", "interior-gifts", "59.00", 3, &["cream"]),
        item(3, "baby-cardigan", "Baby Cardigan", "clothing", "45.00", 12, &["pink", "sage"]),
        item(4, "crochet-hooks-set", "Crochet Hooks Set", "sewing-supplies", "12.99", 1, &[]),
        item(5, "knitted-dress", "Knitted Dress", "clothing", "76.00", 15, &["olive"]),
        item(6, "linen-napkins", "Linen Napkins", "interior-gifts", "17.00", 6, &["sand"]),
        item(7, "bow-tie", "Bow Tie", "accessories", "9.99", 8, &["olive"]),
        item(8, "summer-shawl", "Summer Shawl", "accessories", "64.00", 14, &["lavender"]),
        item(9, "wool-beret", "Wool Beret", "accessories", "24.00", 2, &["dusty-rose"]),
        item(10, "linen-apron", "Linen Apron", "clothing", "32.00", 4, &["sand", "olive"]),
        item(11, "knitting-needles", "Knitting Needles", "sewing-supplies", "14.50", 9, &[]),
        item(12, "embroidery-hoop", "Embroidery Hoop", "sewing-supplies", "8.00", 11, &["cream"]),
        item(13, "cotton-thread-set", "Cotton Thread Set", "sewing-supplies", "19.00", 5, &["pink", "sage", "lavender"]),
        item(14, "candle-cozy", "Candle Cozy", "interior-gifts", "22.00", 13, &["sage"]),
        item(15, "crochet-basket", "Crochet Basket", "interior-gifts", "39.00", 7, &["olive"]),
        item(16, "silk-blouse", "Silk Blouse", "clothing", "68.00", 16, &["cream"]),
    ]
}

pub(crate) fn handles<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
    products.into_iter().map(|p| p.handle.as_str()).collect()
}
