//! Property tests for the catalog query engine.

use chrono::{Duration, TimeZone, Utc};
use ezstilius_core::listing::{RevealWindow, reveal};
use ezstilius_core::query::{FilterState, SortMode, apply};
use ezstilius_core::types::{ColorTag, Handle, Price, Product, ProductId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

const CATEGORIES: [&str; 4] = ["clothing", "sewing-supplies", "accessories", "interior-gifts"];
const COLORS: [&str; 7] = ["cream", "olive", "pink", "sage", "dusty-rose", "sand", "lavender"];

fn arb_product() -> impl Strategy<Value = Product> {
    (
        0u32..10_000,
        prop::sample::select(CATEGORIES.to_vec()),
        0u32..5_000,
        0i64..30,
        prop::sample::subsequence(COLORS.to_vec(), 0..3),
    )
        .prop_map(|(id, category, cents, day, colors)| Product {
            id: ProductId::parse(&format!("prod_{id}")).unwrap(),
            handle: Handle::parse(&format!("item-{id}")).unwrap(),
            title: format!("Item {id}"),
            name_key: format!("products.item{id}"),
            price: Price::new(Decimal::new(cents as i64, 2)).unwrap(),
            original_price: None,
            category: Handle::parse(category).unwrap(),
            is_new: false,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(day),
            colors: colors.into_iter().map(|c| ColorTag::parse(c).unwrap()).collect(),
            sizes: vec![],
            description_key: None,
            details_key: None,
            image_count: 0,
        })
}

fn arb_sort() -> impl Strategy<Value = Option<SortMode>> {
    prop::option::of(prop::sample::select(SortMode::ALL.to_vec()))
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::subsequence(CATEGORIES.to_vec(), 0..=4),
        prop::sample::subsequence(COLORS.to_vec(), 0..=3),
        arb_sort(),
    )
        .prop_map(|(categories, colors, sort)| FilterState {
            categories: categories.into_iter().map(|c| Handle::parse(c).unwrap()).collect(),
            colors: colors.into_iter().map(|c| ColorTag::parse(c).unwrap()).collect(),
            sort,
            lock: None,
        })
}

proptest! {
    #[test]
    fn apply_is_pure(products in prop::collection::vec(arb_product(), 0..40), state in arb_state()) {
        let before = products.clone();

        let first: Vec<Product> = apply(&products, &state).into_iter().cloned().collect();
        let second: Vec<Product> = apply(&products, &state).into_iter().cloned().collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(products, before);
    }

    #[test]
    fn lock_overrides_user_categories(
        products in prop::collection::vec(arb_product(), 0..40),
        state in arb_state(),
        lock in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let lock = Handle::parse(lock).unwrap();
        let mut with_categories = state.clone();
        with_categories.lock = Some(lock.clone());
        let mut without_categories = state;
        without_categories.lock = Some(lock.clone());
        without_categories.categories = BTreeSet::new();

        let a = apply(&products, &with_categories);
        let b = apply(&products, &without_categories);

        prop_assert_eq!(&a, &b);
        prop_assert!(a.iter().all(|p| p.category == lock));
    }

    #[test]
    fn price_sorts_are_stable(products in prop::collection::vec(arb_product(), 0..40)) {
        let state = FilterState { sort: Some(SortMode::PriceAsc), ..FilterState::default() };

        let sorted = apply(&products, &state);

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
            if pair[0].price == pair[1].price {
                let i = products.iter().position(|p| std::ptr::eq(p, pair[0])).unwrap();
                let j = products.iter().position(|p| std::ptr::eq(p, pair[1])).unwrap();
                prop_assert!(i < j);
            }
        }
    }

    #[test]
    fn query_round_trip(state in arb_state()) {
        let decoded = FilterState::from_query(&state.to_query(), None);

        prop_assert_eq!(decoded, state);
    }

    #[test]
    fn reveal_is_monotonic_and_bounded(total in 0usize..200, presses in 0usize..60) {
        let mut window = RevealWindow::new(12, 4);
        let mut last = window.visible(total);

        for _ in 0..presses {
            window.load_more(total);
            let now = window.visible(total);
            prop_assert!(now >= last);
            prop_assert!(now <= total);
            prop_assert_eq!(now, reveal(total, last, 4));
            last = now;
        }
    }
}
