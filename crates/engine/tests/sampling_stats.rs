//! Statistical properties of the sampler and composer. These run many seeded
//! trials and check loose tolerances rather than exact counts.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use exam_core::model::{Category, CategoryQuotas, ItemDraft, ItemId, ItemPool};
use exam_engine::{compose_with_rng, sample_with_rng};

fn build_item(id: &str, category: Category) -> ItemDraft {
    ItemDraft {
        id: ItemId::new(id),
        category,
        prompt: format!("Prompt {id}"),
        options: vec!["A".to_string(), "B".to_string()],
        correct_index: 0,
        explanation: String::new(),
        difficulty: None,
        context: None,
    }
}

fn build_signs_pool(n: usize) -> ItemPool {
    let drafts = (0..n)
        .map(|i| build_item(&format!("s-{i}"), Category::Signs))
        .collect();
    ItemPool::from_drafts(drafts).unwrap()
}

#[test]
fn every_item_is_drawn_with_roughly_equal_frequency() {
    let pool = build_signs_pool(10);
    let trials = 2_000;
    let count = 5;
    let mut rng = StdRng::seed_from_u64(0xFEED);

    let mut seen: HashMap<ItemId, usize> = HashMap::new();
    for _ in 0..trials {
        let drawn = sample_with_rng(&pool, Category::Signs, count, &mut rng).unwrap();
        for item in drawn {
            *seen.entry(item.id().clone()).or_default() += 1;
        }
    }

    // Each of the 10 items should land in about half of the 5-of-10 draws.
    // 40%..60% is far wider than the sampling noise at 2000 trials.
    let expected = trials * count / 10;
    for (id, hits) in &seen {
        let low = expected * 4 / 5;
        let high = expected * 6 / 5;
        assert!(
            (low..=high).contains(hits),
            "item {id} drawn {hits} times, expected about {expected}"
        );
    }
    assert_eq!(seen.len(), 10, "some item was never drawn");
}

#[test]
fn first_position_is_not_biased_toward_pool_order() {
    // A comparator-based shuffle skews which element ends up first; an
    // unbiased shuffle puts every item there about equally often.
    let pool = build_signs_pool(8);
    let trials = 4_000;
    let mut rng = StdRng::seed_from_u64(0xBEEF);

    let mut first: HashMap<ItemId, usize> = HashMap::new();
    for _ in 0..trials {
        let drawn = sample_with_rng(&pool, Category::Signs, 3, &mut rng).unwrap();
        *first.entry(drawn[0].id().clone()).or_default() += 1;
    }

    let expected = trials / 8;
    for (id, hits) in &first {
        assert!(
            (expected * 3 / 5..=expected * 7 / 5).contains(hits),
            "item {id} led {hits} draws, expected about {expected}"
        );
    }
}

#[test]
fn composed_length_matches_quota_sum_across_shapes() {
    let mut drafts = Vec::new();
    for i in 0..12 {
        drafts.push(build_item(&format!("c-{i}"), Category::Controls));
        drafts.push(build_item(&format!("s-{i}"), Category::Signs));
        drafts.push(build_item(&format!("r-{i}"), Category::Rules));
    }
    let pool = ItemPool::from_drafts(drafts).unwrap();
    let mut rng = StdRng::seed_from_u64(0xCAFE);

    let shapes = [
        (1, 1, 1),
        (2, 5, 5),
        (8, 12, 12),
        (12, 12, 12),
    ];
    for (controls, signs, rules) in shapes {
        let quotas = CategoryQuotas::new()
            .with(Category::Controls, controls)
            .with(Category::Signs, signs)
            .with(Category::Rules, rules);
        let items = compose_with_rng(&pool, &quotas, &mut rng).unwrap();
        assert_eq!(items.len(), controls + signs + rules);
    }
}

#[test]
fn category_order_is_not_grouped_after_composition() {
    // 10 controls + 10 signs arranged at random average about 11 category
    // runs; strict grouping would give exactly 2. A low average over many
    // compositions would mean the final shuffle is missing or broken.
    let mut drafts = Vec::new();
    for i in 0..10 {
        drafts.push(build_item(&format!("c-{i}"), Category::Controls));
        drafts.push(build_item(&format!("s-{i}"), Category::Signs));
    }
    let pool = ItemPool::from_drafts(drafts).unwrap();
    let quotas = CategoryQuotas::new()
        .with(Category::Controls, 10)
        .with(Category::Signs, 10);

    let trials = 300;
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    let mut total_runs = 0usize;
    for _ in 0..trials {
        let items = compose_with_rng(&pool, &quotas, &mut rng).unwrap();
        let runs = 1 + items
            .windows(2)
            .filter(|w| w[0].category() != w[1].category())
            .count();
        total_runs += runs;
    }

    let average = total_runs as f64 / trials as f64;
    assert!(
        average > 8.0,
        "average category run count {average:.2} suggests grouped output"
    );
}

#[test]
fn no_draw_ever_repeats_an_item() {
    let pool = build_signs_pool(9);
    let mut rng = StdRng::seed_from_u64(0xABCD);

    for count in 1..=9 {
        for _ in 0..50 {
            let drawn = sample_with_rng(&pool, Category::Signs, count, &mut rng).unwrap();
            let mut ids: Vec<_> = drawn.iter().map(|i| i.id().clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), count);
        }
    }
}
