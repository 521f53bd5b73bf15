//! Property tests for the similarity model, layout, and link extraction.

use std::f64::consts::TAU;

use hobbynet_core::roster::{ANIME, GAMES, MANGA};
use hobbynet_core::{
    similarity, AttributeProfile, Category, EatingHabit, Entity, Food, Lifestyle, OutdoorIndoor,
    Viewport,
};
use hobbynet_layout::{compute_layout, extract_links, LayoutOptions, LinkKey};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

fn profile() -> impl Strategy<Value = AttributeProfile> {
    (
        subsequence(GAMES.to_vec(), 0..=3),
        subsequence(ANIME.to_vec(), 0..=3),
        subsequence(MANGA.to_vec(), 0..=3),
        subsequence(Food::VALUES.to_vec(), 0..=4),
        select(Lifestyle::VALUES),
        select(OutdoorIndoor::VALUES),
        select(EatingHabit::VALUES),
    )
        .prop_map(|(games, anime, manga, foods, lifestyle, outdoor, eating)| {
            AttributeProfile::new(lifestyle, outdoor, eating)
                .with_games(games)
                .with_anime(anime)
                .with_manga(manga)
                .with_foods(foods)
        })
}

fn entities(max: usize) -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec(profile(), 0..max).prop_map(|profiles| {
        profiles
            .into_iter()
            .enumerate()
            .map(|(i, p)| Entity::new(i as u64 + 1, format!("person-{i}"), p))
            .collect()
    })
}

fn category() -> impl Strategy<Value = Category> {
    select(Category::ALL.to_vec())
}

fn viewport() -> impl Strategy<Value = Viewport> {
    (100.0..2000.0f64, 100.0..2000.0f64).prop_map(|(w, h)| Viewport::new(w, h).unwrap())
}

proptest! {
    #[test]
    fn similarity_is_bounded_and_symmetric(a in profile(), b in profile(), c in category()) {
        let ab = similarity(&a, &b, c);
        let ba = similarity(&b, &a, c);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn identical_profiles_score_one_on_nonempty_fields(a in profile(), c in category()) {
        let score = similarity(&a, &a, c);
        let empty = match c {
            Category::Games => a.games.is_empty(),
            Category::Anime => a.anime.is_empty(),
            Category::Manga => a.manga.is_empty(),
            Category::Foods => a.foods.is_empty(),
            Category::All => a.games.is_empty() || a.anime.is_empty() || a.manga.is_empty() || a.foods.is_empty(),
            _ => false,
        };
        if !empty {
            prop_assert_eq!(score, 1.0);
        }
    }

    #[test]
    fn layout_is_depth_sorted(es in entities(30), c in category(), angle in 0.0..TAU, v in viewport()) {
        let nodes = compute_layout(&es, c, angle, v, &LayoutOptions::default());
        prop_assert_eq!(nodes.len(), es.len());
        for pair in nodes.windows(2) {
            prop_assert!(pair[0].depth >= pair[1].depth);
            if pair[0].depth == pair[1].depth {
                prop_assert!(pair[0].input_index < pair[1].input_index);
            }
        }
    }

    #[test]
    fn layout_is_deterministic(es in entities(30), c in category(), angle in 0.0..TAU, v in viewport()) {
        let options = LayoutOptions::default();
        let first = compute_layout(&es, c, angle, v, &options);
        let second = compute_layout(&es, c, angle, v, &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_rotation_keeps_base_positions(es in entities(30), c in category(), v in viewport()) {
        for node in compute_layout(&es, c, 0.0, v, &LayoutOptions::default()) {
            prop_assert_eq!(node.position, node.base);
        }
    }

    #[test]
    fn full_turn_matches_zero_rotation(es in entities(30), c in category(), v in viewport()) {
        let options = LayoutOptions::default();
        let still = compute_layout(&es, c, 0.0, v, &options);
        let turned = compute_layout(&es, c, TAU, v, &options);
        for node in &still {
            let twin = turned.iter().find(|t| t.id() == node.id()).unwrap();
            prop_assert!(twin.position.distance(node.position) < 1e-9);
        }
    }

    #[test]
    fn rank_zero_sits_at_origin(es in entities(30), c in category(), angle in 0.0..TAU, v in viewport()) {
        let nodes = compute_layout(&es, c, angle, v, &LayoutOptions::default());
        if let Some(center) = nodes.iter().find(|n| n.rank == 0) {
            prop_assert_eq!(center.base.x, 0.0);
            prop_assert_eq!(center.base.y, 0.0);
            prop_assert_eq!(center.position.length(), 0.0);
        }
    }

    #[test]
    fn links_are_sparse_and_well_formed(es in entities(30), c in category(), angle in 0.0..TAU) {
        let v = Viewport::new(800.0, 600.0).unwrap();
        let nodes = compute_layout(&es, c, angle, v, &LayoutOptions::default());
        let links = extract_links(&nodes, c);
        let n = nodes.len();
        prop_assert!(links.len() <= n * n.saturating_sub(1) / 2);

        let mut keys = std::collections::HashSet::new();
        for link in &links {
            prop_assert!(link.weight > 0.0 && link.weight <= 1.0);
            prop_assert_ne!(link.source, link.target);
            prop_assert!(keys.insert(LinkKey::new(link.source, link.target)));
            prop_assert!(nodes.iter().any(|p| p.id() == link.source));
            prop_assert!(nodes.iter().any(|p| p.id() == link.target));
        }
    }
}
