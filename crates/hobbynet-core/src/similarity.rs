//! Pairwise similarity between attribute profiles.
//!
//! Scores are always in `[0, 1]`:
//! - a multi-valued field scores `|a ∩ b| / max(|a|, |b|)`; note the
//!   denominator is the larger cardinality, not the size of the union
//! - a single-valued field scores 1 on equality and 0 otherwise
//! - [`Category::All`] averages the seven field scores
//!
//! Two empty tag sets have no extractable relation and score 0.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::category::Category;
use crate::profile::AttributeProfile;

/// Similarity of two profiles under `category`.
///
/// Pure and symmetric: `similarity(a, b, c) == similarity(b, a, c)` exactly.
pub fn similarity(a: &AttributeProfile, b: &AttributeProfile, category: Category) -> f64 {
    match category {
        Category::All => aggregate(a, b),
        Category::Games => tag_overlap(&a.games, &b.games),
        Category::Anime => tag_overlap(&a.anime, &b.anime),
        Category::Manga => tag_overlap(&a.manga, &b.manga),
        Category::Foods => tag_overlap(&a.foods, &b.foods),
        Category::Lifestyle => exact_match(a.lifestyle == b.lifestyle),
        Category::OutdoorIndoor => exact_match(a.outdoor_indoor == b.outdoor_indoor),
        Category::EatingHabits => exact_match(a.eating_habits == b.eating_habits),
    }
}

fn aggregate(a: &AttributeProfile, b: &AttributeProfile) -> f64 {
    let total: f64 = Category::FIELDS
        .iter()
        .map(|&field| similarity(a, b, field))
        .sum();
    total / Category::FIELD_COUNT as f64
}

/// Overlap ratio of two tag sets, using the larger cardinality as denominator.
pub fn tag_overlap<T: Hash + Eq>(a: &IndexSet<T>, b: &IndexSet<T>) -> f64 {
    let max = a.len().max(b.len());
    if max == 0 {
        return 0.0;
    }
    let common = a.iter().filter(|tag| b.contains(*tag)).count();
    common as f64 / max as f64
}

#[inline]
fn exact_match(equal: bool) -> f64 {
    if equal {
        1.0
    } else {
        0.0
    }
}

/// One concrete value two profiles have in common.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SharedAttribute {
    /// The field the value belongs to (never [`Category::All`]).
    pub field: Category,
    pub value: String,
}

/// Values shared by `a` and `b` under `category`.
///
/// Tags are reported in `a`'s order; for [`Category::All`] every field is
/// visited in [`Category::FIELDS`] order.
pub fn shared_attributes(
    a: &AttributeProfile,
    b: &AttributeProfile,
    category: Category,
) -> Vec<SharedAttribute> {
    let mut shared = Vec::new();
    match category {
        Category::All => {
            for field in Category::FIELDS {
                collect_shared(a, b, field, &mut shared);
            }
        }
        field => collect_shared(a, b, field, &mut shared),
    }
    shared
}

fn collect_shared(
    a: &AttributeProfile,
    b: &AttributeProfile,
    field: Category,
    out: &mut Vec<SharedAttribute>,
) {
    let mut push = |value: &str| {
        out.push(SharedAttribute {
            field,
            value: value.to_string(),
        })
    };

    match field {
        Category::All => {}
        Category::Games => a.games.intersection(&b.games).for_each(|t| push(t)),
        Category::Anime => a.anime.intersection(&b.anime).for_each(|t| push(t)),
        Category::Manga => a.manga.intersection(&b.manga).for_each(|t| push(t)),
        Category::Foods => a.foods.intersection(&b.foods).for_each(|f| push(f.label())),
        Category::Lifestyle if a.lifestyle == b.lifestyle => push(a.lifestyle.label()),
        Category::OutdoorIndoor if a.outdoor_indoor == b.outdoor_indoor => {
            push(a.outdoor_indoor.label())
        }
        Category::EatingHabits if a.eating_habits == b.eating_habits => {
            push(a.eating_habits.label())
        }
        Category::Lifestyle | Category::OutdoorIndoor | Category::EatingHabits => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EatingHabit, Food, Lifestyle, OutdoorIndoor};

    fn base() -> AttributeProfile {
        AttributeProfile::new(Lifestyle::EarlyBird, OutdoorIndoor::Outdoor, EatingHabit::Moderate)
    }

    #[test]
    fn test_foods_use_max_cardinality() {
        let a = base().with_foods([Food::Japanese, Food::Chinese]);
        let b = base().with_foods([Food::Japanese]);
        assert_eq!(similarity(&a, &b, Category::Foods), 0.5);
        assert_eq!(similarity(&b, &a, Category::Foods), 0.5);
    }

    #[test]
    fn test_not_jaccard() {
        // Jaccard would give 1/3 here.
        let a = base().with_games(["原神", "FF14"]);
        let b = base().with_games(["原神", "モンハン"]);
        assert_eq!(similarity(&a, &b, Category::Games), 0.5);
    }

    #[test]
    fn test_empty_sets_score_zero() {
        let a = base();
        let b = base();
        assert_eq!(similarity(&a, &b, Category::Manga), 0.0);

        let c = base().with_manga(["キングダム"]);
        assert_eq!(similarity(&a, &c, Category::Manga), 0.0);
    }

    #[test]
    fn test_single_valued_fields() {
        let a = base();
        let mut b = base();
        assert_eq!(similarity(&a, &b, Category::Lifestyle), 1.0);
        b.lifestyle = Lifestyle::NightOwl;
        assert_eq!(similarity(&a, &b, Category::Lifestyle), 0.0);
        assert_eq!(similarity(&a, &b, Category::OutdoorIndoor), 1.0);
    }

    #[test]
    fn test_identical_profiles_score_one_under_all() {
        let a = base()
            .with_games(["ゼルダ"])
            .with_anime(["推しの子", "鬼滅の刃"])
            .with_manga(["ワンピース"])
            .with_foods([Food::Curry, Food::Sweets]);
        assert_eq!(similarity(&a, &a.clone(), Category::All), 1.0);
        for field in Category::FIELDS {
            assert_eq!(similarity(&a, &a, field), 1.0, "{field}");
        }
    }

    #[test]
    fn test_aggregate_averages_seven_fields() {
        let a = base().with_games(["ゼルダ"]);
        let mut b = base().with_games(["ゼルダ"]);
        b.eating_habits = EatingHabit::Hearty;
        // games 1 + lifestyle 1 + outdoorIndoor 1, everything else 0
        assert_eq!(similarity(&a, &b, Category::All), 3.0 / 7.0);
    }

    #[test]
    fn test_shared_attributes() {
        let a = base()
            .with_games(["原神", "FF14"])
            .with_foods([Food::Ramen, Food::Japanese]);
        let mut b = base()
            .with_games(["FF14", "原神"])
            .with_foods([Food::Japanese]);
        b.outdoor_indoor = OutdoorIndoor::Indoor;

        let games = shared_attributes(&a, &b, Category::Games);
        let values: Vec<_> = games.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["原神", "FF14"]);

        let all = shared_attributes(&a, &b, Category::All);
        let values: Vec<_> = all.iter().map(|s| (s.field, s.value.as_str())).collect();
        assert_eq!(
            values,
            [
                (Category::Games, "原神"),
                (Category::Games, "FF14"),
                (Category::Foods, "和食"),
                (Category::Lifestyle, "朝型"),
                (Category::EatingHabits, "普通"),
            ]
        );

        assert!(shared_attributes(&a, &b, Category::OutdoorIndoor).is_empty());
    }
}
