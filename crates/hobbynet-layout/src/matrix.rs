//! Pairwise relation matrix and its per-category cache.

use hobbynet_core::{similarity, Category, Entity, EntityId};

/// Symmetric N×N similarity matrix for one category.
///
/// Only the upper triangle is evaluated; the diagonal is stored as 0 and never
/// read by [`RelationMatrix::centrality`].
#[derive(Debug, Clone, PartialEq)]
pub struct RelationMatrix {
    category: Category,
    ids: Vec<EntityId>,
    values: Vec<f64>,
}

impl RelationMatrix {
    /// Evaluate every unordered pair of `entities` under `category`.
    pub fn build(entities: &[Entity], category: Category) -> Self {
        let n = entities.len();
        let mut values = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let score = similarity(&entities[i].profile, &entities[j].profile, category);
                values[i * n + j] = score;
                values[j * n + i] = score;
            }
        }

        Self {
            category,
            ids: entities.iter().map(|e| e.id).collect(),
            values,
        }
    }

    /// Number of rows (entities).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Entity ids in row order.
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    /// Similarity between the entities at input positions `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.len() + j]
    }

    /// Total relational weight of row `i`, excluding the diagonal.
    pub fn row_sum(&self, i: usize) -> f64 {
        let n = self.len();
        self.values[i * n..(i + 1) * n]
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v)
            .sum()
    }

    /// Row sums for every entity, in input order.
    pub fn centrality(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.row_sum(i)).collect()
    }

    /// Whether this matrix was built for exactly these entities and category.
    pub fn matches(&self, entities: &[Entity], category: Category) -> bool {
        self.category == category
            && self.ids.len() == entities.len()
            && self.ids.iter().zip(entities).all(|(id, e)| *id == e.id)
    }
}

/// Memoizes the relation matrix for the current category.
///
/// Rotation does not affect similarity, so the matrix survives every frame
/// until the category or the entity list changes. Profiles are assumed
/// immutable for a given id list; call [`RelationCache::invalidate`] when the
/// dataset is replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct RelationCache {
    matrix: Option<RelationMatrix>,
    rebuilds: usize,
}

impl RelationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached matrix, rebuilding it if the inputs changed.
    pub fn get_or_build(&mut self, entities: &[Entity], category: Category) -> &RelationMatrix {
        let matrix = match self.matrix.take() {
            Some(matrix) if matrix.matches(entities, category) => matrix,
            _ => {
                tracing::debug!(entities = entities.len(), %category, "rebuilding relation matrix");
                self.rebuilds += 1;
                RelationMatrix::build(entities, category)
            }
        };
        self.matrix.insert(matrix)
    }

    /// Drop the cached matrix.
    pub fn invalidate(&mut self) {
        self.matrix = None;
    }

    /// How many times the matrix has been (re)built.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobbynet_core::{AttributeProfile, EatingHabit, Food, Lifestyle, OutdoorIndoor};

    fn person(id: u64, foods: &[Food], lifestyle: Lifestyle) -> Entity {
        let profile = AttributeProfile::new(lifestyle, OutdoorIndoor::Indoor, EatingHabit::Moderate)
            .with_foods(foods.iter().copied());
        Entity::new(id, format!("p{id}"), profile)
    }

    fn trio() -> Vec<Entity> {
        vec![
            person(1, &[Food::Japanese, Food::Chinese], Lifestyle::EarlyBird),
            person(2, &[Food::Japanese], Lifestyle::EarlyBird),
            person(3, &[Food::Curry], Lifestyle::NightOwl),
        ]
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = RelationMatrix::build(&trio(), Category::Foods);
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 1), 0.5);
        assert_eq!(matrix.get(0, 2), 0.0);
    }

    #[test]
    fn test_centrality_is_row_sum() {
        let matrix = RelationMatrix::build(&trio(), Category::Lifestyle);
        assert_eq!(matrix.centrality(), vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = RelationMatrix::build(&[], Category::All);
        assert!(matrix.is_empty());
        assert!(matrix.centrality().is_empty());
    }

    #[test]
    fn test_cache_rebuilds_only_on_category_change() {
        let entities = trio();
        let mut cache = RelationCache::new();

        cache.get_or_build(&entities, Category::Foods);
        cache.get_or_build(&entities, Category::Foods);
        assert_eq!(cache.rebuilds(), 1);

        let matrix = cache.get_or_build(&entities, Category::Lifestyle);
        assert_eq!(matrix.category(), Category::Lifestyle);
        assert_eq!(cache.rebuilds(), 2);
    }

    #[test]
    fn test_cache_rebuilds_when_entities_change() {
        let mut entities = trio();
        let mut cache = RelationCache::new();
        cache.get_or_build(&entities, Category::All);

        entities.pop();
        assert_eq!(cache.get_or_build(&entities, Category::All).len(), 2);
        assert_eq!(cache.rebuilds(), 2);
    }
}
