//! Loading and validating entity datasets.
//!
//! A dataset is a JSON array of people:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "田中",
//!     "attributes": {
//!       "games": ["原神"],
//!       "anime": ["推しの子"],
//!       "manga": ["ワンピース"],
//!       "foods": ["和食", "中華"],
//!       "lifestyle": "朝型",
//!       "outdoorIndoor": "インドア",
//!       "eatingHabits": "普通"
//!     }
//!   }
//! ]
//! ```
//!
//! Enumerated values are checked here, so everything downstream can assume
//! well-formed profiles.

use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::Deserialize;

use crate::errors::DatasetError;
use crate::profile::{AttributeProfile, EatingHabit, Food, Lifestyle, OutdoorIndoor, UnknownValue};
use crate::types::{Entity, EntityId};

/// An ordered, validated list of entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entities: Vec<Entity>,
}

impl Dataset {
    /// Build a dataset from already constructed entities, checking id uniqueness.
    pub fn new(entities: Vec<Entity>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(entity.id) {
                return Err(DatasetError::DuplicateId(entity.id));
            }
            if entity.name.trim().is_empty() {
                return Err(DatasetError::EmptyName(entity.id));
            }
        }
        Ok(Self { entities })
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<EntityRecord> = serde_json::from_str(json)?;
        let result = records
            .into_iter()
            .map(EntityRecord::into_entity)
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::new);

        match &result {
            Ok(dataset) => tracing::debug!(entities = dataset.len(), "dataset loaded"),
            Err(err) => tracing::warn!(%err, "dataset rejected"),
        }
        result
    }

    /// Entities in dataset order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity by id.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}

#[derive(Debug, Deserialize)]
struct EntityRecord {
    id: u64,
    name: String,
    attributes: AttributesRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttributesRecord {
    #[serde(default)]
    games: Vec<String>,
    #[serde(default)]
    anime: Vec<String>,
    #[serde(default)]
    manga: Vec<String>,
    #[serde(default)]
    foods: Vec<String>,
    lifestyle: String,
    outdoor_indoor: String,
    eating_habits: String,
}

impl EntityRecord {
    fn into_entity(self) -> Result<Entity, DatasetError> {
        let id = EntityId(self.id);
        let attrs = self.attributes;

        let lifestyle: Lifestyle = parse_choice(id, &attrs.lifestyle)?;
        let outdoor_indoor: OutdoorIndoor = parse_choice(id, &attrs.outdoor_indoor)?;
        let eating_habits: EatingHabit = parse_choice(id, &attrs.eating_habits)?;

        let foods = attrs
            .foods
            .iter()
            .map(|label| parse_choice::<Food>(id, label))
            .collect::<Result<Vec<_>, _>>()?;

        let profile = AttributeProfile {
            games: unique_tags(id, "games", attrs.games)?,
            anime: unique_tags(id, "anime", attrs.anime)?,
            manga: unique_tags(id, "manga", attrs.manga)?,
            foods: unique_tags(id, Food::FIELD, foods)?,
            lifestyle,
            outdoor_indoor,
            eating_habits,
        };

        Ok(Entity {
            id,
            name: self.name,
            profile,
        })
    }
}

fn parse_choice<T>(entity: EntityId, label: &str) -> Result<T, DatasetError>
where
    T: FromStr<Err = UnknownValue>,
{
    label
        .parse()
        .map_err(|UnknownValue { field, value }| DatasetError::UnknownValue { entity, field, value })
}

fn unique_tags<T>(entity: EntityId, field: &'static str, tags: Vec<T>) -> Result<IndexSet<T>, DatasetError>
where
    T: Hash + Eq + ToString,
{
    let mut set = IndexSet::with_capacity(tags.len());
    for tag in tags {
        if set.contains(&tag) {
            return Err(DatasetError::DuplicateTag {
                entity,
                field,
                value: tag.to_string(),
            });
        }
        set.insert(tag);
    }
    Ok(set)
}
