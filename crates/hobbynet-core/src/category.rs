//! The closed set of attribute categories that can drive similarity.

use std::fmt;
use std::str::FromStr;

use crate::errors::CategoryError;

/// Attribute dimension selected for the similarity computation.
///
/// Every variant except [`Category::All`] names exactly one profile field;
/// `All` is the aggregate over every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Category {
    #[default]
    All,
    Games,
    Anime,
    Manga,
    Foods,
    Lifestyle,
    OutdoorIndoor,
    EatingHabits,
}

impl Category {
    /// Every selectable category, aggregate first.
    pub const ALL: [Category; 8] = [
        Category::All,
        Category::Games,
        Category::Anime,
        Category::Manga,
        Category::Foods,
        Category::Lifestyle,
        Category::OutdoorIndoor,
        Category::EatingHabits,
    ];

    /// The individual profile fields, multi-valued first.
    pub const FIELDS: [Category; 7] = [
        Category::Games,
        Category::Anime,
        Category::Manga,
        Category::Foods,
        Category::Lifestyle,
        Category::OutdoorIndoor,
        Category::EatingHabits,
    ];

    /// Number of profile fields; the normalizer of the aggregate score.
    pub const FIELD_COUNT: usize = Self::FIELDS.len();

    /// Dataset / API key (`"all"`, `"games"`, `"outdoorIndoor"`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Games => "games",
            Category::Anime => "anime",
            Category::Manga => "manga",
            Category::Foods => "foods",
            Category::Lifestyle => "lifestyle",
            Category::OutdoorIndoor => "outdoorIndoor",
            Category::EatingHabits => "eatingHabits",
        }
    }

    /// Label shown in the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "全体の相性",
            Category::Games => "ゲームの趣味",
            Category::Anime => "アニメの趣味",
            Category::Manga => "漫画の趣味",
            Category::Foods => "好きな料理",
            Category::Lifestyle => "生活リズム",
            Category::OutdoorIndoor => "アウトドア/インドア",
            Category::EatingHabits => "食事の量",
        }
    }

    /// Whether this is the aggregate over every field.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Category::All)
    }

    /// Whether this field holds a set of tags.
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            Category::Games | Category::Anime | Category::Manga | Category::Foods
        )
    }

    /// Whether this field holds one enumerated value.
    pub fn is_single_valued(&self) -> bool {
        matches!(
            self,
            Category::Lifestyle | Category::OutdoorIndoor | Category::EatingHabits
        )
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| CategoryError::Unknown { name: s.to_string() })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!("all".parse::<Category>(), Ok(Category::All));
        assert_eq!("outdoorIndoor".parse::<Category>(), Ok(Category::OutdoorIndoor));
        assert_eq!("eatingHabits".parse::<Category>(), Ok(Category::EatingHabits));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "hobbies".parse::<Category>(),
            Err(CategoryError::Unknown { name: "hobbies".to_string() })
        );
        // Keys are case sensitive.
        assert!("Games".parse::<Category>().is_err());
    }

    #[test]
    fn test_field_partition() {
        assert_eq!(Category::FIELD_COUNT, 7);
        let multi = Category::FIELDS.iter().filter(|c| c.is_multi_valued()).count();
        let single = Category::FIELDS.iter().filter(|c| c.is_single_valued()).count();
        assert_eq!((multi, single), (4, 3));
        assert!(!Category::FIELDS.contains(&Category::All));
    }
}
