//! Attribute profiles and the closed enumerations they draw from.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;

use crate::category::Category;

/// Declares a closed enumeration whose values are identified by their
/// display labels, both in datasets and on screen.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            /// Dataset field this enumeration belongs to.
            pub const FIELD: &'static str = $field;

            /// Display label (also the dataset spelling).
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// A label that does not belong to the enumeration of `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

choice_enum! {
    /// Favored cuisine.
    Food, field = "foods" {
        Japanese => "和食",
        Chinese => "中華",
        Italian => "イタリアン",
        Ethnic => "エスニック",
        Yakiniku => "焼肉",
        Sweets => "スイーツ",
        Ramen => "ラーメン",
        Curry => "カレー",
    }
}

choice_enum! {
    /// Daily rhythm.
    Lifestyle, field = "lifestyle" {
        EarlyBird => "朝型",
        NightOwl => "夜型",
        Irregular => "不規則",
    }
}

choice_enum! {
    /// Preference for going out versus staying in.
    OutdoorIndoor, field = "outdoorIndoor" {
        Outdoor => "アウトドア",
        Indoor => "インドア",
        Balanced => "バランス型",
    }
}

choice_enum! {
    /// Appetite.
    EatingHabit, field = "eatingHabits" {
        Light => "小食",
        Moderate => "普通",
        Hearty => "大食い",
    }
}

/// The structured bag of traits belonging to one entity.
///
/// Multi-valued fields are insertion-ordered sets: membership is what counts
/// for similarity, the order is kept only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AttributeProfile {
    pub games: IndexSet<String>,
    pub anime: IndexSet<String>,
    pub manga: IndexSet<String>,
    pub foods: IndexSet<Food>,
    pub lifestyle: Lifestyle,
    pub outdoor_indoor: OutdoorIndoor,
    pub eating_habits: EatingHabit,
}

impl AttributeProfile {
    /// Create a profile with the given single-valued fields and empty tag sets.
    pub fn new(lifestyle: Lifestyle, outdoor_indoor: OutdoorIndoor, eating_habits: EatingHabit) -> Self {
        Self {
            games: IndexSet::new(),
            anime: IndexSet::new(),
            manga: IndexSet::new(),
            foods: IndexSet::new(),
            lifestyle,
            outdoor_indoor,
            eating_habits,
        }
    }

    /// Set the favored games.
    pub fn with_games<I, S>(mut self, games: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.games = games.into_iter().map(Into::into).collect();
        self
    }

    /// Set the favored anime.
    pub fn with_anime<I, S>(mut self, anime: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anime = anime.into_iter().map(Into::into).collect();
        self
    }

    /// Set the favored manga.
    pub fn with_manga<I, S>(mut self, manga: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manga = manga.into_iter().map(Into::into).collect();
        self
    }

    /// Set the favored foods.
    pub fn with_foods(mut self, foods: impl IntoIterator<Item = Food>) -> Self {
        self.foods = foods.into_iter().collect();
        self
    }

    /// Human-readable value of one field, tags joined with `", "`.
    ///
    /// Returns `None` for [`Category::All`], which is not a field.
    pub fn display_value(&self, category: Category) -> Option<String> {
        let joined = |tags: &IndexSet<String>| {
            tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        };

        match category {
            Category::All => None,
            Category::Games => Some(joined(&self.games)),
            Category::Anime => Some(joined(&self.anime)),
            Category::Manga => Some(joined(&self.manga)),
            Category::Foods => Some(
                self.foods
                    .iter()
                    .map(Food::label)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Category::Lifestyle => Some(self.lifestyle.label().to_string()),
            Category::OutdoorIndoor => Some(self.outdoor_indoor.label().to_string()),
            Category::EatingHabits => Some(self.eating_habits.label().to_string()),
        }
    }
}
