use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Functional category of a clothing item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentSlot {
    Top,
    Bottom,
    Outerwear,
    Shoes,
    Dress,
    Accessory,
}

/// Closed style vocabulary shared by clothing items, outfits and preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Casual,
    Formal,
    Business,
    Sportswear,
    Evening,
    Streetwear,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Casual,
        Style::Formal,
        Style::Business,
        Style::Sportswear,
        Style::Evening,
        Style::Streetwear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Casual => "casual",
            Style::Formal => "formal",
            Style::Business => "business",
            Style::Sportswear => "sportswear",
            Style::Evening => "evening",
            Style::Streetwear => "streetwear",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style string outside the known vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Formal,
    Business,
    Party,
    Work,
    Sport,
    Beach,
    Travel,
}

/// A single owned garment as stored in the wardrobe collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    #[serde(alias = "$id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub slot: GarmentSlot,
    pub color: String,
    pub style: Style,
    #[serde(rename = "season", default)]
    pub seasons: Vec<Season>,
    #[serde(rename = "occasion", default)]
    pub occasions: Vec<Occasion>,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "lastWorn", default)]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ClothingItem {
    /// Create an item with the required attributes; tags and metadata start empty
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
        slot: GarmentSlot,
        color: impl Into<String>,
        style: Style,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            slot,
            color: color.into(),
            style,
            seasons: Vec::new(),
            occasions: Vec::new(),
            is_favorite: false,
            brand: None,
            size: None,
            image: None,
            notes: None,
            last_worn: None,
            created_at: None,
        }
    }

    /// Items tagged `all` are wearable in every season
    pub fn is_worn_in(&self, season: Season) -> bool {
        self.seasons.contains(&Season::All) || self.seasons.contains(&season)
    }

    pub fn suits_occasion(&self, occasion: Occasion) -> bool {
        self.occasions.contains(&occasion)
    }
}

/// User profile document holding the style settings recommendations are based on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "stylePreferences", default)]
    pub style_preferences: Vec<Style>,
    #[serde(rename = "favoriteColors", default)]
    pub favorite_colors: Vec<String>,
}

/// Outfit document that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOutfit {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "items")]
    pub item_ids: Vec<String>,
    pub style: Style,
    #[serde(rename = "occasion", default)]
    pub occasions: Vec<Occasion>,
    #[serde(rename = "season", default)]
    pub seasons: Vec<Season>,
    #[serde(rename = "isRecommended", default)]
    pub is_recommended: bool,
}

/// Persisted outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    #[serde(alias = "$id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "items")]
    pub item_ids: Vec<String>,
    pub style: Style,
    #[serde(rename = "occasion", default)]
    pub occasions: Vec<Occasion>,
    #[serde(rename = "season", default)]
    pub seasons: Vec<Season>,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    #[serde(rename = "isRecommended", default)]
    pub is_recommended: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Outfit {
    /// Materialize a stored outfit from its draft once the store assigned an id
    pub fn from_new(outfit: NewOutfit, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: outfit.user_id,
            name: outfit.name,
            description: outfit.description,
            item_ids: outfit.item_ids,
            style: outfit.style,
            occasions: outfit.occasions,
            seasons: outfit.seasons,
            is_favorite: false,
            is_recommended: outfit.is_recommended,
            created_at: Some(created_at),
        }
    }

    pub fn is_suitable_for(&self, occasion: Occasion) -> bool {
        self.occasions.contains(&occasion)
    }

    pub fn is_suitable_for_season(&self, season: Season) -> bool {
        self.seasons.contains(&Season::All) || self.seasons.contains(&season)
    }
}

/// Generated, unsaved outfit suggestion
///
/// Items are always ordered top, bottom, optional outerwear, shoes. The only
/// constructor lives in the candidate assembler, which upholds that layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitCandidate {
    items: Vec<ClothingItem>,
    name: String,
    description: String,
}

impl OutfitCandidate {
    pub(crate) fn new(items: Vec<ClothingItem>, name: String, description: String) -> Self {
        debug_assert!(items.len() == 3 || items.len() == 4);
        Self {
            items,
            name,
            description,
        }
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn top(&self) -> &ClothingItem {
        &self.items[0]
    }

    pub fn bottom(&self) -> &ClothingItem {
        &self.items[1]
    }

    pub fn outerwear(&self) -> Option<&ClothingItem> {
        if self.items.len() == 4 {
            Some(&self.items[2])
        } else {
            None
        }
    }

    pub fn shoes(&self) -> &ClothingItem {
        &self.items[self.items.len() - 1]
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Colors of every item, in item order
    pub fn colors(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.color.as_str()).collect()
    }
}
