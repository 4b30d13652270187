//! Data models representing drinks, comments, and the bundle the review view
//! loads on mount.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::locator::CommentId;
use super::rating::AverageRating;

/// Number of `strIngredientN` slots the drink catalog provides.
const MAX_INGREDIENT_SLOTS: usize = 15;

/// Catalog details for the drink under review.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Drink {
    /// Catalog identifier (`idDrink`), if the server echoed it.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Category such as "Cocktail" or "Ordinary Drink".
    pub category: Option<String>,
    /// Recommended glass.
    pub glass: Option<String>,
    /// Ingredient names in catalog order, blanks removed.
    pub ingredients: Vec<String>,
    /// Thumbnail image reference.
    pub thumbnail_url: Option<String>,
}

/// A free-text review entry attached to a drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Server-assigned identifier.
    pub id: CommentId,
    /// Comment body.
    pub text: String,
}

impl Comment {
    /// Creates a comment from its parts.
    #[must_use]
    pub fn new(id: CommentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Everything the review view needs on mount, fetched in one call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrinkBundle {
    /// Drink details.
    pub drink: Drink,
    /// Comments in server order.
    pub comments: Vec<Comment>,
    /// Server-computed average rating.
    pub average_rating: AverageRating,
}

/// Catalog drink object. Kept as a raw map because the catalog uses numbered
/// ingredient keys and mixes string and numeric values.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub(super) struct ApiDrink(Map<String, Value>);

impl ApiDrink {
    fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) id: CommentId,
    #[serde(default)]
    pub(super) comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiDrinkBundle {
    pub(super) drink: ApiDrink,
    #[serde(default)]
    pub(super) comments: Vec<ApiComment>,
    #[serde(rename = "averageRating", default)]
    pub(super) average_rating: Option<AverageRating>,
}

impl From<ApiDrink> for Drink {
    fn from(value: ApiDrink) -> Self {
        let ingredients = (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|slot| value.text(&format!("strIngredient{slot}")))
            .collect();
        Self {
            id: value.text("idDrink"),
            name: value.text("strDrink"),
            category: value.text("strCategory"),
            glass: value.text("strGlass"),
            ingredients,
            thumbnail_url: value.text("strDrinkThumb"),
        }
    }
}

impl From<ApiComment> for Comment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: value.id,
            text: value.comment.unwrap_or_default(),
        }
    }
}

impl From<ApiDrinkBundle> for DrinkBundle {
    fn from(value: ApiDrinkBundle) -> Self {
        Self {
            drink: value.drink.into(),
            comments: value.comments.into_iter().map(Comment::from).collect(),
            average_rating: value.average_rating.unwrap_or_default(),
        }
    }
}
