use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto, starship::StarshipDto};

/// The catalog kinds a user can favorite, as they appear in the
/// `/favorite/{kind}/{id}` path segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Character,
    Planet,
    Starship,
}

impl FavoriteKind {
    /// Capitalized kind name used in client-facing messages
    /// ("Planet added to favorites", "User or Starship not found").
    pub fn label(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Starship => "Starship",
        }
    }
}

/// Body of a favorite add/remove request.
#[derive(Deserialize, ToSchema)]
pub struct FavoriteUserDto {
    pub user_id: i32,
}

/// A user's favorites, grouped by catalog kind. Ordering within each array
/// is not guaranteed.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub characters: Vec<CharacterDto>,
    pub planets: Vec<PlanetDto>,
    pub starships: Vec<StarshipDto>,
}
