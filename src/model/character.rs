use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub description: Option<String>,
    pub homeworld: Option<String>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(model: entity::character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            species: model.species,
            description: model.description,
            homeworld: model.homeworld,
        }
    }
}

/// Creation payload; all fields must be present in the request body.
#[derive(Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: String,
    pub species: String,
    pub description: String,
    pub homeworld: String,
}
