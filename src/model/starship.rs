use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(model: entity::starship::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model,
            starship_class: model.starship_class,
        }
    }
}

/// Creation payload; all fields must be present in the request body.
#[derive(Deserialize, ToSchema)]
pub struct CreateStarshipDto {
    pub name: String,
    pub model: String,
    pub starship_class: String,
}
