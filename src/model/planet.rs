use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
            population: model.population,
        }
    }
}

/// Creation payload; all fields must be present in the request body.
/// `population` may be `null` but the key itself is required.
#[derive(Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    #[serde(deserialize_with = "required_nullable")]
    pub population: Option<i64>,
}

/// Rejects an absent key while still accepting an explicit `null`.
///
/// `Option` fields are implicitly defaulted by serde when the key is missing;
/// routing through `deserialize_with` removes that implicit default.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}
