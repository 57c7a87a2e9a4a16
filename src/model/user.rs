use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serialized form of a user.
///
/// The password column is deliberately absent. The `subcription_date` key
/// keeps the upstream misspelling; clients depend on that exact spelling.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub subcription_date: Option<NaiveDate>,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            is_active: model.is_active,
            subcription_date: model.subcription_date,
        }
    }
}

/// Creation payload; all fields must be present in the request body.
#[derive(Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
