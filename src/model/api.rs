use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for 4xx/5xx responses.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
}

/// Success body for operations that return a confirmation message rather
/// than a resource (favorite add/remove).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}
