//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! catalog kind plus the favorite join tables. Repositories work directly with SeaORM
//! entity models; DTO conversion happens in the controller layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;


pub use character::CharacterRepository;
pub use favorite::FavoriteRepository;
pub use planet::PlanetRepository;
pub use starship::StarshipRepository;
pub use user::UserRepository;
