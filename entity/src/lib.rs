pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_starship;
pub mod planet;
pub mod starship;
pub mod user;
