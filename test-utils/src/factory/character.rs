//! Character factory for creating test character entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    species: Option<String>,
    description: Option<String>,
    homeworld: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"` where id is auto-incremented
    /// - species: `Some("Human")`
    /// - description: `Some("A test character")`
    /// - homeworld: `Some("Tatooine")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            species: Some("Human".to_string()),
            description: Some("A test character".to_string()),
            homeworld: Some("Tatooine".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: Option<String>) -> Self {
        self.species = species;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn homeworld(mut self, homeworld: Option<String>) -> Self {
        self.homeworld = homeworld;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            description: ActiveValue::Set(self.description),
            homeworld: ActiveValue::Set(self.homeworld),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
