//! Planet factory for creating test planet entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    climate: Option<String>,
    terrain: Option<String>,
    population: Option<i64>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {id}"` where id is auto-incremented
    /// - climate: `Some("temperate")`
    /// - terrain: `Some("grasslands")`
    /// - population: `Some(1_000_000)`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            climate: Some("temperate".to_string()),
            terrain: Some("grasslands".to_string()),
            population: Some(1_000_000),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn climate(mut self, climate: Option<String>) -> Self {
        self.climate = climate;
        self
    }

    pub fn terrain(mut self, terrain: Option<String>) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn population(mut self, population: Option<i64>) -> Self {
        self.population = population;
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set(self.climate),
            terrain: ActiveValue::Set(self.terrain),
            population: ActiveValue::Set(self.population),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
