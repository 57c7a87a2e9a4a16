//! Starship factory for creating test starship entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test starships with customizable fields.
pub struct StarshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: Option<String>,
    starship_class: Option<String>,
}

impl<'a> StarshipFactory<'a> {
    /// Creates a new StarshipFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Starship {id}"` where id is auto-incremented
    /// - model: `Some("YT-1300")`
    /// - starship_class: `Some("Light freighter")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Starship {}", id),
            model: Some("YT-1300".to_string()),
            starship_class: Some("Light freighter".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn starship_class(mut self, starship_class: Option<String>) -> Self {
        self.starship_class = starship_class;
        self
    }

    /// Builds and inserts the starship entity into the database.
    pub async fn build(self) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            starship_class: ActiveValue::Set(self.starship_class),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a starship with default values.
pub async fn create_starship(db: &DatabaseConnection) -> Result<entity::starship::Model, DbErr> {
    StarshipFactory::new(db).build().await
}
