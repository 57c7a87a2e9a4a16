use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for catalog characters.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created character
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        name: String,
        species: Option<String>,
        description: Option<String>,
        homeworld: Option<String>,
    ) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            species: ActiveValue::Set(species),
            description: ActiveValue::Set(description),
            homeworld: ActiveValue::Set(homeworld),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a character by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The character
    /// - `Ok(None)`: No character with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(id).one(self.db).await
    }

    /// Gets all characters.
    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find().all(self.db).await
    }

    /// Checks whether a character with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}
