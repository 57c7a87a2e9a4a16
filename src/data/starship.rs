use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for catalog starships.
pub struct StarshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new starship row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created starship
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        name: String,
        model: Option<String>,
        starship_class: Option<String>,
    ) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            name: ActiveValue::Set(name),
            model: ActiveValue::Set(model),
            starship_class: ActiveValue::Set(starship_class),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a starship by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The starship
    /// - `Ok(None)`: No starship with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(id).one(self.db).await
    }

    /// Gets all starships.
    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find().all(self.db).await
    }

    /// Checks whether a starship with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}
