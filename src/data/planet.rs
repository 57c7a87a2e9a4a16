use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for catalog planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created planet
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        name: String,
        climate: Option<String>,
        terrain: Option<String>,
        population: Option<i64>,
    ) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            climate: ActiveValue::Set(climate),
            terrain: ActiveValue::Set(terrain),
            population: ActiveValue::Set(population),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a planet by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The planet
    /// - `Ok(None)`: No planet with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(id).one(self.db).await
    }

    /// Gets all planets.
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find().all(self.db).await
    }

    /// Checks whether a planet with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(id).await?.is_some())
    }
}
