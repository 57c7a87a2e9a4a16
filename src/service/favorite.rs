//! Favorites business logic.
//!
//! Orchestrates the user/target existence checks and the duplicate/absence
//! conflict checks around the favorite join tables. Error messages produced
//! here are client-facing and kind-specific.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository,
        UserRepository,
    },
    error::AppError,
    model::favorite::FavoriteKind,
};

/// A user's favorites grouped by catalog kind, as entity models.
pub struct UserFavorites {
    pub characters: Vec<entity::character::Model>,
    pub planets: Vec<entity::planet::Model>,
    pub starships: Vec<entity::starship::Model>,
}

/// Service providing business logic for favorite links.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite link for the user.
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(AppError::NotFound)` - User or target entity does not exist
    /// - `Err(AppError::BadRequest)` - Link already exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<(), AppError> {
        self.check_user_and_target(user_id, kind, target_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo.exists(user_id, kind, target_id).await? {
            return Err(AppError::BadRequest(format!(
                "{} already in favorites",
                kind.label()
            )));
        }

        favorite_repo.add(user_id, kind, target_id).await?;

        Ok(())
    }

    /// Removes a favorite link for the user.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed
    /// - `Err(AppError::NotFound)` - User or target entity does not exist
    /// - `Err(AppError::BadRequest)` - Link was not present
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<(), AppError> {
        self.check_user_and_target(user_id, kind, target_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        if !favorite_repo.exists(user_id, kind, target_id).await? {
            return Err(AppError::BadRequest(format!(
                "{} not in favorites",
                kind.label()
            )));
        }

        favorite_repo.remove(user_id, kind, target_id).await?;

        Ok(())
    }

    /// Gets everything the user has favorited, grouped by kind.
    ///
    /// # Returns
    /// - `Ok(UserFavorites)` - The user's favorites (arrays may be empty)
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavorites, AppError> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let favorite_repo = FavoriteRepository::new(self.db);

        Ok(UserFavorites {
            characters: favorite_repo.get_characters(&user).await?,
            planets: favorite_repo.get_planets(&user).await?,
            starships: favorite_repo.get_starships(&user).await?,
        })
    }

    /// Verifies that both the user and the favorite target exist.
    ///
    /// The original API reports both misses with a single message, so the two
    /// lookups share one `NotFound`.
    async fn check_user_and_target(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<(), AppError> {
        let user_exists = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_some();

        let target_exists = match kind {
            FavoriteKind::Character => {
                CharacterRepository::new(self.db).exists(target_id).await?
            }
            FavoriteKind::Planet => PlanetRepository::new(self.db).exists(target_id).await?,
            FavoriteKind::Starship => StarshipRepository::new(self.db).exists(target_id).await?,
        };

        if !user_exists || !target_exists {
            return Err(AppError::NotFound(format!(
                "User or {} not found",
                kind.label()
            )));
        }

        Ok(())
    }
}
