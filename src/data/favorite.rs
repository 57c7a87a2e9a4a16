use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait};

use crate::model::favorite::FavoriteKind;

/// Repository providing database operations for the three favorite join tables.
///
/// Each link is keyed by `(user_id, target_id)`; the composite primary key is
/// what makes duplicate favorites impossible at the storage level.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the favorite link exists.
    ///
    /// # Returns
    /// - `Ok(true)`: Link present
    /// - `Ok(false)`: Link absent
    /// - `Err(DbErr)`: Database error
    pub async fn exists(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        let found = match kind {
            FavoriteKind::Character => entity::prelude::FavoriteCharacter::find_by_id((
                user_id, target_id,
            ))
            .one(self.db)
            .await?
            .is_some(),
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::find_by_id((user_id, target_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::find_by_id((user_id, target_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
        };

        Ok(found)
    }

    /// Creates the favorite link.
    ///
    /// Inserting an already existing link violates the composite primary key
    /// and surfaces as `DbErr`; callers check `exists` first.
    pub async fn add(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<(), DbErr> {
        match kind {
            FavoriteKind::Character => {
                entity::favorite_character::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    character_id: ActiveValue::Set(target_id),
                }
                .insert(self.db)
                .await?;
            }
            FavoriteKind::Planet => {
                entity::favorite_planet::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    planet_id: ActiveValue::Set(target_id),
                }
                .insert(self.db)
                .await?;
            }
            FavoriteKind::Starship => {
                entity::favorite_starship::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    starship_id: ActiveValue::Set(target_id),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Deletes the favorite link.
    pub async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<(), DbErr> {
        match kind {
            FavoriteKind::Character => {
                entity::prelude::FavoriteCharacter::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await?;
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await?;
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::delete_by_id((user_id, target_id))
                    .exec(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    /// Gets all characters the user has favorited, in no guaranteed order.
    pub async fn get_characters(
        &self,
        user: &entity::user::Model,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        user.find_related(entity::prelude::Character)
            .all(self.db)
            .await
    }

    /// Gets all planets the user has favorited, in no guaranteed order.
    pub async fn get_planets(
        &self,
        user: &entity::user::Model,
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        user.find_related(entity::prelude::Planet)
            .all(self.db)
            .await
    }

    /// Gets all starships the user has favorited, in no guaranteed order.
    pub async fn get_starships(
        &self,
        user: &entity::user::Model,
    ) -> Result<Vec<entity::starship::Model>, DbErr> {
        user.find_related(entity::prelude::Starship)
            .all(self.db)
            .await
    }
}
