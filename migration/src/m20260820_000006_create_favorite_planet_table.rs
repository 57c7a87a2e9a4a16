use sea_orm_migration::{prelude::*, schema::*};

use super::m20260820_000001_create_user_table::User;
use super::m20260820_000003_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanet::Table)
                    .if_not_exists()
                    .col(integer(FavoritePlanet::UserId))
                    .col(integer(FavoritePlanet::PlanetId))
                    .primary_key(
                        Index::create()
                            .col(FavoritePlanet::UserId)
                            .col(FavoritePlanet::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet_user_id")
                            .from(FavoritePlanet::Table, FavoritePlanet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet_planet_id")
                            .from(FavoritePlanet::Table, FavoritePlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePlanet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoritePlanet {
    Table,
    UserId,
    PlanetId,
}
