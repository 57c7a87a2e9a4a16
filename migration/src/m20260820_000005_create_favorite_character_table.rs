use sea_orm_migration::{prelude::*, schema::*};

use super::m20260820_000001_create_user_table::User;
use super::m20260820_000002_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacter::Table)
                    .if_not_exists()
                    .col(integer(FavoriteCharacter::UserId))
                    .col(integer(FavoriteCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(FavoriteCharacter::UserId)
                            .col(FavoriteCharacter::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_character_user_id")
                            .from(FavoriteCharacter::Table, FavoriteCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_character_character_id")
                            .from(FavoriteCharacter::Table, FavoriteCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteCharacter {
    Table,
    UserId,
    CharacterId,
}
