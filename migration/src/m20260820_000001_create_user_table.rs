use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string(User::Password))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(
                        ColumnDef::new(User::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(date_null(User::SubcriptionDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

// SubcriptionDate keeps the upstream misspelling; the column name is part of
// the serialized contract.
#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    Password,
    FirstName,
    LastName,
    IsActive,
    SubcriptionDate,
}
