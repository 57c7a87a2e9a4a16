use sea_orm::entity::prelude::*;

/// A catalogued character. Species and homeworld are free text, not
/// references into other tables.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub homeworld: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_character::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_character::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
