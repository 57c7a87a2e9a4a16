use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_starship::Entity")]
    FavoriteStarship,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_starship::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_starship::Relation::Starship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
