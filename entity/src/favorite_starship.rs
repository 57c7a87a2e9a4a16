use sea_orm::entity::prelude::*;

/// Join row marking a starship as a favorite of a user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_starship")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub starship_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::starship::Entity",
        from = "Column::StarshipId",
        to = "super::starship::Column::Id"
    )]
    Starship,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
