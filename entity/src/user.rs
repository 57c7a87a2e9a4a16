use sea_orm::entity::prelude::*;

/// A registered user of the catalog.
///
/// The password is stored exactly as submitted and must never reach a wire
/// DTO. The `subcription_date` column keeps its historical misspelling; the
/// serialized JSON key matches it and clients depend on that spelling.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub subcription_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
    #[sea_orm(has_many = "super::favorite_starship::Entity")]
    FavoriteStarship,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_character::Relation::User.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_planet::Relation::User.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_starship::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_starship::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
