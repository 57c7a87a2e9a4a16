use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for users.
///
/// Passwords are stored exactly as given; keeping them out of responses is
/// the job of the DTO layer, not this repository.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user row.
    ///
    /// New users are active and have no subscription date. A duplicate email
    /// violates the unique constraint and surfaces as `DbErr`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error, including unique constraint violations
    pub async fn create(
        &self,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            is_active: ActiveValue::Set(true),
            subcription_date: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets all users.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }
}
