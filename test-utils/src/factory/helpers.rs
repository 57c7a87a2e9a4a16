//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with one row of each catalog kind.
///
/// Convenience method for favorites tests that need a user plus a valid
/// favorite target of every kind. All entities are created with default
/// values; use the individual factories to customize.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, character, planet, starship))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_catalog(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::character::Model,
        entity::planet::Model,
        entity::starship::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::create_character(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let starship = crate::factory::starship::create_starship(db).await?;

    Ok((user, character, planet, starship))
}
