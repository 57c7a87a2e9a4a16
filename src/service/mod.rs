//! Business logic layer.
//!
//! Catalog CRUD is thin enough that controllers talk to the repositories
//! directly; the favorites flow carries the existence and conflict checks and
//! lives here.

pub mod favorite;

#[cfg(test)]
mod test;
