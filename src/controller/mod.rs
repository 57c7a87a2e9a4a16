//! HTTP request handlers.
//!
//! Controllers validate request input, call into the repository/service
//! layers, and convert entity models to wire DTOs. Every handler is a single
//! linear validate, lookup or mutate, respond sequence.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod starship;
pub mod user;

#[cfg(test)]
mod test;
