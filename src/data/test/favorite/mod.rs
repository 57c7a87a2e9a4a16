use crate::{data::FavoriteRepository, model::favorite::FavoriteKind};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_related;
mod remove;
