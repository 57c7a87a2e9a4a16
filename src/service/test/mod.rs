use crate::{error::AppError, model::favorite::FavoriteKind, service::favorite::FavoriteService};
use test_utils::{builder::TestBuilder, factory};

mod favorite;
