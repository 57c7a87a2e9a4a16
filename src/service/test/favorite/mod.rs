use super::*;

mod get_user_favorites;
mod remove;
