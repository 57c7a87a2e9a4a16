use crate::data::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
