use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::PageRequest,
        user::{CreateUserParam, UserChanges},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_email;
mod find_by_email;
mod get_all_paginated;
mod update;
