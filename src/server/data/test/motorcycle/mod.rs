use crate::server::{
    data::motorcycle::MotorcycleRepository,
    error::AppError,
    model::{
        motorcycle::{MotorcycleModel, NewMotorcycle},
        pagination::PageRequest,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_plate;
mod find_by_plate;
mod get_all_paginated;
