use chrono::{Duration, Utc};

use crate::server::{
    data::maintenance::MaintenanceRepository,
    error::AppError,
    model::{
        maintenance::{CreateMaintenanceParam, MaintenanceStatus, UpdateMaintenanceParam},
        pagination::PageRequest,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_id;
mod get_paginated;
mod update;
