mod maintenance;
mod motorcycle;
mod user;
