pub mod create;
pub mod delete;
pub mod get_user;
pub mod list;
pub mod models;
pub mod update;
