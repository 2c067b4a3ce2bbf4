pub mod item_management;
pub mod user_management;
