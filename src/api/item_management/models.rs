use crate::schema::items;
use diesel::prelude::*;
use serde::Serialize;

#[derive(Queryable, Serialize, Debug)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}
