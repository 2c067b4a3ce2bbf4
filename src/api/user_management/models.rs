use crate::schema::users;
use diesel::prelude::*;
use serde::Serialize;

#[derive(Queryable, Identifiable, Serialize, Debug)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub is_active: bool,
}

/// Envelope returned by update and delete.
#[derive(Serialize)]
pub struct UserMessage {
    pub message: String,
    pub data: User,
}
