use crate::api::user_management::models::{User, UserMessage};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use crate::schema::users;
use diesel::prelude::*;
use rocket::serde::json::Json;
use serde::Deserialize;

#[derive(Deserialize, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChanges {
    email: Option<String>,
    name: Option<String>,
    #[diesel(column_name = is_active)]
    active: Option<bool>,
}

impl UserChanges {
    fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.active.is_none()
    }
}

#[put("/users/<uid>", data = "<changes>")]
pub(crate) async fn update_user(
    uid: i32,
    changes: Json<UserChanges>,
    conn: DbConn,
) -> Result<Json<UserMessage>, ErrorResponse> {
    use schema::users::dsl::*;

    let changes = changes.into_inner();

    let user = conn
        .run(move |c| {
            // diesel rejects an empty changeset, so fall back to a plain fetch
            if changes.is_empty() {
                return users
                    .filter(id.eq(uid))
                    .first::<User>(c)
                    .map_err(map_update_err);
            }

            diesel::update(users.filter(id.eq(uid)))
                .set(&changes)
                .get_result::<User>(c)
                .map_err(map_update_err)
        })
        .await?;

    Ok(Json(UserMessage {
        message: "User record successfully Updated".to_string(),
        data: user,
    }))
}

fn map_update_err(err: diesel::result::Error) -> ErrorResponse {
    match err {
        diesel::result::Error::NotFound => {
            ErrorResponse::not_found("Could not update".to_string())
        }
        err => ErrorResponse::internal(format!("Couldn't update user: {}", err)),
    }
}
