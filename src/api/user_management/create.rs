use crate::api::user_management::models::{NewUser, User};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserIn {
    email: String,
    name: String,
    active: Option<bool>,
}

#[post("/users", data = "<user>")]
pub(crate) async fn create_user(
    user: Json<UserIn>,
    conn: DbConn,
) -> Result<Json<User>, ErrorResponse> {
    use schema::users::dsl::*;

    let new_user = NewUser {
        email: user.email.clone(),
        name: user.name.clone(),
        is_active: user.active.unwrap_or(true),
    };

    let user = conn
        .run(move |c| {
            let existing = users
                .filter(email.eq(&new_user.email))
                .first::<User>(c)
                .optional()
                .map_err(|err| {
                    ErrorResponse::internal(format!("Couldn't access database: {}", err))
                })?;

            if existing.is_some() {
                // duplicate email is reported as 404, not 409; the doubled
                // space in the detail text is part of the wire contract
                return Err(ErrorResponse::not_found(
                    "Email already  exists".to_string(),
                ));
            }

            diesel::insert_into(users)
                .values(&new_user)
                .get_result::<User>(c)
                .map_err(|err| ErrorResponse::internal(format!("Couldn't create user: {}", err)))
        })
        .await?;

    Ok(Json(user))
}
