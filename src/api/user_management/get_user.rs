use crate::api::user_management::models::User;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/users/<uid>")]
pub(crate) async fn get_user(uid: i32, conn: DbConn) -> Result<Json<User>, ErrorResponse> {
    use schema::users::dsl::*;

    let user = conn
        .run(move |c| {
            users
                .filter(id.eq(uid))
                .first::<User>(c)
                .optional()
                .map_err(|err| {
                    ErrorResponse::internal(format!("Couldn't access database: {}", err))
                })?
                .ok_or_else(|| ErrorResponse::not_found("User Not Found".to_string()))
        })
        .await?;

    Ok(Json(user))
}
