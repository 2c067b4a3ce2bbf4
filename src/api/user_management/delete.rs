use crate::api::user_management::models::{User, UserMessage};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[delete("/users/<uid>")]
pub(crate) async fn delete_user(uid: i32, conn: DbConn) -> Result<Json<UserMessage>, ErrorResponse> {
    use schema::users::dsl::*;

    let user = conn
        .run(move |c| {
            let user = users
                .filter(id.eq(uid))
                .first::<User>(c)
                .optional()
                .map_err(|err| {
                    ErrorResponse::internal(format!("Couldn't access database: {}", err))
                })?
                .ok_or_else(|| ErrorResponse::not_found("User Not Found".to_string()))?;

            diesel::delete(&user)
                .execute(c)
                .map_err(|err| ErrorResponse::internal(format!("Couldn't delete user: {}", err)))?;

            Ok(user)
        })
        .await?;

    Ok(Json(UserMessage {
        message: "User successfully Deleted".to_string(),
        data: user,
    }))
}
