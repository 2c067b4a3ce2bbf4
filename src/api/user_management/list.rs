use crate::api::user_management::models::User;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/users?<skip>&<limit>")]
pub(crate) async fn get_users(
    skip: Option<i64>,
    limit: Option<i64>,
    conn: DbConn,
) -> Result<Json<Vec<User>>, ErrorResponse> {
    use schema::users::dsl::*;

    let skip = skip.unwrap_or(0);
    let limit = limit.unwrap_or(100);

    let user_list = conn
        .run(move |c| {
            users
                .order(id.asc())
                .offset(skip)
                .limit(limit)
                .load::<User>(c)
                .map_err(|err| ErrorResponse::internal(format!("Couldn't load users: {}", err)))
        })
        .await?;

    Ok(Json(user_list))
}
