use crate::api::item_management::models::Item;
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

#[get("/items?<skip>&<limit>")]
pub(crate) async fn get_items(
    skip: Option<i64>,
    limit: Option<i64>,
    conn: DbConn,
) -> Result<Json<Vec<Item>>, ErrorResponse> {
    use schema::items::dsl::*;

    let skip = skip.unwrap_or(0);
    let limit = limit.unwrap_or(100);

    let item_list = conn
        .run(move |c| {
            items
                .order(id.asc())
                .offset(skip)
                .limit(limit)
                .load::<Item>(c)
                .map_err(|err| ErrorResponse::internal(format!("Couldn't load items: {}", err)))
        })
        .await?;

    Ok(Json(item_list))
}
