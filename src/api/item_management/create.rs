use crate::api::item_management::models::{Item, NewItem};
use crate::db::DbConn;
use crate::error::ErrorResponse;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ItemIn {
    title: String,
    description: Option<String>,
}

#[post("/users/<uid>/items", data = "<item>")]
pub(crate) async fn create_user_item(
    uid: i32,
    item: Json<ItemIn>,
    conn: DbConn,
) -> Result<Json<Item>, ErrorResponse> {
    use schema::items::dsl::*;

    // owner existence is not checked here; the declared foreign key is the only guard
    let new_item = NewItem {
        title: item.title.clone(),
        description: item.description.clone(),
        owner_id: uid,
    };

    let item = conn
        .run(move |c| {
            diesel::insert_into(items)
                .values(&new_item)
                .get_result::<Item>(c)
                .map_err(|err| ErrorResponse::internal(format!("Couldn't create item: {}", err)))
        })
        .await?;

    Ok(Json(item))
}
