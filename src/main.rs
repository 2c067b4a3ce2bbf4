mod api;
mod db;
mod error;
mod schema;
mod settings;

#[macro_use]
extern crate rocket;
extern crate dotenv;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use db::{db_figment, run_db_migrations, DbConn};
use settings::Settings;

#[get("/")]
fn index() -> &'static str {
    "Hello, world!"
}

fn build_rocket(database_url: &str) -> Rocket<Build> {
    rocket::custom(db_figment(database_url))
        .attach(DbConn::fairing())
        .attach(AdHoc::on_ignite("Diesel Migrations", run_db_migrations))
        .mount(
            "/",
            routes![
                index,
                crate::api::user_management::create::create_user,
                crate::api::user_management::list::get_users,
                crate::api::user_management::get_user::get_user,
                crate::api::user_management::update::update_user,
                crate::api::user_management::delete::delete_user,
                crate::api::item_management::create::create_user_item,
                crate::api::item_management::list::get_items,
            ],
        )
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();

    let settings = Settings::new();

    build_rocket(&settings.database_url)
}
