use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use rocket_sync_db_pools::{database, diesel};

#[database("user_items")]
pub(crate) struct DbConn(diesel::SqliteConnection);

pub(crate) const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Pool configuration for the given SQLite file, on top of Rocket's defaults.
pub(crate) fn db_figment(database_url: &str) -> Figment {
    rocket::Config::figment().merge((
        "databases.user_items",
        rocket_sync_db_pools::Config {
            url: database_url.to_string(),
            pool_size: 10,
            timeout: 5,
        },
    ))
}

pub(crate) async fn run_db_migrations(rocket: Rocket<Build>) -> Rocket<Build> {
    let conn = DbConn::get_one(&rocket).await.expect("database connection");
    conn.run(|c| {
        c.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
    .await
    .expect("can run migrations");

    rocket
}
