use crate::{config::DbConfig, DbPool};
use actix_web::web;
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use r2d2::PooledConnection;
use std::time::Duration;

no_arg_sql_function!(
    last_insert_id,
    diesel::sql_types::Unsigned<diesel::sql_types::Bigint>,
    "Identity generated by the last insert on this connection."
);

/// Connections are opened lazily; an unreachable database only fails checkouts.
pub fn init_pool(config: &DbConfig) -> DbPool {
    let manager = ConnectionManager::<MysqlConnection>::new(config.url());
    r2d2::Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(Duration::from_millis(config.connect_timeout_ms))
        .build_unchecked(manager)
}

/// Checks out one connection and gives it back, so a misconfigured database
/// shows up in the log at startup rather than on the first request.
pub fn check_connection(pool: &DbPool) {
    match pool.get() {
        Ok(_conn) => log::info!("Database pool connected"),
        Err(err) => log::error!("Could not connect the database pool: {}", err),
    }
}

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get().context("DB connection")
}

/// A pool whose checkouts fail quickly: nothing listens on port 1.
#[cfg(test)]
pub(crate) fn unreachable_pool() -> DbPool {
    init_pool(&DbConfig {
        host: "127.0.0.1".to_string(),
        user: "nobody".to_string(),
        password: String::new(),
        port: 1,
        name: "none".to_string(),
        url: None,
        pool_size: 1,
        connect_timeout_ms: 200,
    })
}
