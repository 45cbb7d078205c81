#[macro_use]
extern crate diesel;

pub mod appointments;
pub mod client;
pub mod config;
pub mod database;
pub mod doctors;
pub mod models;
pub mod patients;
pub mod protocol;
pub mod schema;
pub mod utils;

use actix_web::{
    dev::{Service, ServiceRequest},
    error,
    http::header::{HeaderValue, CONTENT_TYPE},
    web, HttpResponse,
};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

use crate::protocol::ErrorResponse;

pub type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

pub const INVALID_BODY: &str = "Cuerpo de la petición inválido.";
pub const INVALID_QUERY: &str = "Parámetros de consulta inválidos.";

/// Mounts every endpoint under `/api`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(query_config())
            .configure(patients::config)
            .configure(doctors::config)
            .configure(appointments::config)
            .wrap_fn(|mut req, srv| {
                default_to_json(&mut req);
                srv.call(req)
            }),
    );
}

/// Bodies sent without a content type are read as JSON.
fn default_to_json(req: &mut ServiceRequest) {
    if !req.headers().contains_key(CONTENT_TYPE) {
        req.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
}

/// Any declared content type is read as JSON; only a body that does not parse
/// is turned away here.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {}", err);
            error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_BODY)),
            )
            .into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected query string: {}", err);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_QUERY)),
        )
        .into()
    })
}
