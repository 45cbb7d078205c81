pub mod responses;

use crate::{
    database::get_db_conn,
    models::{doctors::Doctor, specialties::Specialty},
    DbPool,
};
use actix_web::{get, web, HttpResponse, Responder};
use anyhow::Context;
use diesel::prelude::*;

use self::responses::DoctorItem;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_doctors);
}

crate::api_funcs! {
    (get, list_doctors, "/medicos", [], Ok, "Error al obtener los médicos."),
}

async fn list_doctors_impl(pool: web::Data<DbPool>) -> anyhow::Result<Vec<DoctorItem>> {
    use crate::schema::{especialidad, medico};

    let conn = get_db_conn(&pool)?;
    let doctors = web::block(move || {
        medico::table
            .inner_join(
                especialidad::table
                    .on(medico::id_especialidad.eq(especialidad::id_especialidad)),
            )
            .order((medico::apellido.asc(), medico::nombre.asc()))
            .load::<(Doctor, Specialty)>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(doctors.into_iter().map(DoctorItem::from).collect())
}
