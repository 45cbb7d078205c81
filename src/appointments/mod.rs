pub mod requests;
pub mod responses;

use crate::{
    database::{get_db_conn, last_insert_id},
    models::{
        appointments::{Appointment, NewAppointment},
        doctors::Doctor,
        patients::Patient,
    },
    protocol::InsertResponse,
    DbPool,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use anyhow::Context;
use diesel::prelude::*;
use std::convert::TryFrom;

use self::{requests::BookAppointmentRequest, responses::AppointmentItem};

pub const BOOK_OK: &str = "Cita agendada con éxito.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_appointments).service(book_appointment);
}

crate::api_funcs! {
    (get, list_appointments, "/citas", [], Ok, "Error al obtener las citas."),
    (post, book_appointment, "/citas", [info: web::Json<BookAppointmentRequest>], Created, "Error al agendar la cita."),
}

async fn list_appointments_impl(
    pool: web::Data<DbPool>,
) -> anyhow::Result<Vec<AppointmentItem>> {
    use crate::schema::{cita, medico, paciente};

    let conn = get_db_conn(&pool)?;
    let appos = web::block(move || {
        cita::table
            .inner_join(paciente::table.on(cita::id_paciente.eq(paciente::id_paciente)))
            .inner_join(medico::table.on(cita::id_medico.eq(medico::id_medico)))
            .order(cita::fecha_hora.desc())
            .load::<(Appointment, Patient, Doctor)>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(appos.into_iter().map(AppointmentItem::from).collect())
}

// No existence check on the patient or doctor: the foreign keys reject
// dangling ids and that failure is reported like any other.
async fn book_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookAppointmentRequest>,
) -> anyhow::Result<InsertResponse> {
    use crate::schema::cita;

    let data = NewAppointment::try_from(info.into_inner())?;

    let conn = get_db_conn(&pool)?;
    let insert_id = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            diesel::insert_into(cita::table)
                .values(&data)
                .execute(&conn)
                .context("DB error")?;
            diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")
        })
    })
    .await?;

    log::info!("Booked appointment {}", insert_id);
    Ok(InsertResponse::new(BOOK_OK, insert_id))
}
