pub mod requests;
pub mod responses;
pub mod search;

use crate::{
    database::{get_db_conn, last_insert_id},
    models::{
        appointments::Appointment,
        doctors::Doctor,
        patients::{NewPatient, Patient},
    },
    protocol::InsertResponse,
    DbPool,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use anyhow::Context;
use diesel::prelude::*;
use std::convert::TryFrom;

use self::{
    requests::{RegisterPatientRequest, SearchPatientsQuery},
    responses::{PatientItem, PatientRecord},
    search::SearchRow,
};

pub const REGISTER_OK: &str = "Paciente registrado con éxito.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_patients)
        .service(register_patient)
        .service(search_patients);
}

crate::api_funcs! {
    (get, list_patients, "/pacientes", [], Ok, "Error al obtener los pacientes."),
    (post, register_patient, "/pacientes", [info: web::Json<RegisterPatientRequest>], Created, "Error al registrar el paciente."),
    (get, search_patients, "/pacientes/buscar", [info: web::Query<SearchPatientsQuery>], Ok, "Error durante la búsqueda."),
}

async fn list_patients_impl(pool: web::Data<DbPool>) -> anyhow::Result<Vec<PatientItem>> {
    use crate::schema::paciente;

    let conn = get_db_conn(&pool)?;
    let patients = web::block(move || {
        paciente::table
            .order((paciente::apellido.asc(), paciente::nombre.asc()))
            .load::<Patient>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(patients.into_iter().map(PatientItem::from).collect())
}

async fn register_patient_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterPatientRequest>,
) -> anyhow::Result<InsertResponse> {
    use crate::schema::paciente;

    let data = NewPatient::try_from(info.into_inner())?;

    let conn = get_db_conn(&pool)?;
    let insert_id = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            diesel::insert_into(paciente::table)
                .values(&data)
                .execute(&conn)
                .context("DB error")?;
            diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")
        })
    })
    .await?;

    log::info!("Registered patient {}", insert_id);
    Ok(InsertResponse::new(REGISTER_OK, insert_id))
}

async fn search_patients_impl(
    pool: web::Data<DbPool>,
    info: web::Query<SearchPatientsQuery>,
) -> anyhow::Result<Vec<PatientRecord>> {
    use crate::schema::{cita, medico, paciente};

    let pattern = crate::utils::get_str_pattern(&info.q);

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        paciente::table
            .left_join(cita::table.on(cita::id_paciente.eq(paciente::id_paciente)))
            .left_join(medico::table.on(cita::id_medico.eq(medico::id_medico)))
            .filter(
                paciente::nombre
                    .like(pattern.clone())
                    .or(paciente::apellido.like(pattern)),
            )
            .order((
                paciente::apellido.asc(),
                paciente::nombre.asc(),
                cita::fecha_hora.desc(),
            ))
            .load::<(Patient, Option<Appointment>, Option<Doctor>)>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(search::group_search_rows(
        rows.into_iter().map(SearchRow::from),
    ))
}
