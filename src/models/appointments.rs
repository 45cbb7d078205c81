use crate::schema::cita;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct Appointment {
    pub id_cita: i32,
    pub id_paciente: i32,
    pub id_medico: i32,
    pub fecha_hora: NaiveDateTime,
    pub motivo_consulta: String,
    pub estado: Option<String>,
}

/// `Estado` is left to the column default.
#[derive(Insertable)]
#[table_name = "cita"]
pub struct NewAppointment {
    pub id_paciente: i32,
    pub id_medico: i32,
    pub fecha_hora: NaiveDateTime,
    pub motivo_consulta: String,
}
