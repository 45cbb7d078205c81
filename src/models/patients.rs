use crate::schema::paciente;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct Patient {
    pub id_paciente: i32,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: NaiveDate,
    pub telefono: String,
}

#[derive(Insertable)]
#[table_name = "paciente"]
pub struct NewPatient {
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: NaiveDate,
    pub telefono: String,
}
