#[derive(Queryable)]
pub struct Doctor {
    pub id_medico: i32,
    pub nombre: String,
    pub apellido: String,
    pub id_especialidad: i32,
}
