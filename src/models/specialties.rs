#[derive(Queryable)]
pub struct Specialty {
    pub id_especialidad: i32,
    pub nombre_especialidad: String,
}
