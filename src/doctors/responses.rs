use serde::{Deserialize, Serialize};

use crate::models::{doctors::Doctor, specialties::Specialty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorItem {
    #[serde(rename = "ID_Medico")]
    pub id_medico: i32,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellido")]
    pub apellido: String,
    #[serde(rename = "Nombre_Especialidad")]
    pub nombre_especialidad: String,
}

impl From<(Doctor, Specialty)> for DoctorItem {
    fn from((doctor, specialty): (Doctor, Specialty)) -> Self {
        Self {
            id_medico: doctor.id_medico,
            nombre: doctor.nombre,
            apellido: doctor.apellido,
            nombre_especialidad: specialty.nombre_especialidad,
        }
    }
}
