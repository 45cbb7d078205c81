use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::patients::Patient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientItem {
    #[serde(rename = "ID_Paciente")]
    pub id_paciente: i32,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellido")]
    pub apellido: String,
    #[serde(rename = "Fecha_Nacimiento")]
    pub fecha_nacimiento: NaiveDate,
    #[serde(rename = "Telefono")]
    pub telefono: String,
}

impl From<Patient> for PatientItem {
    fn from(data: Patient) -> Self {
        Self {
            id_paciente: data.id_paciente,
            nombre: data.nombre,
            apellido: data.apellido,
            fecha_nacimiento: data.fecha_nacimiento,
            telefono: data.telefono,
        }
    }
}

/// One appointment nested under a search result. The doctor names come from a
/// left join and are null when the doctor row is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAppointmentItem {
    #[serde(rename = "ID_Cita")]
    pub id_cita: i32,
    #[serde(rename = "Fecha_Hora")]
    pub fecha_hora: NaiveDateTime,
    #[serde(rename = "Motivo_Consulta")]
    pub motivo_consulta: String,
    #[serde(rename = "Estado")]
    pub estado: Option<String>,
    #[serde(rename = "MedicoNombre")]
    pub medico_nombre: Option<String>,
    #[serde(rename = "MedicoApellido")]
    pub medico_apellido: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(flatten)]
    pub patient: PatientItem,
    pub citas: Vec<PatientAppointmentItem>,
}

impl PatientRecord {
    pub fn new(patient: PatientItem) -> Self {
        Self {
            patient,
            citas: Vec::new(),
        }
    }
}
