use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{appointments::Appointment, doctors::Doctor, patients::Patient};

/// An appointment with its patient and doctor names copied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentItem {
    #[serde(rename = "ID_Cita")]
    pub id_cita: i32,
    #[serde(rename = "Fecha_Hora")]
    pub fecha_hora: NaiveDateTime,
    #[serde(rename = "Motivo_Consulta")]
    pub motivo_consulta: String,
    #[serde(rename = "Estado")]
    pub estado: Option<String>,
    #[serde(rename = "PacienteNombre")]
    pub paciente_nombre: String,
    #[serde(rename = "PacienteApellido")]
    pub paciente_apellido: String,
    #[serde(rename = "MedicoNombre")]
    pub medico_nombre: String,
    #[serde(rename = "MedicoApellido")]
    pub medico_apellido: String,
}

impl From<(Appointment, Patient, Doctor)> for AppointmentItem {
    fn from((appo, patient, doctor): (Appointment, Patient, Doctor)) -> Self {
        Self {
            id_cita: appo.id_cita,
            fecha_hora: appo.fecha_hora,
            motivo_consulta: appo.motivo_consulta,
            estado: appo.estado,
            paciente_nombre: patient.nombre,
            paciente_apellido: patient.apellido,
            medico_nombre: doctor.nombre,
            medico_apellido: doctor.apellido,
        }
    }
}
