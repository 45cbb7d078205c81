//! Folding of the flat search join into one record per patient.

use std::collections::HashMap;

use crate::models::{appointments::Appointment, doctors::Doctor, patients::Patient};

use super::responses::{PatientAppointmentItem, PatientItem, PatientRecord};

/// One row of `Paciente LEFT JOIN Cita LEFT JOIN Medico`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRow {
    pub patient: PatientItem,
    pub appointment: Option<PatientAppointmentItem>,
}

impl From<(Patient, Option<Appointment>, Option<Doctor>)> for SearchRow {
    fn from((patient, appointment, doctor): (Patient, Option<Appointment>, Option<Doctor>)) -> Self {
        let (medico_nombre, medico_apellido) = match doctor {
            Some(doctor) => (Some(doctor.nombre), Some(doctor.apellido)),
            None => (None, None),
        };
        Self {
            patient: patient.into(),
            appointment: appointment.map(|appo| PatientAppointmentItem {
                id_cita: appo.id_cita,
                fecha_hora: appo.fecha_hora,
                motivo_consulta: appo.motivo_consulta,
                estado: appo.estado,
                medico_nombre,
                medico_apellido,
            }),
        }
    }
}

/// Groups rows by patient identity. Patients keep the order in which they are
/// first seen and each patient's appointments keep the row order, so the
/// ordering chosen by the query carries over unchanged. A patient without
/// appointments yields a single row with no appointment and ends up with an
/// empty list.
pub fn group_search_rows<I>(rows: I) -> Vec<PatientRecord>
where
    I: IntoIterator<Item = SearchRow>,
{
    let mut slots: HashMap<i32, usize> = HashMap::new();
    let mut records: Vec<PatientRecord> = Vec::new();

    for SearchRow {
        patient,
        appointment,
    } in rows
    {
        let slot = match slots.get(&patient.id_paciente) {
            Some(&slot) => slot,
            None => {
                slots.insert(patient.id_paciente, records.len());
                records.push(PatientRecord::new(patient));
                records.len() - 1
            }
        };
        if let Some(appointment) = appointment {
            records[slot].citas.push(appointment);
        }
    }

    records
}
