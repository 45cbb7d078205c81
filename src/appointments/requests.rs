use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::{
    models::appointments::NewAppointment,
    protocol::{required_id, required_text, FieldValue},
};

/// Booking form as posted by the front-end. `<select>` values arrive as
/// strings; other callers send numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub id_paciente: Option<FieldValue>,
    pub id_medico: Option<FieldValue>,
    pub fecha_hora: Option<FieldValue>,
    pub motivo: Option<FieldValue>,
}

impl TryFrom<BookAppointmentRequest> for NewAppointment {
    type Error = anyhow::Error;

    fn try_from(info: BookAppointmentRequest) -> anyhow::Result<Self> {
        let fecha_hora =
            crate::utils::parse_date_time_str(required_text(info.fecha_hora, "fecha_hora")?)
                .context("Wrong format on 'fecha_hora'")?;

        Ok(Self {
            id_paciente: required_id(info.id_paciente, "id_paciente")?,
            id_medico: required_id(info.id_medico, "id_medico")?,
            fecha_hora,
            motivo_consulta: required_text(info.motivo, "motivo")?,
        })
    }
}
