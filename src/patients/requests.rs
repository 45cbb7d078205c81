use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::{
    models::patients::NewPatient,
    protocol::{required_text, FieldValue},
};

/// Registration form as posted by the front-end. Fields stay optional and
/// untyped here so that a missing or odd one fails like any other insert
/// error instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub nombre: Option<FieldValue>,
    pub apellido: Option<FieldValue>,
    pub fecha_nacimiento: Option<FieldValue>,
    pub telefono: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPatientsQuery {
    #[serde(default)]
    pub q: String,
}

impl TryFrom<RegisterPatientRequest> for NewPatient {
    type Error = anyhow::Error;

    fn try_from(info: RegisterPatientRequest) -> anyhow::Result<Self> {
        let fecha_nacimiento = required_text(info.fecha_nacimiento, "fecha_nacimiento")?;
        Ok(Self {
            nombre: required_text(info.nombre, "nombre")?,
            apellido: required_text(info.apellido, "apellido")?,
            fecha_nacimiento: crate::utils::parse_date_str(fecha_nacimiento)
                .context("Wrong format on 'fecha_nacimiento'")?,
            telefono: required_text(info.telefono, "telefono")?,
        })
    }
}
