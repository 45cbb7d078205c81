//! Markup for the parts of the page that are rebuilt from server responses.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    appointments::responses::AppointmentItem,
    doctors::responses::DoctorItem,
    patients::responses::{PatientAppointmentItem, PatientItem, PatientRecord},
};

pub const NO_APPOINTMENTS_ROW: &str = "No hay citas programadas.";
pub const NO_PATIENTS_FOUND: &str = "No se encontraron pacientes.";
pub const PATIENT_WITHOUT_APPOINTMENTS: &str = "No tiene citas programadas.";

/// Columns of the appointments table: date, patient, doctor, reason, status.
pub const APPOINTMENT_COLUMNS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_date_time(t: &NaiveDateTime) -> String {
    t.format("%d/%m/%Y, %H:%M:%S").to_string()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Badge for a status; the style class is the lowercased status text.
pub fn status_badge(estado: &str) -> String {
    format!(
        r#"<span class="estado {}">{}</span>"#,
        escape(&estado.to_lowercase()),
        escape(estado)
    )
}

pub fn appointment_rows(appos: &[AppointmentItem]) -> String {
    if appos.is_empty() {
        return format!(
            r#"<tr><td colspan="{}">{}</td></tr>"#,
            APPOINTMENT_COLUMNS, NO_APPOINTMENTS_ROW
        );
    }

    appos
        .iter()
        .map(|appo| {
            format!(
                "<tr><td>{}</td><td>{} {}</td><td>{} {}</td><td>{}</td><td>{}</td></tr>",
                format_date_time(&appo.fecha_hora),
                escape(&appo.paciente_nombre),
                escape(&appo.paciente_apellido),
                escape(&appo.medico_nombre),
                escape(&appo.medico_apellido),
                escape(&appo.motivo_consulta),
                appo.estado.as_deref().map(status_badge).unwrap_or_default(),
            )
        })
        .collect()
}

fn patient_appointment(appo: &PatientAppointmentItem) -> String {
    let mut item = format!(
        "<li><strong>Fecha:</strong> {} <br><strong>Médico:</strong> {} {} <br><strong>Motivo:</strong> {}",
        format_date_time(&appo.fecha_hora),
        escape(appo.medico_nombre.as_deref().unwrap_or_default()),
        escape(appo.medico_apellido.as_deref().unwrap_or_default()),
        escape(&appo.motivo_consulta),
    );
    if let Some(estado) = &appo.estado {
        item.push_str(" <br><strong>Estado:</strong> ");
        item.push_str(&status_badge(estado));
    }
    item.push_str("</li>");
    item
}

pub fn patient_cards(records: &[PatientRecord]) -> String {
    if records.is_empty() {
        return format!("<p>{}</p>", NO_PATIENTS_FOUND);
    }

    records
        .iter()
        .map(|record| {
            let citas = if record.citas.is_empty() {
                format!("<h4>{}</h4>", PATIENT_WITHOUT_APPOINTMENTS)
            } else {
                let items: String = record.citas.iter().map(patient_appointment).collect();
                format!(
                    r#"<h4>Citas Programadas:</h4><ul class="citas-lista">{}</ul>"#,
                    items
                )
            };
            let patient = &record.patient;
            format!(
                r#"<div class="paciente-card"><h3>{} {}</h3><p><strong>Fecha de Nacimiento:</strong> {}</p><p><strong>Teléfono:</strong> {}</p>{}</div>"#,
                escape(&patient.nombre),
                escape(&patient.apellido),
                format_date(&patient.fecha_nacimiento),
                escape(&patient.telefono),
                citas,
            )
        })
        .collect()
}

pub fn patient_options(patients: &[PatientItem]) -> Vec<SelectOption> {
    patients
        .iter()
        .map(|p| SelectOption {
            value: p.id_paciente.to_string(),
            label: format!("{} {}", p.nombre, p.apellido),
        })
        .collect()
}

pub fn doctor_options(doctors: &[DoctorItem]) -> Vec<SelectOption> {
    doctors
        .iter()
        .map(|d| SelectOption {
            value: d.id_medico.to_string(),
            label: format!("{} {} - {}", d.nombre, d.apellido, d.nombre_especialidad),
        })
        .collect()
}

/// `<option>` list led by an empty placeholder; the entry matching `selected`
/// is marked.
pub fn select_options(placeholder: &str, options: &[SelectOption], selected: &str) -> String {
    let mut html = format!(r#"<option value="">{}</option>"#, escape(placeholder));
    for option in options {
        let mark = if option.value == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape(&option.value),
            mark,
            escape(&option.label)
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    fn appointment(estado: Option<&str>) -> AppointmentItem {
        AppointmentItem {
            id_cita: 1,
            fecha_hora: at(10),
            motivo_consulta: "Dolor de cabeza".to_string(),
            estado: estado.map(str::to_string),
            paciente_nombre: "Ana".to_string(),
            paciente_apellido: "Lopez".to_string(),
            medico_nombre: "Juan".to_string(),
            medico_apellido: "Perez".to_string(),
        }
    }

    fn ana() -> PatientItem {
        PatientItem {
            id_paciente: 1,
            nombre: "Ana".to_string(),
            apellido: "Lopez".to_string(),
            fecha_nacimiento: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            telefono: "555-1111".to_string(),
        }
    }

    #[test]
    fn empty_table_gets_placeholder_spanning_all_columns() {
        assert_eq!(
            appointment_rows(&[]),
            r#"<tr><td colspan="5">No hay citas programadas.</td></tr>"#
        );
    }

    #[test]
    fn one_row_per_appointment() {
        let html = appointment_rows(&[appointment(Some("Programada")), appointment(None)]);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains("<td>01/05/2024, 10:30:00</td>"));
        assert!(html.contains("<td>Ana Lopez</td>"));
        assert!(html.contains("<td>Juan Perez</td>"));
        assert!(html.contains("<td>Dolor de cabeza</td>"));
    }

    #[test]
    fn status_badge_only_when_present() {
        let with = appointment_rows(&[appointment(Some("Confirmada"))]);
        assert!(with.contains(r#"<span class="estado confirmada">Confirmada</span>"#));

        let without = appointment_rows(&[appointment(None)]);
        assert!(!without.contains("estado"));
        assert!(without.ends_with("<td></td></tr>"));
    }

    #[test]
    fn text_is_escaped() {
        let mut appo = appointment(None);
        appo.motivo_consulta = "<script>alert('x')</script>".to_string();
        let html = appointment_rows(&[appo]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn no_patients_message() {
        assert_eq!(patient_cards(&[]), "<p>No se encontraron pacientes.</p>");
    }

    #[test]
    fn card_without_appointments_shows_placeholder() {
        let html = patient_cards(&[PatientRecord::new(ana())]);
        assert!(html.contains("<h3>Ana Lopez</h3>"));
        assert!(html.contains("01/01/1990"));
        assert!(html.contains("555-1111"));
        assert!(html.contains("No tiene citas programadas."));
        assert!(!html.contains("citas-lista"));
    }

    #[test]
    fn card_lists_each_appointment() {
        let mut record = PatientRecord::new(ana());
        for (id, estado) in [(1, Some("Programada")), (2, None)].iter() {
            record.citas.push(PatientAppointmentItem {
                id_cita: *id,
                fecha_hora: at(9),
                motivo_consulta: format!("motivo {}", id),
                estado: estado.map(str::to_string),
                medico_nombre: Some("Juan".to_string()),
                medico_apellido: None,
            });
        }
        let html = patient_cards(&[record]);
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("Citas Programadas:"));
        assert!(html.contains("motivo 1"));
        assert_eq!(html.matches("Estado:").count(), 1);
    }

    #[test]
    fn select_lists_start_with_placeholder_and_mark_selection() {
        let doctors = vec![DoctorItem {
            id_medico: 7,
            nombre: "Juan".to_string(),
            apellido: "Perez".to_string(),
            nombre_especialidad: "Pediatría".to_string(),
        }];
        let options = doctor_options(&doctors);
        assert_eq!(options[0].label, "Juan Perez - Pediatría");

        let html = select_options("Seleccione un médico", &options, "7");
        assert!(html.starts_with(r#"<option value="">Seleccione un médico</option>"#));
        assert!(html.contains(r#"<option value="7" selected>Juan Perez - Pediatría</option>"#));

        let patients = patient_options(&[ana()]);
        assert_eq!(
            patients,
            vec![SelectOption {
                value: "1".to_string(),
                label: "Ana Lopez".to_string(),
            }]
        );
    }
}
